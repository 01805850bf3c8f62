//! Racing two probes against each other.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::RaceConfig;
use crate::error::RaceError;
use crate::probe::{HttpProbe, Probe};

/// Races two targets using a [`Probe`].
///
/// Both probes are spawned as independent tasks before either is awaited.
/// The first to complete wins. The other task is detached, not cancelled:
/// it runs to completion in the background and its result is dropped.
#[derive(Debug, Clone)]
pub struct Racer<P = HttpProbe> {
    probe: Arc<P>,
    timeout: Option<Duration>,
}

impl Default for Racer<HttpProbe> {
    fn default() -> Self {
        Self::new()
    }
}

impl Racer<HttpProbe> {
    /// Create a racer that probes over HTTP and waits forever.
    pub fn new() -> Self {
        Self::with_probe(HttpProbe::default())
    }
}

impl<P: Probe> Racer<P> {
    /// Create a racer with a custom probe.
    pub fn with_probe(probe: P) -> Self {
        Self {
            probe: Arc::new(probe),
            timeout: None,
        }
    }

    /// Fail with [`RaceError::Timeout`] if neither target completes in time.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Apply settings from a configuration.
    pub fn with_config(mut self, config: &RaceConfig) -> Self {
        if let Some(timeout) = config.timeout() {
            self.timeout = Some(timeout);
        }
        self
    }

    /// Returns the configured timeout, if any.
    pub fn timeout_limit(&self) -> Option<Duration> {
        self.timeout
    }

    /// Race `a` against `b` and return whichever completes first.
    ///
    /// A probe that fails still completes, so a target that refuses the
    /// connection quickly beats one that answers slowly. When both complete
    /// at once `a` wins.
    ///
    /// Without a timeout this waits until one of the probes completes,
    /// which may be never.
    pub async fn race(&self, a: &str, b: &str) -> Result<String, RaceError> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.run(a, b))
                .await
                .map_err(|_| {
                    warn!("Neither {} nor {} responded within {:?}", a, b, limit);
                    RaceError::Timeout { timeout: limit }
                }),
            None => Ok(self.run(a, b).await),
        }
    }

    async fn run(&self, a: &str, b: &str) -> String {
        debug!("Probing {} and {}", a, b);

        let mut first = self.spawn_probe(a);
        let mut second = self.spawn_probe(b);

        // A panicked probe task also counts as completed.
        let winner = tokio::select! {
            biased;
            _ = &mut first => a,
            _ = &mut second => b,
        };

        info!("{} responded first", winner);
        winner.to_string()
    }

    fn spawn_probe(&self, target: &str) -> JoinHandle<()> {
        let probe = Arc::clone(&self.probe);
        let target = target.to_string();

        tokio::spawn(async move {
            match probe.probe(&target).await {
                Ok(()) => debug!("Probe of {} completed", target),
                Err(e) => debug!("Probe of {} failed: {}", target, e),
            }
        })
    }
}

/// Race `a` against `b` over HTTP and return whichever responds first.
///
/// There is no timeout: if neither target ever responds this never returns.
pub async fn race(a: &str, b: &str) -> String {
    Racer::new().run(a, b).await
}

/// Like [`race`], but gives up after `timeout`.
pub async fn configurable_race(a: &str, b: &str, timeout: Duration) -> Result<String, RaceError> {
    Racer::new().timeout(timeout).race(a, b).await
}
