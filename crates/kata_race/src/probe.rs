//! Reachability probes.

use std::future::Future;
use std::time::Duration;

use tracing::debug;

use crate::error::ProbeError;

/// A reachability check against a single target.
///
/// The future resolves once the target has answered or the attempt has
/// failed. Both outcomes count as completion for a race.
pub trait Probe: Send + Sync + 'static {
    fn probe(&self, target: &str) -> impl Future<Output = Result<(), ProbeError>> + Send;
}

/// Probes a target with an HTTP GET.
///
/// Completion means the response headers arrived, whatever the status
/// code. The body is never read.
#[derive(Debug, Clone, Default)]
pub struct HttpProbe {
    client: reqwest::Client,
}

/// Builder for HttpProbe.
#[derive(Debug, Default)]
pub struct HttpProbeBuilder {
    request_timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl HttpProbe {
    /// Create a new builder for HttpProbe.
    pub fn builder() -> HttpProbeBuilder {
        HttpProbeBuilder::default()
    }

    /// Use an existing client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Probe for HttpProbe {
    async fn probe(&self, target: &str) -> Result<(), ProbeError> {
        let response = self.client.get(target).send().await?;
        debug!("{} answered with {}", target, response.status());
        Ok(())
    }
}

impl HttpProbeBuilder {
    /// Limit how long a single request may take.
    ///
    /// A request that hits this limit fails, and a failed probe still
    /// completes the race. Leave unset to wait for the target indefinitely.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Set the `User-Agent` header sent with each probe.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the HttpProbe.
    pub fn build(self) -> Result<HttpProbe, ProbeError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.request_timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|e| ProbeError::ClientBuildError(e.to_string()))?;

        Ok(HttpProbe { client })
    }
}
