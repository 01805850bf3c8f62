use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::ProbeError;
use crate::probe::Probe;

#[derive(Debug, Clone, Copy)]
enum Outcome {
    Respond(Duration),
    Fail(Duration),
    Hang,
}

/// A probe with scripted latency per target. Unknown targets never complete.
#[derive(Debug, Clone, Default)]
pub struct LatencyProbe {
    plan: HashMap<String, Outcome>,
    completed: Arc<Mutex<Vec<String>>>,
}

impl LatencyProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, target: &str, after: Duration) -> Self {
        self.plan.insert(target.to_string(), Outcome::Respond(after));
        self
    }

    pub fn fail(mut self, target: &str, after: Duration) -> Self {
        self.plan.insert(target.to_string(), Outcome::Fail(after));
        self
    }

    pub fn hang(mut self, target: &str) -> Self {
        self.plan.insert(target.to_string(), Outcome::Hang);
        self
    }

    /// Targets whose probe has finished, in completion order.
    pub fn completed(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.completed)
    }
}

impl Probe for LatencyProbe {
    async fn probe(&self, target: &str) -> Result<(), ProbeError> {
        let outcome = self.plan.get(target).copied().unwrap_or(Outcome::Hang);

        let result = match outcome {
            Outcome::Respond(after) => {
                tokio::time::sleep(after).await;
                Ok(())
            }
            Outcome::Fail(after) => {
                tokio::time::sleep(after).await;
                Err(ProbeError::Failed(format!("{target} refused the connection")))
            }
            Outcome::Hang => std::future::pending().await,
        };

        self.completed.lock().unwrap().push(target.to_string());
        result
    }
}
