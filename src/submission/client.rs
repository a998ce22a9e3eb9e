//! Fixed-delay stand-in for a real account-creation backend

use super::traits::{SubmissionReceipt, SubmissionTransport};
use crate::config::SignupConfig;
use crate::state::FormSnapshot;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Transport that waits a fixed delay and then resolves.
///
/// Succeeds unless constructed with a failure reason.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    delay: Duration,
    failure: Option<String>,
}

impl SimulatedTransport {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            failure: None,
        }
    }

    /// A transport whose every submission fails with `reason`
    pub fn failing(delay: Duration, reason: impl Into<String>) -> Self {
        Self {
            delay,
            failure: Some(reason.into()),
        }
    }

    pub fn from_config(config: &SignupConfig) -> Self {
        let delay = Duration::from_millis(config.submit_delay_ms);
        match &config.simulate_failure {
            Some(reason) => Self::failing(delay, reason.clone()),
            None => Self::new(delay),
        }
    }
}

#[async_trait]
impl SubmissionTransport for SimulatedTransport {
    async fn submit(&self, snapshot: FormSnapshot) -> Result<SubmissionReceipt> {
        tracing::info!("Registration data: {}", snapshot.redacted_json());

        tokio::time::sleep(self.delay).await;

        if let Some(reason) = &self.failure {
            return Err(anyhow!("{reason}"));
        }

        Ok(SubmissionReceipt {
            message: "Account created successfully".to_string(),
        })
    }
}
