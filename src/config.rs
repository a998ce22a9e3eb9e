//! Configuration handling for the signup app

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable that makes the simulated transport fail
const SIMULATE_FAILURE_ENV: &str = "SIGNUP_SIMULATE_FAILURE";

/// User configuration for the signup app
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignupConfig {
    /// Latency of the simulated transport
    pub submit_delay_ms: u64,
    /// How long a notification stays on screen
    pub notification_ms: u64,
    /// Submit button label while a submission is in flight
    pub busy_label: String,
    /// Where back-navigation goes when there is no history
    pub root_path: String,
    pub login_path: String,
    /// When set, every simulated submission fails with this reason
    pub simulate_failure: Option<String>,
}

impl Default for SignupConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 2000,
            notification_ms: 3000,
            busy_label: "Creating account...".to_string(),
            root_path: "/".to_string(),
            login_path: "/login".to_string(),
            simulate_failure: None,
        }
    }
}

impl SignupConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "signup", "signup-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)?;
                serde_json::from_str(&content)?
            }
            _ => Self::default(),
        };

        if let Ok(reason) = std::env::var(SIMULATE_FAILURE_ENV) {
            config.apply_failure_override(reason);
        }

        Ok(config)
    }

    fn apply_failure_override(&mut self, reason: String) {
        if reason.trim().is_empty() {
            return;
        }
        tracing::info!("Simulated submissions will fail: {reason}");
        self.simulate_failure = Some(reason);
    }
}
