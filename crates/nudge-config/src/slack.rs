//! Slack webhook configuration.

use serde::{Deserialize, Serialize};

const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SlackConfig {
    /// Incoming webhook URL.
    #[serde(default)]
    pub webhook_url: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            webhook_url: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SlackConfig {
    pub fn is_configured(&self) -> bool {
        !self.webhook_url.is_empty()
    }
}
