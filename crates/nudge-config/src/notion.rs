//! Notion record store configuration.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://api.notion.com".to_string()
}

fn default_api_version() -> String {
    "2022-06-28".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_page_size() -> u32 {
    100
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotionConfig {
    /// Integration token (`secret_...` / `ntn_...`).
    #[serde(default)]
    pub api_key: String,

    /// Database holding the task records.
    #[serde(default)]
    pub database_id: String,

    /// API root, overridable for tests and proxies.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Value of the `Notion-Version` header.
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Records requested per query page (the API caps this at 100).
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            database_id: String::new(),
            base_url: default_base_url(),
            api_version: default_api_version(),
            timeout_secs: default_timeout_secs(),
            page_size: default_page_size(),
        }
    }
}

impl NotionConfig {
    /// Check if the Notion config has the minimum required fields.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.database_id.is_empty()
    }
}
