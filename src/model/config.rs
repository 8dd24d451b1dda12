use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::CountryCatalog;

/// Base URL of the user store. Matches the mock server's default port.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminConfig {
    pub version: u32,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub countries: CountryCatalog,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Where the TUI writes its log. Unset means no log.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            version: 1,
            base_url: default_base_url(),
            countries: CountryCatalog::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            log_file: None,
        }
    }
}
