use std::time::Duration;

use anyhow::{Context, Result};

use crate::model::AdminConfig;

mod http_client;
mod types;
pub use self::types::error_message;
mod users;

/// Blocking client for the `/users` REST resource.
pub struct RemoteClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("useradmin")
            .timeout(timeout)
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_config(cfg: &AdminConfig) -> Result<Self> {
        Self::new(&cfg.base_url, Duration::from_secs(cfg.timeout_secs))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
