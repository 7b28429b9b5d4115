//! Configuration model loaded from external sources.

use std::time::Duration;

use serde::Deserialize;

fn default_request_timeout_secs() -> u64 {
    30
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub domain: String,
    pub address: String,
    pub port: u16,
    /// Root of the catalog REST API, e.g. `https://api.example.com/api/v1/`.
    pub api_base_url: String,
    pub templates_dir: String,
    /// Signs the session and flash message cookies; at least 64 bytes.
    pub secret: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
