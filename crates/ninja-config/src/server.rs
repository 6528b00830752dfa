//! Admin HTTP server settings.

use serde::{Deserialize, Serialize};

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    3000
}

const fn default_refresh_interval_secs() -> u64 {
    30
}

const fn default_cache_ttl_secs() -> u64 {
    0
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    /// Listening port. The bare `PORT` environment variable also sets this.
    #[serde(default = "default_port")]
    pub port: u16,

    /// How often list pages reload themselves. `0` disables refreshing.
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,

    /// How long a fetched list stays fresh before the backend is asked again.
    /// `0` (the default) fetches on every list request.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            refresh_interval_secs: default_refresh_interval_secs(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

impl ServerConfig {
    /// `host:port` for binding.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.refresh_interval_secs, 30);
        assert_eq!(config.cache_ttl_secs, 0);
    }
}
