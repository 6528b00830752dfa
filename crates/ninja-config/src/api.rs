//! Backend API connection settings.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "http://localhost:8000/api/v1".to_string()
}

/// Transport timeout for every backend request, in seconds.
const fn default_timeout_secs() -> u64 {
    60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Root of the backend REST API, e.g. `https://api.example.com/api/v1`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Bearer token sent with every request when set.
    #[serde(default)]
    pub auth_token: Option<String>,

    /// Host that serves uploaded media. Derived from `base_url` when unset.
    #[serde(default)]
    pub media_base: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            auth_token: None,
            media_base: None,
        }
    }
}

impl ApiConfig {
    /// Media host: `media_base` if set, otherwise `base_url` with a trailing
    /// `/api/v1` removed.
    #[must_use]
    pub fn media_base(&self) -> String {
        if let Some(base) = self.media_base.as_deref().filter(|b| !b.trim().is_empty()) {
            return base.trim_end_matches('/').to_string();
        }
        let base = self.base_url.trim_end_matches('/');
        base.strip_suffix("/api/v1").unwrap_or(base).to_string()
    }

    /// Whether a non-empty bearer token is configured.
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.auth_token.as_deref().is_some_and(|t| !t.trim().is_empty())
    }
}
