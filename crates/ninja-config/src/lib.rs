//! # ninja-config
//!
//! Layered configuration loading for the Ninja Park CMS admin using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`NINJA_*` prefix, `__` as separator)
//! 2. The bare `PORT` environment variable (sets `server.port`)
//! 3. Project-level `./ninja.toml`
//! 4. User-level `~/.config/ninja-cms/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `NINJA_API__BASE_URL` -> `api.base_url`,
//! `NINJA_SERVER__CACHE_TTL_SECS` -> `server.cache_ttl_secs`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use ninja_config::NinjaConfig;
//!
//! let config = NinjaConfig::load_with_dotenv().expect("config");
//! config.validate().expect("valid config");
//! println!("backend: {}", config.api.base_url);
//! ```

mod api;
mod error;
mod server;
mod site;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use server::ServerConfig;
pub use site::SiteConfig;

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// File name of the project-local config.
pub const LOCAL_CONFIG_FILE: &str = "ninja.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NinjaConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl NinjaConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT read `.env`; use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed or a
    /// value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load `.env` from the current directory (if any), then [`Self::load`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests and the CLI can layer extra providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment
            .merge(Env::raw().only(&["PORT"]).map(|_| "server.port".into()))
            .merge(Env::prefixed("NINJA_").split("__"))
    }

    /// Check values that deserialize fine but cannot work at runtime.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a non-http(s) API base URL,
    /// a zero timeout or a zero port.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.api.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::invalid(
                "api.base_url",
                format!("'{base}' is not an http(s) URL"),
            ));
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::invalid("api.timeout_secs", "must be at least 1"));
        }
        if self.server.port == 0 {
            return Err(ConfigError::invalid("server.port", "must be between 1 and 65535"));
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ninja-cms").join("config.toml"))
    }
}
