//! Library configuration.
//!
//! This module handles the API base location setting and the development-mode
//! flag. The base location is read once at startup from the
//! `PAGECACHE_API_LOCATION` environment variable (a `.env` file is honored if
//! present).
//!
//! Format rules for the base location are only enforced in development mode;
//! production performs no validation and accepts whatever was configured.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable holding the API base location.
const API_LOCATION_VAR: &str = "PAGECACHE_API_LOCATION";

/// Base location reserved for the backend's internal API endpoint.
const RESERVED_LOCATION: &str = "/api";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API location isn't allowed to contain a trailing slash: {0}")]
    TrailingSlash(String),

    #[error("API location has to start with a leading slash: {0}")]
    MissingLeadingSlash(String),

    #[error("API location isn't allowed to match the internal API endpoint: {0}")]
    ReservedLocation(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// URL prefix under which page JSON resources are served.
    /// An empty string means the same-origin root.
    pub api_location: String,

    /// Enables location validation and diagnostic output.
    pub is_development: bool,
}

impl Config {
    /// Create a config with an explicit base location.
    ///
    /// In development mode the location is validated and a violation is fatal;
    /// in production mode the location is accepted as-is.
    pub fn new(api_location: impl Into<String>, is_development: bool) -> Result<Self, ConfigError> {
        let config = Self {
            api_location: api_location.into(),
            is_development,
        };
        if config.is_development {
            config.validate()?;
        }
        Ok(config)
    }

    /// Load the config from the environment.
    ///
    /// Reads `PAGECACHE_API_LOCATION` (empty when unset) after loading a
    /// `.env` file if one exists. Development mode follows the build profile.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (silently ignore if not found)
        let _ = dotenvy::dotenv();

        let api_location = std::env::var(API_LOCATION_VAR).unwrap_or_default();
        Self::new(api_location, cfg!(debug_assertions))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let location = &self.api_location;
        if !location.is_empty() && location.ends_with('/') {
            return Err(ConfigError::TrailingSlash(location.clone()));
        }
        if !location.is_empty() && !location.starts_with('/') {
            return Err(ConfigError::MissingLeadingSlash(location.clone()));
        }
        if location == RESERVED_LOCATION {
            return Err(ConfigError::ReservedLocation(location.clone()));
        }
        Ok(())
    }
}
