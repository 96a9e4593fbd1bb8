//! Configuration for the field workflow core.
//!
//! Settings load from an optional YAML file merged with `WIZONE_`-prefixed
//! environment variables (`WIZONE_API_BASE_URL`,
//! `WIZONE_REQUEST_TIMEOUT_MS`, ...), then validate before use.

use std::path::Path;
use std::time::Duration;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::cache::QueryCacheConfig;
use crate::error::{Result, WizoneError};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WizoneConfig {
    /// Base URL of the Wizone API server
    pub api_base_url: String,
    /// Overall per-request timeout; this crate enforces no timeout of its
    /// own beyond the transport's
    pub request_timeout_ms: u64,
    pub connect_timeout_ms: u64,
    /// Capacity of the lifecycle event broadcast channel
    pub event_channel_capacity: usize,
    pub cache: QueryCacheConfig,
}

impl Default for WizoneConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000".to_string(),
            request_timeout_ms: 30_000,
            connect_timeout_ms: 10_000,
            event_channel_capacity: 256,
            cache: QueryCacheConfig::default(),
        }
    }
}

impl WizoneConfig {
    /// Load configuration with the default file location (`config/wizone.*`
    /// relative to the working directory, optional).
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit file, merged with environment
    /// overrides.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name("config/wizone").required(false)),
        };

        builder = builder.add_source(
            Environment::with_prefix("WIZONE")
                .separator("__")
                .try_parsing(true),
        );

        let config: WizoneConfig = builder
            .build()
            .map_err(|e| WizoneError::ConfigurationError(e.to_string()))?
            .try_deserialize()
            .map_err(|e| WizoneError::ConfigurationError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_base_url.trim().is_empty() {
            return Err(WizoneError::ConfigurationError(
                "api_base_url must not be empty".to_string(),
            ));
        }
        if self.request_timeout_ms == 0 {
            return Err(WizoneError::ConfigurationError(
                "request_timeout_ms must be greater than zero".to_string(),
            ));
        }
        if self.event_channel_capacity == 0 {
            return Err(WizoneError::ConfigurationError(
                "event_channel_capacity must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}
