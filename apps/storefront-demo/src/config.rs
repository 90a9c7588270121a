//! Demo configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;

use serde::{Deserialize, Serialize};
use storefront_core::config::DEFAULT_NON_MEMBER_SURCHARGE_BPS;
use storefront_core::StoreConfig;

/// Default tracing filter when neither `RUST_LOG` nor `STOREFRONT_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "info,storefront_core=debug";

/// How the receipt is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per cart line plus totals.
    #[default]
    Text,
    /// The full receipt as pretty-printed JSON.
    Json,
}

/// Demo configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Surcharge for non-premium members, in basis points
    pub surcharge_bps: u32,

    /// tracing-subscriber filter directive
    pub log_filter: String,

    /// Receipt output format
    pub output: OutputFormat,
}

impl DemoConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its
    /// value if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let surcharge_bps = match lookup("STOREFRONT_SURCHARGE_BPS") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("STOREFRONT_SURCHARGE_BPS".to_string()))?,
            None => DEFAULT_NON_MEMBER_SURCHARGE_BPS,
        };

        let log_filter = lookup("RUST_LOG")
            .or_else(|| lookup("STOREFRONT_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let output = match lookup("STOREFRONT_OUTPUT").as_deref().map(str::trim) {
            None | Some("text") => OutputFormat::Text,
            Some("json") => OutputFormat::Json,
            Some(_) => return Err(ConfigError::InvalidValue("STOREFRONT_OUTPUT".to_string())),
        };

        Ok(DemoConfig {
            surcharge_bps,
            log_filter,
            output,
        })
    }

    /// Builds the store pricing policy, rejecting surcharges above 100%.
    pub fn store_config(&self) -> Result<StoreConfig, ConfigError> {
        StoreConfig::with_surcharge_bps(self.surcharge_bps)
            .map_err(|_| ConfigError::InvalidValue("STOREFRONT_SURCHARGE_BPS".to_string()))
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
