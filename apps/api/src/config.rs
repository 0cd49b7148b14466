//! API server configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                        | Default                            |
//! |---------------------------------|------------------------------------|
//! | `STOREFRONT_BIND_ADDR`          | `0.0.0.0`                          |
//! | `STOREFRONT_PORT`               | `8080`                             |
//! | `STOREFRONT_DB_PATH`            | `storefront.db`                    |
//! | `STOREFRONT_DB_MAX_CONNECTIONS` | `5`                                |
//! | `STOREFRONT_SEED`               | `false`                            |
//! | `STOREFRONT_LOG`                | `info,storefront=debug,sqlx=warn`  |

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default tracing filter when neither `RUST_LOG` nor `STOREFRONT_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "info,storefront=debug,sqlx=warn";

/// API server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener to
    pub bind_addr: String,

    /// HTTP port
    pub port: u16,

    /// SQLite database file
    pub database_path: String,

    /// Pool size
    pub db_max_connections: u32,

    /// Load sample data into empty collections at startup
    pub seed_sample_data: bool,

    /// tracing-subscriber filter directive
    pub log_filter: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            bind_addr: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            database_path: "storefront.db".to_string(),
            db_max_connections: 5,
            seed_sample_data: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ApiConfig::default();

        let config = ApiConfig {
            bind_addr: lookup("STOREFRONT_BIND_ADDR").unwrap_or(defaults.bind_addr),
            port: parse_or(&lookup, "STOREFRONT_PORT", defaults.port)?,
            database_path: lookup("STOREFRONT_DB_PATH").unwrap_or(defaults.database_path),
            db_max_connections: parse_or(
                &lookup,
                "STOREFRONT_DB_MAX_CONNECTIONS",
                defaults.db_max_connections,
            )?,
            seed_sample_data: parse_or(&lookup, "STOREFRONT_SEED", defaults.seed_sample_data)?,
            log_filter: lookup("STOREFRONT_LOG").unwrap_or(defaults.log_filter),
        };

        if config.port == 0 {
            return Err(ConfigError::InvalidValue("STOREFRONT_PORT".to_string()));
        }
        if config.db_max_connections == 0 {
            return Err(ConfigError::InvalidValue(
                "STOREFRONT_DB_MAX_CONNECTIONS".to_string(),
            ));
        }

        Ok(config)
    }

    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(default),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
