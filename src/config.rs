use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

use crate::stats::service::DEFAULT_APP_NAME;

pub const DEFAULT_CLOUD_URL: &str = "https://32wop75hhc.execute-api.us-east-1.amazonaws.com/prod/data";
pub const DEFAULT_CLOUD_TABLE: &str = "tca-data";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} has an invalid value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CloudSettings {
    /// `None` keeps games in memory instead of calling the gateway
    pub url: Option<String>,
    pub table_name: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub app_name: String,
    pub cache_path: PathBuf,
    pub cloud: CloudSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            app_name: DEFAULT_APP_NAME.to_string(),
            cache_path: PathBuf::from(".unobuddy-cache.json"),
            cloud: CloudSettings {
                url: Some(DEFAULT_CLOUD_URL.to_string()),
                table_name: DEFAULT_CLOUD_TABLE.to_string(),
                timeout_secs: 10,
            },
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, falling back to defaults for missing keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("UNOBUDDY_BIND_ADDR") {
            config.bind_addr = value.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::Invalid {
                    key: "UNOBUDDY_BIND_ADDR",
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(value) = lookup("UNOBUDDY_APP_NAME") {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    key: "UNOBUDDY_APP_NAME",
                    value,
                    reason: "must not be empty".to_string(),
                });
            }
            config.app_name = value;
        }

        if let Some(value) = lookup("UNOBUDDY_CACHE_PATH") {
            config.cache_path = PathBuf::from(value);
        }

        if let Some(value) = lookup("UNOBUDDY_CLOUD_URL") {
            let value = value.trim().to_string();
            config.cloud.url = if value.is_empty() { None } else { Some(value) };
        }

        if let Some(value) = lookup("UNOBUDDY_CLOUD_TABLE") {
            config.cloud.table_name = value;
        }

        if let Some(value) = lookup("UNOBUDDY_CLOUD_TIMEOUT_SECS") {
            config.cloud.timeout_secs = value.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::Invalid {
                    key: "UNOBUDDY_CLOUD_TIMEOUT_SECS",
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        Ok(config)
    }
}
