//! Runtime configuration read from the environment (after `.env` is loaded).

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

use oxy_pulse_data::store::{DEFAULT_FATIGUE_MODEL_PATH, DEFAULT_HEMOGLOBIN_MODEL_PATH};
use oxy_pulse_data::ModelStoreConfig;

/// Default listening port
pub const DEFAULT_PORT: u16 = 5000;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// PORT is not a valid port number
    #[error("Invalid PORT value '{value}': {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// HOST is not an IP address
    #[error("Invalid HOST value '{0}'")]
    InvalidHost(String),
}

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Interface to bind
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Directory holding the HTML pages and assets
    pub static_dir: PathBuf,
    /// Deployment environment name, reported by the health check
    pub environment: String,
    /// Model artifact locations
    pub models: ModelStoreConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from("static"),
            environment: "development".to_string(),
            models: ModelStoreConfig::default(),
        }
    }
}

impl AppConfig {
    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup("HOST") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidHost(value))?,
            None => defaults.host,
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => defaults.port,
        };

        let static_dir = lookup("STATIC_DIR").map(PathBuf::from).unwrap_or(defaults.static_dir);
        let environment = lookup("APP_ENV").unwrap_or(defaults.environment);

        let hemoglobin_path = lookup("HEMOGLOBIN_MODEL_PATH").map(PathBuf::from).unwrap_or_else(|| {
            debug!("HEMOGLOBIN_MODEL_PATH not set - using {}", DEFAULT_HEMOGLOBIN_MODEL_PATH);
            defaults.models.hemoglobin_path.clone()
        });
        let fatigue_path = lookup("FATIGUE_MODEL_PATH").map(PathBuf::from).unwrap_or_else(|| {
            debug!("FATIGUE_MODEL_PATH not set - using {}", DEFAULT_FATIGUE_MODEL_PATH);
            defaults.models.fatigue_path.clone()
        });

        Ok(Self {
            host,
            port,
            static_dir,
            environment,
            models: ModelStoreConfig {
                hemoglobin_path,
                fatigue_path,
            },
        })
    }

    /// Address the server binds to
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
