// ABOUTME: Configuration loading and validation for the itemd server.
// ABOUTME: Reads environment variables with defaults; CLI flags in the binary override these.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("ITEMD_BIND is not a valid socket address: {0}")]
    InvalidBind(String),
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ItemdConfig {
    pub db_path: PathBuf,
    pub bind: SocketAddr,
}

impl ItemdConfig {
    /// Load configuration from environment variables with sensible defaults.
    ///
    /// Environment variables:
    /// - ITEMD_DB: SQLite database file (default: ./items.db)
    /// - ITEMD_BIND: socket address to bind (default: 127.0.0.1:7411)
    pub fn from_env() -> Result<Self, ConfigError> {
        let db_path = std::env::var("ITEMD_DB")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./items.db"));

        let bind_str = std::env::var("ITEMD_BIND").unwrap_or_else(|_| "127.0.0.1:7411".to_string());
        let bind: SocketAddr = bind_str
            .parse()
            .map_err(|_| ConfigError::InvalidBind(bind_str))?;

        Ok(Self { db_path, bind })
    }
}
