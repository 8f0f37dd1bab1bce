//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional and fall back to development defaults:
//! - `ANNUAIRE_DATABASE_URL` - `SQLite` connection string (default: `sqlite://data/coiffeurs.db`)
//! - `ANNUAIRE_HOST` - Bind address (default: 127.0.0.1)
//! - `ANNUAIRE_PORT` - Listen port (default: 3000)
//! - `ANNUAIRE_USERS_FILE` - Path to the credential list JSON (default: `data/user.json`)
//! - `ANNUAIRE_STATIC_DIR` - Directory served for the browser client (default: `public`)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `SQLite` database connection URL
    pub database_url: String,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Path to the user-credential JSON file, re-read on every login attempt
    pub users_file: PathBuf,
    /// Directory of static assets served to the browser client
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = std::env::var("ANNUAIRE_DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://data/coiffeurs.db".to_owned());

        let host = match std::env::var("ANNUAIRE_HOST") {
            Ok(raw) => raw.parse().map_err(|_| {
                ConfigError::InvalidEnvVar("ANNUAIRE_HOST".to_owned(), raw)
            })?,
            Err(_) => IpAddr::from([127, 0, 0, 1]),
        };

        let port = match std::env::var("ANNUAIRE_PORT") {
            Ok(raw) => raw.parse().map_err(|_| {
                ConfigError::InvalidEnvVar("ANNUAIRE_PORT".to_owned(), raw)
            })?,
            Err(_) => 3000,
        };

        let users_file = std::env::var("ANNUAIRE_USERS_FILE")
            .map_or_else(|_| PathBuf::from("data/user.json"), PathBuf::from);

        let static_dir = std::env::var("ANNUAIRE_STATIC_DIR")
            .map_or_else(|_| PathBuf::from("public"), PathBuf::from);

        Ok(Self {
            database_url,
            host,
            port,
            users_file,
            static_dir,
        })
    }

    /// The socket address to bind the server to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
