//! Database operations for the coiffeur record store.
//!
//! # Database: `SQLite`
//!
//! The store is a single-file `SQLite` database holding one table:
//!
//! ## Tables
//!
//! - `coiffeurs` - the record store (see `migrations/0001_create_coiffeurs.sql`)
//!
//! # Migrations
//!
//! Migrations are embedded from `crates/server/migrations/` and run at
//! startup via [`MIGRATOR`].

use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use thiserror::Error;

pub mod coiffeurs;

pub use coiffeurs::CoiffeurRepository;

/// Embedded schema migrations for the record store.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// Errors that can occur during repository operations.
///
/// The split mirrors where the underlying call failed: acquiring a
/// connection (`Unavailable`) versus executing a read (`Query`) or a
/// write (`Write`).
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The store could not be opened or a connection acquired.
    #[error("record store unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    /// A read query failed to execute.
    #[error("query failed: {0}")]
    Query(#[source] sqlx::Error),

    /// A write statement failed to execute.
    #[error("write failed: {0}")]
    Write(#[source] sqlx::Error),
}

/// Create a `SQLite` connection pool with sensible defaults.
///
/// The database file is created if it does not exist yet.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection string is invalid or the
/// database cannot be opened.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = database_url
        .parse::<SqliteConnectOptions>()?
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
}
