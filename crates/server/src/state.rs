//! Application state shared across handlers.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use sqlx::SqlitePool;

use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// database pool, configuration, and the process-wide login flag.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    pool: SqlitePool,
    /// The single shared login flag. Initialized false at process start,
    /// shared by every client; concurrent writes race and the last one
    /// wins, which is exactly the contract.
    logged_in: AtomicBool,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: ServerConfig, pool: SqlitePool) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                logged_in: AtomicBool::new(false),
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.inner.pool
    }

    /// Current value of the shared login flag.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.inner.logged_in.load(Ordering::Relaxed)
    }

    /// Set the shared login flag.
    pub fn set_logged_in(&self, value: bool) {
        self.inner.logged_in.store(value, Ordering::Relaxed);
    }
}
