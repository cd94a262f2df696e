//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into each handler through
//! Axum's state extraction.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// `DatabaseConnection` is a connection pool, so clones share the pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
