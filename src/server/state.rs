//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into each handler through Axum's
//! state extraction. Every field is cheap to clone: the database connection is a pool,
//! the gamification config sits behind an `Arc` and the awarder is a channel sender.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{model::gamification::GamificationConfig, service::awarder::ExpAwarder};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Activity rules and the day-boundary policy shared with the award worker.
    pub gamification: Arc<GamificationConfig>,

    /// Queue for fire-and-forget EXP awards.
    pub awarder: ExpAwarder,

    /// Shared key other services present on internal endpoints.
    pub internal_api_key: Arc<str>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `gamification` - Activity rules and day policy
    /// - `awarder` - Handle to the running award worker
    /// - `internal_api_key` - Key for internal endpoints
    pub fn new(
        db: DatabaseConnection,
        gamification: Arc<GamificationConfig>,
        awarder: ExpAwarder,
        internal_api_key: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            db,
            gamification,
            awarder,
            internal_api_key: internal_api_key.into(),
        }
    }
}
