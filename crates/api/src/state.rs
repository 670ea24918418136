use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable; requests share nothing mutable beyond the
/// pool, which does its own synchronization.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: sesame_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
