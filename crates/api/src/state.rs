use std::sync::Arc;

use vidarc_catalog::VideoCatalog;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: vidarc_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// The video cataloging component.
    pub catalog: VideoCatalog,
}
