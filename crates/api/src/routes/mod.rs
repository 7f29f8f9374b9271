pub mod health;
pub mod videos;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /videos                              list (GET), create (POST)
/// /videos/{id}                         get
/// /videos/{id}/hide                    hide (POST)
/// /videos/{id}/unhide                  unhide (POST)
/// /videos/info-file/{info_file_id}     lookup by info file reference
/// /videos/hash/{hash}/exists           content-hash existence check
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/videos", videos::router())
}
