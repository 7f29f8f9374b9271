//! Route definitions for the video catalog.
//!
//! Mounted at `/videos`.
//!
//! ```text
//! GET  /                                 list_videos
//! POST /                                 create_video
//! GET  /{id}                             get_video
//! POST /{id}/hide                        hide_video
//! POST /{id}/unhide                      unhide_video
//! GET  /info-file/{info_file_id}         lookup_by_info_file
//! GET  /hash/{hash}/exists               hash_exists
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::videos;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(videos::list_videos).post(videos::create_video))
        .route("/{id}", get(videos::get_video))
        .route("/{id}/hide", post(videos::hide_video))
        .route("/{id}/unhide", post(videos::unhide_video))
        .route(
            "/info-file/{info_file_id}",
            get(videos::lookup_by_info_file),
        )
        .route("/hash/{hash}/exists", get(videos::hash_exists))
}
