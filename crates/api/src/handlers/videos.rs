//! Handlers for the video catalog endpoints.
//!
//! Pagination bounds are validated here, at the boundary; the listing
//! engine below assumes pre-validated input.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use vidarc_catalog::ListVideosQuery;
use vidarc_core::error::CoreError;
use vidarc_core::pagination;
use vidarc_core::types::DbId;
use vidarc_db::models::video::CreateVideo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameters and payloads
// ---------------------------------------------------------------------------

#[derive(Debug, serde::Deserialize)]
pub struct ListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub include_hidden: Option<bool>,
    pub metadata_id: Option<DbId>,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: DbId,
}

#[derive(Debug, Serialize)]
pub struct UpdatedResponse {
    pub updated: bool,
}

#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub id: Option<DbId>,
}

#[derive(Debug, Serialize)]
pub struct ExistsResponse {
    pub exists: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/videos
///
/// Catalog an ingested video. Returns the existing record's id when the
/// content hash is already cataloged; 422 when metadata linkage fails.
pub async fn create_video(
    State(state): State<AppState>,
    Json(body): Json<CreateVideo>,
) -> AppResult<impl IntoResponse> {
    match state.catalog.create(&body).await? {
        Some(id) => Ok(Json(DataResponse {
            data: CreatedResponse { id },
        })),
        None => Err(AppError::MetadataUnresolvable),
    }
}

/// GET /api/v1/videos
///
/// Paginated listing, newest first, with optional visibility and
/// metadata filters.
pub async fn list_videos(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> AppResult<impl IntoResponse> {
    let page = params.page.unwrap_or(pagination::MIN_PAGE);
    let size = params.size.unwrap_or(pagination::DEFAULT_PAGE_SIZE);
    if !pagination::bounds_valid(page, size) {
        return Err(AppError::BadRequest(format!(
            "page must be >= {} and size within 1..={}",
            pagination::MIN_PAGE,
            pagination::MAX_PAGE_SIZE
        )));
    }

    let query = ListVideosQuery {
        page,
        size,
        include_hidden: params.include_hidden.unwrap_or(false),
        metadata_id: params.metadata_id,
    };
    let videos = state.catalog.list(&query).await?;
    Ok(Json(DataResponse { data: videos }))
}

/// GET /api/v1/videos/{id}
pub async fn get_video(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    match state.catalog.get(id).await? {
        Some(video) => Ok(Json(DataResponse { data: video })),
        None => Err(CoreError::NotFound { entity: "video", id }.into()),
    }
}

/// POST /api/v1/videos/{id}/hide
///
/// An unknown id is reported as `updated: false`, not an error.
pub async fn hide_video(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let updated = state.catalog.hide(id).await?;
    Ok(Json(DataResponse {
        data: UpdatedResponse { updated },
    }))
}

/// POST /api/v1/videos/{id}/unhide
pub async fn unhide_video(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let updated = state.catalog.unhide(id).await?;
    Ok(Json(DataResponse {
        data: UpdatedResponse { updated },
    }))
}

/// GET /api/v1/videos/info-file/{info_file_id}
pub async fn lookup_by_info_file(
    State(state): State<AppState>,
    Path(info_file_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = state.catalog.find_by_info_file_id(&info_file_id).await?;
    Ok(Json(DataResponse {
        data: LookupResponse { id },
    }))
}

/// GET /api/v1/videos/hash/{hash}/exists
pub async fn hash_exists(
    State(state): State<AppState>,
    Path(hash): Path<String>,
) -> AppResult<impl IntoResponse> {
    let exists = state.catalog.exists_by_hash(&hash).await?;
    Ok(Json(DataResponse {
        data: ExistsResponse { exists },
    }))
}
