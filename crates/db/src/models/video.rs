//! Video catalog models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vidarc_core::codec::{self, DecodeError};
use vidarc_core::types::{DbId, Timestamp};

/// A row from the `videos` table.
///
/// `video_metadata` and `storyboard_file_ids` are codec-encoded text;
/// decode into a [`VideoDetail`] before returning the record upward.
#[derive(Debug, Clone, FromRow)]
pub struct Video {
    pub id: DbId,
    pub metadata_id: DbId,
    pub video_file_id: String,
    pub info_file_id: String,
    pub storyboard_file_ids: String,
    pub is_hidden: bool,
    pub content_hash: String,
    pub video_metadata: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Caller-facing decoded shape of a catalog entry.
#[derive(Debug, Clone, Serialize)]
pub struct VideoDetail {
    pub id: DbId,
    pub metadata_id: DbId,
    pub video_file_id: String,
    pub info_file_id: String,
    pub is_hidden: bool,
    pub video_metadata: serde_json::Value,
    pub storyboard_file_ids: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Video {
    /// Decode the stored structured fields.
    ///
    /// Fails with [`DecodeError`] when a blob is corrupt; callers treat
    /// that as data corruption on this record, not absence.
    pub fn into_detail(self) -> Result<VideoDetail, DecodeError> {
        let video_metadata = codec::decode(&self.video_metadata)?;
        let storyboard_file_ids = codec::decode(&self.storyboard_file_ids)?;
        Ok(VideoDetail {
            id: self.id,
            metadata_id: self.metadata_id,
            video_file_id: self.video_file_id,
            info_file_id: self.info_file_id,
            is_hidden: self.is_hidden,
            video_metadata,
            storyboard_file_ids,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// DTO for cataloging a newly ingested video.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVideo {
    pub video_file_id: String,
    pub info_file_id: String,
    #[serde(default)]
    pub storyboard_file_ids: Vec<String>,
    /// Free-form source attributes; must contain the `hash` attribute.
    pub video_metadata: serde_json::Value,
}

/// Filters for the paginated listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListVideosFilter {
    /// Include records marked hidden.
    pub include_hidden: bool,
    /// Restrict to records linked to this metadata entry.
    pub metadata_id: Option<DbId>,
}
