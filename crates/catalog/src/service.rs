//! The catalog service: creation with dedup, visibility, and listing.

use std::sync::Arc;

use sqlx::PgPool;
use tracing::{debug, info};
use vidarc_core::types::DbId;
use vidarc_core::{codec, pagination, video_metadata};
use vidarc_db::models::video::{CreateVideo, ListVideosFilter, VideoDetail};
use vidarc_db::repositories::VideoRepo;

use crate::error::CatalogError;
use crate::linker::MetadataLinker;

/// Name of the unique index enforcing at-most-one row per content hash.
const HASH_CONSTRAINT: &str = "uq_videos_content_hash";

/// Parameters for a paginated listing request.
#[derive(Debug, Clone, Copy)]
pub struct ListVideosQuery {
    /// 1-based page number.
    pub page: i64,
    /// Records per page, within `1..=MAX_PAGE_SIZE`.
    pub size: i64,
    /// Include records marked hidden.
    pub include_hidden: bool,
    /// Restrict to records linked to this metadata entry.
    pub metadata_id: Option<DbId>,
}

impl Default for ListVideosQuery {
    fn default() -> Self {
        Self {
            page: pagination::MIN_PAGE,
            size: pagination::DEFAULT_PAGE_SIZE,
            include_hidden: false,
            metadata_id: None,
        }
    }
}

/// The video cataloging component.
///
/// Holds a pool handle and the metadata linker; construct once and pass
/// to callers.
#[derive(Clone)]
pub struct VideoCatalog {
    pool: PgPool,
    linker: Arc<dyn MetadataLinker>,
}

impl VideoCatalog {
    pub fn new(pool: PgPool, linker: Arc<dyn MetadataLinker>) -> Self {
        Self { pool, linker }
    }

    /// Catalog a newly ingested video and return its record id.
    ///
    /// Idempotent per content hash: when a record with the same hash
    /// already exists, its id is returned and no row is written. Returns
    /// `Ok(None)` when metadata linkage fails; nothing is persisted in
    /// that case.
    pub async fn create(&self, input: &CreateVideo) -> Result<Option<DbId>, CatalogError> {
        let hash = video_metadata::content_hash(&input.video_metadata).ok_or_else(|| {
            CatalogError::Validation("video metadata is missing a content hash".into())
        })?;

        if let Some(existing) = VideoRepo::find_id_by_hash(&self.pool, hash).await? {
            debug!(id = existing, hash, "content hash already cataloged");
            return Ok(Some(existing));
        }

        let Some(identity_key) = video_metadata::identity_key(&input.video_metadata) else {
            debug!(hash, "no identity key derivable from video metadata");
            return Ok(None);
        };
        let Some(metadata_id) = self.linker.resolve_or_create(&identity_key).await? else {
            debug!(%identity_key, "metadata linkage failed, video not cataloged");
            return Ok(None);
        };

        let encoded_metadata = codec::encode(&input.video_metadata)?;
        let encoded_storyboards = codec::encode(&input.storyboard_file_ids)?;

        let inserted = VideoRepo::insert(
            &self.pool,
            metadata_id,
            &input.video_file_id,
            &input.info_file_id,
            &encoded_storyboards,
            hash,
            &encoded_metadata,
        )
        .await;

        match inserted {
            Ok(id) => {
                info!(id, metadata_id, hash, "video cataloged");
                Ok(Some(id))
            }
            // Lost a same-hash race; the surviving row's id is the answer.
            Err(err) if is_hash_conflict(&err) => {
                debug!(hash, "concurrent create for the same hash");
                Ok(VideoRepo::find_id_by_hash(&self.pool, hash).await?)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Fetch a single record, decoded. `Ok(None)` when the id is unknown.
    pub async fn get(&self, id: DbId) -> Result<Option<VideoDetail>, CatalogError> {
        match VideoRepo::find_by_id(&self.pool, id).await? {
            Some(row) => Ok(Some(row.into_detail()?)),
            None => Ok(None),
        }
    }

    /// Id of the record referencing the given info file, if any.
    pub async fn find_by_info_file_id(
        &self,
        info_file_id: &str,
    ) -> Result<Option<DbId>, CatalogError> {
        Ok(VideoRepo::find_id_by_info_file_id(&self.pool, info_file_id).await?)
    }

    /// Mark a record hidden. Returns false when the id matched no row.
    pub async fn hide(&self, id: DbId) -> Result<bool, CatalogError> {
        Ok(VideoRepo::set_hidden(&self.pool, id, true).await?)
    }

    /// Make a record visible again. Returns false when the id matched no row.
    pub async fn unhide(&self, id: DbId) -> Result<bool, CatalogError> {
        Ok(VideoRepo::set_hidden(&self.pool, id, false).await?)
    }

    /// Whether a record with the given content hash exists.
    pub async fn exists_by_hash(&self, hash: &str) -> Result<bool, CatalogError> {
        Ok(VideoRepo::exists_by_hash(&self.pool, hash).await?)
    }

    /// Paginated listing, newest first.
    ///
    /// A decode failure on any row fails the whole page: a corrupt record
    /// is reported, never silently skipped.
    pub async fn list(&self, query: &ListVideosQuery) -> Result<Vec<VideoDetail>, CatalogError> {
        let (limit, offset) = pagination::window(query.page, query.size);
        let filter = ListVideosFilter {
            include_hidden: query.include_hidden,
            metadata_id: query.metadata_id,
        };
        let rows = VideoRepo::list(&self.pool, &filter, limit, offset).await?;
        rows.into_iter()
            .map(|row| row.into_detail().map_err(CatalogError::from))
            .collect()
    }
}

/// True when the error is a unique violation on the content-hash index.
fn is_hash_conflict(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some("23505")
                && db_err.constraint() == Some(HASH_CONSTRAINT)
        }
        _ => false,
    }
}
