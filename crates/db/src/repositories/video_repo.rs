//! Repository for the `videos` catalog table.

use sqlx::PgPool;
use vidarc_core::types::DbId;

use crate::models::video::{ListVideosFilter, Video};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, metadata_id, video_file_id, info_file_id, \
    storyboard_file_ids, is_hidden, content_hash, video_metadata, \
    created_at, updated_at";

/// Provides data-access methods for the video catalog.
pub struct VideoRepo;

impl VideoRepo {
    /// Insert a new catalog row and return its id.
    ///
    /// `uq_videos_content_hash` rejects a concurrent duplicate; callers
    /// resolve that conflict by re-fetching the surviving row's id.
    #[allow(clippy::too_many_arguments)]
    pub async fn insert(
        pool: &PgPool,
        metadata_id: DbId,
        video_file_id: &str,
        info_file_id: &str,
        storyboard_file_ids: &str,
        content_hash: &str,
        video_metadata: &str,
    ) -> Result<DbId, sqlx::Error> {
        let row: (DbId,) = sqlx::query_as(
            "INSERT INTO videos \
                (metadata_id, video_file_id, info_file_id, storyboard_file_ids, \
                 is_hidden, content_hash, video_metadata) \
             VALUES ($1, $2, $3, $4, FALSE, $5, $6) \
             RETURNING id",
        )
        .bind(metadata_id)
        .bind(video_file_id)
        .bind(info_file_id)
        .bind(storyboard_file_ids)
        .bind(content_hash)
        .bind(video_metadata)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Find a video by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE id = $1");
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the id of the video referencing the given info file.
    pub async fn find_id_by_info_file_id(
        pool: &PgPool,
        info_file_id: &str,
    ) -> Result<Option<DbId>, sqlx::Error> {
        let row: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM videos WHERE info_file_id = $1 ORDER BY id LIMIT 1")
                .bind(info_file_id)
                .fetch_optional(pool)
                .await?;
        Ok(row.map(|r| r.0))
    }

    /// Find the id of the video with the given content hash.
    pub async fn find_id_by_hash(
        pool: &PgPool,
        content_hash: &str,
    ) -> Result<Option<DbId>, sqlx::Error> {
        let row: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM videos WHERE content_hash = $1")
                .bind(content_hash)
                .fetch_optional(pool)
                .await?;
        Ok(row.map(|r| r.0))
    }

    /// Whether any video with the given content hash exists.
    pub async fn exists_by_hash(pool: &PgPool, content_hash: &str) -> Result<bool, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM videos WHERE content_hash = $1")
            .bind(content_hash)
            .fetch_one(pool)
            .await?;
        Ok(count.0 > 0)
    }

    /// Set the visibility flag. Returns true if a row matched.
    ///
    /// `updated_at` is deliberately left untouched; it marks creation time.
    pub async fn set_hidden(pool: &PgPool, id: DbId, hidden: bool) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE videos SET is_hidden = $2 WHERE id = $1")
            .bind(id)
            .bind(hidden)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List catalog rows, newest first, with optional visibility and
    /// metadata filters and a `LIMIT`/`OFFSET` window.
    pub async fn list(
        pool: &PgPool,
        filter: &ListVideosFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Video>, sqlx::Error> {
        // Build dynamic WHERE clauses.
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if !filter.include_hidden {
            conditions.push("is_hidden = FALSE".to_string());
        }
        if filter.metadata_id.is_some() {
            conditions.push(format!("metadata_id = ${bind_idx}"));
            bind_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {COLUMNS} FROM videos \
             {where_clause} \
             ORDER BY id DESC \
             LIMIT ${bind_idx} OFFSET ${next_idx}",
            next_idx = bind_idx + 1,
        );

        let mut q = sqlx::query_as::<_, Video>(&query);
        if let Some(metadata_id) = filter.metadata_id {
            q = q.bind(metadata_id);
        }
        q = q.bind(limit).bind(offset);
        q.fetch_all(pool).await
    }

    /// Total number of catalog rows.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM videos")
            .fetch_one(pool)
            .await?;
        Ok(count.0)
    }
}
