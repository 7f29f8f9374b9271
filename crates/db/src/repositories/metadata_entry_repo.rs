//! Repository for the `metadata_entries` table.

use sqlx::PgPool;
use vidarc_core::types::DbId;

use crate::models::metadata_entry::MetadataEntry;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, identity_key, created_at, updated_at";

/// Provides data-access methods for metadata entries.
pub struct MetadataEntryRepo;

impl MetadataEntryRepo {
    /// Resolve an identity key to its stable entry id, creating the entry
    /// if absent.
    ///
    /// The no-op `DO UPDATE` keeps `RETURNING` populated on conflict, so
    /// both paths yield the id in a single statement.
    pub async fn resolve_or_create(pool: &PgPool, identity_key: &str) -> Result<DbId, sqlx::Error> {
        let row: (DbId,) = sqlx::query_as(
            "INSERT INTO metadata_entries (identity_key) VALUES ($1) \
             ON CONFLICT (identity_key) \
             DO UPDATE SET identity_key = EXCLUDED.identity_key \
             RETURNING id",
        )
        .bind(identity_key)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Find an entry by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MetadataEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM metadata_entries WHERE id = $1");
        sqlx::query_as::<_, MetadataEntry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
