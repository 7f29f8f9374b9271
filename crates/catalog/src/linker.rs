//! Metadata linkage seam.

use async_trait::async_trait;
use sqlx::PgPool;
use vidarc_core::types::DbId;
use vidarc_db::repositories::MetadataEntryRepo;

/// Resolves an identity key to a stable metadata entry id, creating the
/// entry when absent.
///
/// `Ok(None)` means linkage could not be established; the catalog never
/// persists a video in that case.
#[async_trait]
pub trait MetadataLinker: Send + Sync {
    async fn resolve_or_create(&self, identity_key: &str) -> Result<Option<DbId>, sqlx::Error>;
}

/// Linker backed by the `metadata_entries` table.
pub struct DbMetadataLinker {
    pool: PgPool,
}

impl DbMetadataLinker {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MetadataLinker for DbMetadataLinker {
    async fn resolve_or_create(&self, identity_key: &str) -> Result<Option<DbId>, sqlx::Error> {
        let id = MetadataEntryRepo::resolve_or_create(&self.pool, identity_key).await?;
        Ok(Some(id))
    }
}
