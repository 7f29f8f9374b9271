//! Metadata entry models.

use serde::Serialize;
use sqlx::FromRow;
use vidarc_core::types::{DbId, Timestamp};

/// A row from the `metadata_entries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MetadataEntry {
    pub id: DbId,
    pub identity_key: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
