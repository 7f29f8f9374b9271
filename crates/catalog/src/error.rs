use vidarc_core::codec::{DecodeError, EncodeError};

/// Error type for catalog operations.
///
/// Expected, recoverable conditions (metadata linkage failure, unknown id
/// on hide/unhide) are signaled through return values, not through this
/// enum. Storage and corruption failures always surface here.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The ingestion payload is unusable (e.g. missing content hash).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A stored structured field failed to parse: data corruption on the
    /// affected record.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A structured field could not be serialized for storage.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// The storage backend failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
