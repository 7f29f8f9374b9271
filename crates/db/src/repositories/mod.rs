//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod metadata_entry_repo;
pub mod video_repo;

pub use metadata_entry_repo::MetadataEntryRepo;
pub use video_repo::VideoRepo;
