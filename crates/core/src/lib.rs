//! Pure domain logic for the vidarc catalog.
//!
//! No database access. Usable from the repository layer, the catalog
//! service, and any future CLI tooling.

pub mod codec;
pub mod error;
pub mod pagination;
pub mod types;
pub mod video_metadata;
