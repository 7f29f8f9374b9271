//! The video cataloging component.
//!
//! [`VideoCatalog`] owns creation with hash-based deduplication, metadata
//! linkage, visibility toggling, and paginated listing. It is constructed
//! explicitly with a pool handle and a [`MetadataLinker`] and passed to
//! callers; there is no global instance.

mod error;
mod linker;
mod service;

pub use error::CatalogError;
pub use linker::{DbMetadataLinker, MetadataLinker};
pub use service::{ListVideosQuery, VideoCatalog};
