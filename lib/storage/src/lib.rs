//! # lookbook Storage
//!
//! Loads the catalog from product and metadata exports and serves it as a
//! versioned, immutable snapshot with TTL-based refresh.

pub mod error;
pub mod export;
pub mod source;
pub mod store;

pub use error::{Result, StorageError};
pub use export::{enrich, id_key, parse_embedding, MetadataRow, ProductRow};
pub use source::{CatalogSource, FileSource, StaticSource};
pub use store::{CatalogStore, Snapshot, DEFAULT_TTL};
