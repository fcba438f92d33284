//! # lookbook Core
//!
//! Core data structures for the lookbook catalog.
//!
//! - [`CatalogItem`] - An immutable product record with optional embedding
//! - [`Catalog`] - Insertion-ordered, identity-indexed snapshot of items
//! - [`CatalogView`] - Read-only access used by ranking and browsing
//! - [`CandidateFilter`] - Eligibility rules relative to an anchor item
//! - [`BrowseFilter`] - Gallery attribute filters and pagination
//!
//! ## Example
//!
//! ```rust
//! use lookbook_core::{Catalog, CatalogItem, CandidateFilter};
//!
//! let anchor = CatalogItem::new("a").with_gender("Women").with_embedding(vec![1.0, 0.0]);
//! let other = CatalogItem::new("b").with_gender("Women").with_embedding(vec![0.0, 1.0]);
//! let catalog = Catalog::new(vec![anchor.clone(), other]).unwrap();
//!
//! let filter = CandidateFilter::for_anchor(&anchor);
//! let eligible: Vec<_> = filter.eligible(&catalog).collect();
//! assert_eq!(eligible.len(), 1);
//! ```

pub mod browse;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod history;
pub mod item;
pub mod model_photo;
pub mod vector;

pub use browse::{BrowseFilter, FilterOptions, Page, paginate, is_browsable, DEFAULT_PAGE_SIZE};
pub use catalog::{Catalog, CatalogView};
pub use error::{Error, Result};
pub use filter::{CandidateFilter, Exclusion, ExclusionCounts, Filter};
pub use history::{HistoryEntry, UploadHistory};
pub use item::{CatalogItem, Gender, ItemId};
pub use model_photo::{select_model_photos, ModelPhoto, MODEL_PHOTOS};
pub use vector::Embedding;
