//! # lookbook
//!
//! Catalog browsing and embedding-based "similar items" recommendations for
//! a fashion catalog.
//!
//! Every product carries an image embedding. Given an anchor product,
//! lookbook ranks the rest of the catalog by a hybrid of cosine similarity,
//! normalized inverse Euclidean distance and Pearson correlation, after
//! excluding the anchor itself, products without an embedding, products of
//! another gender and variants of the same product.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! lookbook --products data/products.json --metadata data/metadata.json --http-port 8000
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use lookbook::prelude::*;
//!
//! let catalog = Catalog::new(vec![
//!     CatalogItem::new("a").with_gender("Men").with_embedding(vec![1.0, 0.0, 0.0]),
//!     CatalogItem::new("b").with_gender("Men").with_embedding(vec![0.8, 0.2, 0.0]),
//!     CatalogItem::new("c").with_gender("Men").with_embedding(vec![0.0, 0.0, 1.0]),
//! ]).unwrap();
//!
//! let anchor = catalog.iter().next().unwrap();
//! let ranked = RankingEngine::default().rank(anchor, &catalog, DEFAULT_K).unwrap();
//! assert_eq!(ranked[0].item.id, ItemId::from("b"));
//! ```
//!
//! ## Crate Structure
//!
//! - `lookbook-core` - Catalog items, eligibility filters, browsing, model photos
//! - `lookbook-similarity` - Vector metrics, hybrid scoring, ranking engine
//! - `lookbook-storage` - Catalog export loading and versioned snapshots
//! - `lookbook-api` - REST API

// Re-export core types
pub use lookbook_core::{
    Catalog, CatalogItem, CatalogView, ItemId, Gender, Embedding,
    CandidateFilter, Exclusion, Filter,
    BrowseFilter, FilterOptions, Page, paginate,
    UploadHistory, HistoryEntry,
    select_model_photos, ModelPhoto,
    Error, Result,
};

// Re-export similarity
pub use lookbook_similarity::{
    RankingEngine, RankingError, RankingMode, RankingConfig, RankedItem, Ranking,
    HybridScorer, HybridWeights, ScoreBreakdown, SimilarResponse,
    DEFAULT_K,
};

// Re-export storage
pub use lookbook_storage::{CatalogStore, CatalogSource, FileSource, StaticSource, StorageError};

// Re-export API
pub use lookbook_api::{AppState, RestApi};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Catalog, CatalogItem, CatalogView, ItemId, Gender,
        CandidateFilter, Filter,
        RankingEngine, RankingError, RankedItem, HybridScorer, HybridWeights,
        CatalogStore, FileSource,
        DEFAULT_K,
    };
}

/// Similarity metrics on raw embedding slices
pub mod metrics {
    pub use lookbook_similarity::metrics::{
        cosine_similarity, euclidean_distance, inverse_distance_similarity, pearson_similarity,
    };
}
