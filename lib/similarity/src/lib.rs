//! # lookbook Similarity
//!
//! Embedding-based similarity ranking for catalog items.
//!
//! Given an anchor item and a catalog snapshot, the engine returns the `k`
//! most similar eligible items, ordered by a hybrid score.
//!
//! ## Features
//!
//! - **Vector metrics**: cosine, normalized inverse distance, Pearson correlation
//! - **Hybrid scoring**: fixed `0.5 / 0.3 / 0.2` weighting, configurable
//! - **Eligibility**: self, gender and grouping-key exclusion before scoring
//! - **Deterministic ordering**: stable sort, ties keep catalog order
//! - **Explainability**: per-metric breakdown of every score
//!
//! ## Example
//!
//! ```rust
//! use lookbook_core::{Catalog, CatalogItem, ItemId};
//! use lookbook_similarity::{RankingEngine, DEFAULT_K};
//!
//! let catalog = Catalog::new(vec![
//!     CatalogItem::new("a").with_gender("Women").with_embedding(vec![1.0, 0.0, 0.0]),
//!     CatalogItem::new("b").with_gender("Women").with_embedding(vec![0.9, 0.1, 0.0]),
//!     CatalogItem::new("c").with_gender("Men").with_embedding(vec![1.0, 0.0, 0.0]),
//! ]).unwrap();
//!
//! let engine = RankingEngine::default();
//! let ranking = engine.rank_by_id(&ItemId::from("a"), &catalog, DEFAULT_K).unwrap();
//! assert_eq!(ranking.items.len(), 1);
//! assert_eq!(ranking.items[0].item.id, ItemId::from("b"));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Anchor    │────>│  Candidate  │────>│   Hybrid    │
//! │  + Catalog  │     │   Filter    │     │   Scorer    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                      ┌─────────────┐           │
//!                      │ sort + top-K│<──────────┘
//!                      └─────────────┘
//!                             │
//!                      ┌─────────────┐
//!                      │  Explain    │
//!                      │ (response)  │
//!                      └─────────────┘
//! ```

pub mod error;
pub mod explain;
pub mod metrics;
pub mod rank;
pub mod scorer;
pub mod weights;

// Re-export main types for convenience
pub use error::{RankingError, Result};
pub use explain::{ScoreSummary, SimilarItem, SimilarResponse};
pub use metrics::{
    cosine_similarity,
    inverse_distance_similarity,
    pearson_similarity,
    euclidean_distance,
    EmbeddingDefect,
};
pub use rank::{RankedItem, Ranking, RankingEngine, RankingStats};
pub use scorer::{HybridScorer, ScoreBreakdown};
pub use weights::{HybridWeights, RankingConfig, RankingMode, WeightsError, DEFAULT_K};
