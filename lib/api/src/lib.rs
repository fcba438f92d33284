//! # lookbook API
//!
//! REST surface for catalog browsing and similar-item recommendations.

pub mod rest;
pub mod state;

pub use rest::{configure, RestApi};
pub use state::{AppState, CacheKey, SimilarCache};
