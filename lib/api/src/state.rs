use std::sync::Arc;

use lookbook_core::ItemId;
use lookbook_similarity::{RankingEngine, SimilarResponse, DEFAULT_K};
use lookbook_storage::CatalogStore;
use parking_lot::Mutex;

/// Key of a memoized similar-items response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheKey {
    pub anchor: ItemId,
    pub version: u64,
    pub k: usize,
    pub explain: bool,
}

/// Remembers the most recent similar-items response.
///
/// The catalog version is part of the key, so a reload invalidates the
/// entry without any explicit purge.
#[derive(Debug, Default)]
pub struct SimilarCache {
    last: Mutex<Option<(CacheKey, Arc<SimilarResponse>)>>,
}

impl SimilarCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &CacheKey) -> Option<Arc<SimilarResponse>> {
        let last = self.last.lock();
        match last.as_ref() {
            Some((cached, response)) if cached == key => Some(Arc::clone(response)),
            _ => None,
        }
    }

    pub fn put(&self, key: CacheKey, response: Arc<SimilarResponse>) {
        *self.last.lock() = Some((key, response));
    }

    pub fn clear(&self) {
        *self.last.lock() = None;
    }
}

/// Shared state behind every handler
#[derive(Debug)]
pub struct AppState {
    pub store: Arc<CatalogStore>,
    pub engine: RankingEngine,
    pub default_k: usize,
    pub cache: SimilarCache,
}

impl AppState {
    pub fn new(store: Arc<CatalogStore>, engine: RankingEngine) -> Self {
        Self {
            store,
            engine,
            default_k: DEFAULT_K,
            cache: SimilarCache::new(),
        }
    }

    pub fn with_default_k(mut self, k: usize) -> Self {
        self.default_k = k;
        self
    }
}
