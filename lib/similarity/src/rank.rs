//! Ranking engine
//!
//! Filters a catalog down to eligible candidates for an anchor item, scores
//! each with the hybrid scorer, sorts by score descending and truncates to
//! `k`. Stateless: every call recomputes from the snapshot it is given.

use std::cmp::Ordering;

use lookbook_core::{CandidateFilter, CatalogItem, CatalogView, ExclusionCounts, ItemId};
use serde::Serialize;
use tracing::debug;

use crate::error::{RankingError, Result};
use crate::metrics::{embedding_defect, pair_defect};
use crate::scorer::{HybridScorer, ScoreBreakdown};
use crate::weights::{RankingConfig, RankingMode};

/// One entry of a ranking result
#[derive(Debug, Clone, PartialEq)]
pub struct RankedItem<'a> {
    pub item: &'a CatalogItem,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

impl RankedItem<'_> {
    pub fn id(&self) -> &ItemId {
        &self.item.id
    }
}

/// Counts describing one ranking call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RankingStats {
    pub catalog_size: usize,
    pub eligible: usize,
    pub excluded: ExclusionCounts,
    pub returned: usize,
}

/// Ordered result plus statistics
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking<'a> {
    pub items: Vec<RankedItem<'a>>,
    pub stats: RankingStats,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RankingEngine {
    scorer: HybridScorer,
    mode: RankingMode,
}

impl RankingEngine {
    pub fn new(scorer: HybridScorer, mode: RankingMode) -> Self {
        Self { scorer, mode }
    }

    pub fn from_config(config: &RankingConfig) -> Result<Self> {
        let scorer = HybridScorer::new(config.weights)?;
        Ok(Self::new(scorer, config.mode))
    }

    /// Rank the `k` most similar eligible items to `anchor`.
    ///
    /// Fails with [`RankingError::MissingEmbedding`] when the anchor cannot be
    /// scored, so callers can tell "nothing similar" from "cannot rank".
    pub fn rank<'a, V>(&self, anchor: &CatalogItem, view: &'a V, k: usize) -> Result<Vec<RankedItem<'a>>>
    where
        V: CatalogView + ?Sized,
    {
        self.rank_with_stats(anchor, view, k).map(|ranking| ranking.items)
    }

    /// Like [`rank`](Self::rank), looking the anchor up in the catalog first
    pub fn rank_by_id<'a, V>(&self, anchor_id: &ItemId, view: &'a V, k: usize) -> Result<Ranking<'a>>
    where
        V: CatalogView + ?Sized,
    {
        let anchor = view
            .get(anchor_id)
            .ok_or_else(|| RankingError::AnchorNotFound(anchor_id.clone()))?;
        self.rank_with_stats(anchor, view, k)
    }

    pub fn rank_with_stats<'a, V>(&self, anchor: &CatalogItem, view: &'a V, k: usize) -> Result<Ranking<'a>>
    where
        V: CatalogView + ?Sized,
    {
        let anchor_vec = anchor
            .embedding
            .as_ref()
            .ok_or_else(|| RankingError::MissingEmbedding { id: anchor.id.clone() })?
            .as_slice();

        if self.mode == RankingMode::Strict {
            if let Some(defect) = embedding_defect(anchor_vec) {
                return Err(RankingError::MalformedEmbedding { id: anchor.id.clone(), defect });
            }
        }

        let filter = CandidateFilter::for_anchor(anchor);
        let (eligible, excluded) = filter.partition(view);
        let eligible_count = eligible.len();

        let mut ranked = Vec::with_capacity(eligible_count);
        for item in eligible {
            let Some(embedding) = item.embedding.as_ref() else {
                continue;
            };
            let candidate_vec = embedding.as_slice();

            if self.mode == RankingMode::Strict {
                if let Some(defect) = pair_defect(anchor_vec, candidate_vec) {
                    return Err(RankingError::MalformedEmbedding { id: item.id.clone(), defect });
                }
            }

            let breakdown = self.scorer.breakdown(anchor_vec, candidate_vec);
            ranked.push(RankedItem {
                item,
                score: breakdown.score,
                breakdown,
            });
        }

        // Stable: equal scores keep catalog order
        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        ranked.truncate(k);

        let stats = RankingStats {
            catalog_size: view.len(),
            eligible: eligible_count,
            excluded,
            returned: ranked.len(),
        };

        debug!(
            anchor = %anchor.id,
            catalog_size = stats.catalog_size,
            eligible = stats.eligible,
            excluded = excluded.total(),
            returned = stats.returned,
            "ranked similar items"
        );

        Ok(Ranking { items: ranked, stats })
    }
}
