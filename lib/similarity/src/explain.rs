//! Serializable similar-items responses
//!
//! Turns a borrowed [`Ranking`] into an owned structure that can cross an
//! API boundary, optionally with the per-metric breakdown of each score.

use lookbook_core::{CatalogItem, ItemId};
use serde::Serialize;

use crate::rank::{RankedItem, Ranking, RankingStats};
use crate::scorer::ScoreBreakdown;

/// A similar item with its score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarItem {
    #[serde(flatten)]
    pub item: CatalogItem,
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explain: Option<ScoreBreakdown>,
}

impl SimilarItem {
    pub fn from_ranked(ranked: &RankedItem<'_>, explain: bool) -> Self {
        Self {
            item: ranked.item.to_listing(),
            score: ranked.score,
            explain: explain.then_some(ranked.breakdown),
        }
    }
}

/// Score summary over the returned items
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreSummary {
    pub best_score: f64,
    pub avg_score: f64,
}

impl ScoreSummary {
    /// `None` for an empty result
    pub fn compute(items: &[RankedItem<'_>]) -> Option<Self> {
        let best = items.first()?;
        let avg = items.iter().map(|r| r.score).sum::<f64>() / items.len() as f64;
        Some(Self {
            best_score: best.score,
            avg_score: avg,
        })
    }
}

/// Response for the similar-items endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarResponse {
    pub anchor: ItemId,
    pub result: Vec<SimilarItem>,
    pub stats: RankingStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ScoreSummary>,
}

impl SimilarResponse {
    pub fn from_ranking(anchor: ItemId, ranking: &Ranking<'_>, explain: bool) -> Self {
        Self {
            anchor,
            result: ranking
                .items
                .iter()
                .map(|r| SimilarItem::from_ranked(r, explain))
                .collect(),
            stats: ranking.stats,
            summary: ScoreSummary::compute(&ranking.items),
        }
    }
}
