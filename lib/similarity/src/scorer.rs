//! Weighted fusion of the three similarity metrics

use serde::Serialize;
use crate::metrics::{cosine_similarity, inverse_distance_similarity, pearson_similarity};
use crate::weights::{HybridWeights, WeightsError};

/// Raw metric values for one pair plus the fused score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub cosine: f64,
    pub distance: f64,
    pub pearson: f64,
    pub score: f64,
}

/// Deterministic hybrid scorer.
///
/// The pearson term is weighted without clamping, so a fused score has no
/// fixed range. Clamping it would reorder edge cases.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HybridScorer {
    weights: HybridWeights,
}

impl HybridScorer {
    /// Create a scorer, validating the weights
    pub fn new(weights: HybridWeights) -> Result<Self, WeightsError> {
        weights.validate()?;
        Ok(Self { weights })
    }

    /// Score `b` against `a`
    #[inline]
    pub fn score(&self, a: &[f32], b: &[f32]) -> f64 {
        self.breakdown(a, b).score
    }

    /// Score `b` against `a`, keeping each metric's contribution
    pub fn breakdown(&self, a: &[f32], b: &[f32]) -> ScoreBreakdown {
        let cosine = cosine_similarity(a, b);
        let distance = inverse_distance_similarity(a, b);
        let pearson = pearson_similarity(a, b);
        let w = &self.weights;
        let score = (w.cosine * cosine) + (w.distance * distance) + (w.pearson * pearson);
        ScoreBreakdown {
            cosine,
            distance,
            pearson,
            score,
        }
    }
}
