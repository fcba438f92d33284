//! Pairwise vector similarity primitives
//!
//! Three pure functions over `f32` embeddings, each accumulating in `f64`:
//!
//! - [`cosine_similarity`] in `[-1, 1]` (clamped)
//! - [`inverse_distance_similarity`] in `(0, 1]`
//! - [`pearson_similarity`], nominally `[-1, 1]`, not clamped
//!
//! Degenerate inputs (length mismatch, zero magnitude, zero variance,
//! non-finite components) resolve to `0.0` instead of failing. Use
//! [`pair_defect`] to detect them when a caller wants to be strict.

use serde::Serialize;

/// Why an embedding, or a pair of embeddings, cannot be compared meaningfully
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "defect", rename_all = "snake_case")]
pub enum EmbeddingDefect {
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("embedding is empty")]
    Empty,

    #[error("embedding has zero magnitude")]
    ZeroMagnitude,

    #[error("embedding contains NaN or infinite components")]
    NonFinite,
}

/// Cosine similarity: `dot(a, b) / (|a| * |b|)`, clamped to `[-1, 1]`.
///
/// Returns `0.0` on length mismatch, zero magnitude, or non-finite input.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || !all_finite(a) || !all_finite(b) {
        return 0.0;
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (&x, &y) in a.iter().zip(b) {
        let (x, y) = (f64::from(x), f64::from(y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    // sqrt of the product keeps cosine(v, v) at exactly 1.0
    (dot / (norm_a * norm_b).sqrt()).clamp(-1.0, 1.0)
}

/// Euclidean distance between two equal-length vectors
pub fn euclidean_distance(a: &[f32], b: &[f32]) -> Option<f64> {
    if a.len() != b.len() {
        return None;
    }
    let sum: f64 = a
        .iter()
        .zip(b)
        .map(|(&x, &y)| {
            let diff = f64::from(x) - f64::from(y);
            diff * diff
        })
        .sum();
    Some(sum.sqrt())
}

/// Normalized inverse-distance similarity: `1 / (1 + euclidean(a, b))`.
///
/// Range `(0, 1]`. Returns `0.0` on length mismatch or non-finite input.
pub fn inverse_distance_similarity(a: &[f32], b: &[f32]) -> f64 {
    if !all_finite(a) || !all_finite(b) {
        return 0.0;
    }
    match euclidean_distance(a, b) {
        Some(distance) => 1.0 / (1.0 + distance),
        None => 0.0,
    }
}

/// Pearson correlation of `a` and `b` treated as paired samples.
///
/// Two-pass: means first, then residual products. Not clamped. Returns
/// `0.0` on length mismatch, empty input, zero variance on either side, or
/// non-finite input.
pub fn pearson_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() || !all_finite(a) || !all_finite(b) {
        return 0.0;
    }

    let mean_a = mean(a);
    let mean_b = mean(b);

    let mut num = 0.0f64;
    let mut den_a = 0.0f64;
    let mut den_b = 0.0f64;
    for (&x, &y) in a.iter().zip(b) {
        let da = f64::from(x) - mean_a;
        let db = f64::from(y) - mean_b;
        num += da * db;
        den_a += da * da;
        den_b += db * db;
    }

    if den_a == 0.0 || den_b == 0.0 {
        return 0.0;
    }
    num / (den_a * den_b).sqrt()
}

/// Defect of a single embedding on its own, if any
pub fn embedding_defect(v: &[f32]) -> Option<EmbeddingDefect> {
    if v.is_empty() {
        return Some(EmbeddingDefect::Empty);
    }
    if !all_finite(v) {
        return Some(EmbeddingDefect::NonFinite);
    }
    if v.iter().all(|&x| x == 0.0) {
        return Some(EmbeddingDefect::ZeroMagnitude);
    }
    None
}

/// Defect that would make comparing `candidate` against `anchor` degenerate.
///
/// Zero variance is not reported: a constant vector is valid data, it just
/// contributes no correlation.
pub fn pair_defect(anchor: &[f32], candidate: &[f32]) -> Option<EmbeddingDefect> {
    if anchor.len() != candidate.len() {
        return Some(EmbeddingDefect::LengthMismatch {
            expected: anchor.len(),
            actual: candidate.len(),
        });
    }
    embedding_defect(candidate)
}

#[inline]
fn all_finite(v: &[f32]) -> bool {
    v.iter().all(|x| x.is_finite())
}

#[inline]
fn mean(v: &[f32]) -> f64 {
    v.iter().map(|&x| f64::from(x)).sum::<f64>() / v.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_cosine_basic() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]), 1.0);
        assert!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).abs() < EPS);
        assert!((cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]) + 1.0).abs() < EPS);
    }

    #[test]
    fn test_cosine_self_is_exactly_one() {
        let v = [0.3f32, -1.7, 2.25, 1e-3, 42.0];
        assert_eq!(cosine_similarity(&v, &v), 1.0);
    }

    #[test]
    fn test_cosine_degenerate_inputs() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[1.0, 0.0, 0.0]), 0.0);
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
        assert_eq!(cosine_similarity(&[f32::NAN, 1.0], &[1.0, 1.0]), 0.0);
    }

    #[test]
    fn test_inverse_distance() {
        assert_eq!(inverse_distance_similarity(&[1.0, 2.0], &[1.0, 2.0]), 1.0);
        // 3-4-5 triangle
        let sim = inverse_distance_similarity(&[0.0, 0.0], &[3.0, 4.0]);
        assert!((sim - 1.0 / 6.0).abs() < EPS);
        assert_eq!(inverse_distance_similarity(&[1.0], &[1.0, 2.0]), 0.0);
        assert_eq!(inverse_distance_similarity(&[], &[]), 1.0);
    }

    #[test]
    fn test_inverse_distance_stays_positive_for_huge_gaps() {
        let sim = inverse_distance_similarity(&[f32::MAX, f32::MAX], &[f32::MIN, f32::MIN]);
        assert!(sim > 0.0 && sim < 1e-30);
    }

    #[test]
    fn test_pearson() {
        assert!((pearson_similarity(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]) - 1.0).abs() < EPS);
        assert!((pearson_similarity(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]) + 1.0).abs() < EPS);
        assert_eq!(pearson_similarity(&[1.0, 0.0, 0.0], &[1.0, 0.0, 0.0]), 1.0);
    }

    #[test]
    fn test_pearson_zero_variance() {
        assert_eq!(pearson_similarity(&[2.0, 2.0, 2.0], &[1.0, 5.0, 3.0]), 0.0);
        assert_eq!(pearson_similarity(&[1.0, 1.0], &[1.0, 1.0]), 0.0);
        assert_eq!(pearson_similarity(&[], &[]), 0.0);
        assert_eq!(pearson_similarity(&[1.0, 2.0], &[1.0, 2.0, 3.0]), 0.0);
    }

    #[test]
    fn test_pearson_large_offset_is_stable() {
        // A single-pass sum-of-squares formula loses everything here
        let a = [1.0e7f32, 1.0e7 + 1.0, 1.0e7 + 2.0, 1.0e7 + 3.0];
        let b = [5.0f32, 6.0, 7.0, 8.0];
        assert!((pearson_similarity(&a, &b) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_embedding_defect() {
        assert_eq!(embedding_defect(&[]), Some(EmbeddingDefect::Empty));
        assert_eq!(embedding_defect(&[0.0, 0.0]), Some(EmbeddingDefect::ZeroMagnitude));
        assert_eq!(embedding_defect(&[f32::INFINITY]), Some(EmbeddingDefect::NonFinite));
        assert_eq!(embedding_defect(&[1.0, 1.0]), None);
    }

    #[test]
    fn test_pair_defect() {
        assert_eq!(
            pair_defect(&[1.0, 0.0], &[1.0]),
            Some(EmbeddingDefect::LengthMismatch { expected: 2, actual: 1 })
        );
        assert_eq!(pair_defect(&[1.0, 0.0], &[0.0, 0.0]), Some(EmbeddingDefect::ZeroMagnitude));
        assert_eq!(pair_defect(&[1.0, 0.0], &[3.0, 3.0]), None);
    }
}
