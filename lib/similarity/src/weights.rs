//! Hybrid score weights and ranking configuration

use serde::{Deserialize, Serialize};

/// Number of similar items returned when the caller does not ask otherwise
pub const DEFAULT_K: usize = 15;

/// Fixed weights fusing the three metrics into one score.
///
/// The default `0.5 / 0.3 / 0.2` is the tuned production weighting. Weights
/// are not normalized: whatever is configured is applied as-is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HybridWeights {
    #[serde(default = "default_cosine")]
    pub cosine: f64,
    #[serde(default = "default_distance")]
    pub distance: f64,
    #[serde(default = "default_pearson")]
    pub pearson: f64,
}

fn default_cosine() -> f64 {
    0.5
}

fn default_distance() -> f64 {
    0.3
}

fn default_pearson() -> f64 {
    0.2
}

impl Default for HybridWeights {
    fn default() -> Self {
        Self {
            cosine: default_cosine(),
            distance: default_distance(),
            pearson: default_pearson(),
        }
    }
}

impl HybridWeights {
    pub fn new(cosine: f64, distance: f64, pearson: f64) -> Self {
        Self { cosine, distance, pearson }
    }

    /// Validate the weights
    /// - Every weight must be finite and non-negative
    /// - At least one weight must be positive
    pub fn validate(&self) -> Result<(), WeightsError> {
        for (name, weight) in self.named() {
            if !weight.is_finite() {
                return Err(WeightsError::NonFinite(name));
            }
            if weight < 0.0 {
                return Err(WeightsError::NegativeWeight(name));
            }
        }
        if self.total() <= 0.0 {
            return Err(WeightsError::ZeroTotalWeight);
        }
        Ok(())
    }

    pub fn total(&self) -> f64 {
        self.cosine + self.distance + self.pearson
    }

    fn named(&self) -> [(&'static str, f64); 3] {
        [
            ("cosine", self.cosine),
            ("distance", self.distance),
            ("pearson", self.pearson),
        ]
    }
}

/// Strictness for malformed embeddings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RankingMode {
    /// Degenerate pairs contribute 0 to the affected metric
    #[default]
    Lenient,
    /// Malformed embeddings abort the ranking call
    Strict,
}

/// Ranking settings, loadable from a JSON config file
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct RankingConfig {
    #[serde(default)]
    pub weights: HybridWeights,
    #[serde(default)]
    pub mode: RankingMode,
}

impl RankingConfig {
    pub fn from_json(json: &str) -> Result<Self, WeightsError> {
        let config: RankingConfig =
            serde_json::from_str(json).map_err(|e| WeightsError::Parse(e.to_string()))?;
        config.weights.validate()?;
        Ok(config)
    }
}

/// Errors that can occur during weight validation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WeightsError {
    #[error("Weight '{0}' is negative")]
    NegativeWeight(&'static str),

    #[error("Weight '{0}' is not a finite number")]
    NonFinite(&'static str),

    #[error("Total weight cannot be zero")]
    ZeroTotalWeight,

    #[error("Invalid ranking config: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let w = HybridWeights::default();
        assert_eq!((w.cosine, w.distance, w.pearson), (0.5, 0.3, 0.2));
        assert!(w.validate().is_ok());
    }

    #[test]
    fn test_negative_weight_error() {
        let w = HybridWeights::new(0.5, -0.1, 0.2);
        assert_eq!(w.validate(), Err(WeightsError::NegativeWeight("distance")));
    }

    #[test]
    fn test_non_finite_weight_error() {
        let w = HybridWeights::new(f64::NAN, 0.3, 0.2);
        assert_eq!(w.validate(), Err(WeightsError::NonFinite("cosine")));
    }

    #[test]
    fn test_zero_total_error() {
        let w = HybridWeights::new(0.0, 0.0, 0.0);
        assert_eq!(w.validate(), Err(WeightsError::ZeroTotalWeight));
    }

    #[test]
    fn test_config_from_json_partial() {
        let config = RankingConfig::from_json(r#"{"weights": {"pearson": 0.0}, "mode": "strict"}"#)
            .unwrap();
        assert_eq!(config.weights, HybridWeights::new(0.5, 0.3, 0.0));
        assert_eq!(config.mode, RankingMode::Strict);

        let empty = RankingConfig::from_json("{}").unwrap();
        assert_eq!(empty, RankingConfig::default());
    }

    #[test]
    fn test_config_from_json_rejects_bad_weights() {
        assert!(matches!(
            RankingConfig::from_json(r#"{"weights": {"cosine": -1.0}}"#),
            Err(WeightsError::NegativeWeight("cosine"))
        ));
        assert!(matches!(
            RankingConfig::from_json("not json"),
            Err(WeightsError::Parse(_))
        ));
    }
}
