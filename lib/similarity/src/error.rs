use lookbook_core::ItemId;
use thiserror::Error;
use crate::metrics::EmbeddingDefect;
use crate::weights::WeightsError;

pub type Result<T> = std::result::Result<T, RankingError>;

/// Failures surfaced by a ranking call.
///
/// Per-pair numeric degeneracies are not errors in lenient mode; they only
/// appear here as [`RankingError::MalformedEmbedding`] under strict mode.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RankingError {
    #[error("Anchor item {id} has no embedding")]
    MissingEmbedding { id: ItemId },

    #[error("Anchor item not found: {0}")]
    AnchorNotFound(ItemId),

    #[error("Malformed embedding on item {id}: {defect}")]
    MalformedEmbedding { id: ItemId, defect: EmbeddingDefect },

    #[error(transparent)]
    InvalidWeights(#[from] WeightsError),
}

impl RankingError {
    /// Stable machine-readable kind, used in API error bodies
    pub fn kind(&self) -> &'static str {
        match self {
            RankingError::MissingEmbedding { .. } => "missing_embedding",
            RankingError::AnchorNotFound(_) => "anchor_not_found",
            RankingError::MalformedEmbedding { .. } => "malformed_embedding",
            RankingError::InvalidWeights(_) => "invalid_weights",
        }
    }
}
