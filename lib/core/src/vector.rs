use serde::{Deserialize, Serialize};

/// A fixed-length embedding attached to a catalog item.
///
/// Dimensionality is not declared anywhere else; it is whatever length the
/// upstream embedding job produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct Embedding {
    data: Vec<f32>,
}

impl Embedding {
    #[inline]
    #[must_use]
    pub fn new(data: Vec<f32>) -> Self {
        Self { data }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// True when no component is NaN or infinite
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|x| x.is_finite())
    }
}

impl From<Vec<f32>> for Embedding {
    fn from(data: Vec<f32>) -> Self {
        Self::new(data)
    }
}

impl AsRef<[f32]> for Embedding {
    fn as_ref(&self) -> &[f32] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dim_and_slice() {
        let e = Embedding::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(e.dim(), 3);
        assert!(!e.is_empty());
        assert_eq!(e.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_is_finite() {
        assert!(Embedding::new(vec![0.0, -1.5]).is_finite());
        assert!(!Embedding::new(vec![0.0, f32::NAN]).is_finite());
        assert!(!Embedding::new(vec![f32::INFINITY]).is_finite());
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let e = Embedding::new(vec![0.5, 1.0]);
        assert_eq!(serde_json::to_string(&e).unwrap(), "[0.5,1.0]");
        let parsed: Embedding = serde_json::from_str("[0.5, 1]").unwrap();
        assert_eq!(parsed, e);
    }
}
