//! Embedding vector type

use serde::{Deserialize, Serialize};

/// A text embedding produced by the language API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Embedding {
    values: Vec<f32>,
}

impl Embedding {
    /// Create a new embedding
    pub fn new(values: Vec<f32>) -> Self {
        Self { values }
    }

    /// Get the embedding vector
    pub fn vector(&self) -> &[f32] {
        &self.values
    }

    /// Get the embedding dimensions
    pub fn dimensions(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Calculate cosine similarity with another embedding
    pub fn cosine_similarity(&self, other: &Embedding) -> f32 {
        cosine_similarity(&self.values, &other.values)
    }

    /// Calculate cosine distance (1 - similarity) with another embedding
    pub fn cosine_distance(&self, other: &Embedding) -> f32 {
        cosine_distance(&self.values, &other.values)
    }
}

impl From<Vec<f32>> for Embedding {
    fn from(values: Vec<f32>) -> Self {
        Self::new(values)
    }
}

/// Calculate cosine similarity between two vectors
///
/// Returns 0.0 for empty, mismatched or zero-norm inputs. Sums are taken in
/// f64 so large components do not overflow.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot_product: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| f64::from(*x) * f64::from(*y))
        .sum();
    let norm_a = a.iter().map(|x| f64::from(*x).powi(2)).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| f64::from(*x).powi(2)).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot_product / (norm_a * norm_b)) as f32
}

/// Calculate cosine distance between two vectors; smaller means more similar
pub fn cosine_distance(a: &[f32], b: &[f32]) -> f32 {
    1.0 - cosine_similarity(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedding_creation() {
        let emb = Embedding::new(vec![0.1, 0.2, 0.3]);

        assert_eq!(emb.dimensions(), 3);
        assert_eq!(emb.vector(), &[0.1, 0.2, 0.3]);
        assert!(!emb.is_empty());
    }

    #[test]
    fn test_cosine_similarity_identical() {
        let a = vec![1.0, 0.0, 0.0];
        let b = vec![1.0, 0.0, 0.0];

        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 0.0001);
        assert!(cosine_distance(&a, &b).abs() < 0.0001);
    }

    #[test]
    fn test_cosine_similarity_orthogonal() {
        let a = vec![1.0, 0.0, 0.0];
        let b = vec![0.0, 1.0, 0.0];

        assert!(cosine_similarity(&a, &b).abs() < 0.0001);
        assert!((cosine_distance(&a, &b) - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_cosine_distance_opposite() {
        let a = vec![1.0, 0.0, 0.0];
        let b = vec![-1.0, 0.0, 0.0];

        assert!((cosine_distance(&a, &b) - 2.0).abs() < 0.0001);
    }

    #[test]
    fn test_cosine_distance_ignores_magnitude() {
        let a = Embedding::new(vec![1.0, 2.0]);
        let b = Embedding::new(vec![10.0, 20.0]);

        assert!(a.cosine_distance(&b).abs() < 0.0001);
    }

    #[test]
    fn test_cosine_similarity_zero_norm() {
        let zero = vec![0.0, 0.0];
        let other = vec![1.0, 2.0];

        assert_eq!(cosine_similarity(&zero, &other), 0.0);
        assert_eq!(cosine_distance(&zero, &other), 1.0);
    }

    #[test]
    fn test_cosine_similarity_different_lengths() {
        let a = vec![1.0, 2.0];
        let b = vec![1.0, 2.0, 3.0];

        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_embedding_deserializes_from_plain_array() {
        let emb: Embedding = serde_json::from_str("[0.5, -0.25]").unwrap();
        assert_eq!(emb.vector(), &[0.5, -0.25]);
    }

    #[test]
    fn test_cosine_similarity_large_components() {
        let a = vec![1e20, 0.0];
        let b = vec![-1e20, 0.0];

        assert!((cosine_similarity(&a, &a) - 1.0).abs() < 0.0001);
        assert!((cosine_distance(&a, &b) - 2.0).abs() < 0.0001);
    }
}
