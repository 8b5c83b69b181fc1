//! Embedding vectors and similarity measures

mod vector;

pub use vector::{cosine_distance, cosine_similarity, Embedding};
