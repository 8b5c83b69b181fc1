//! Gesture matching by cosine distance

use thiserror::Error;

use crate::domain::embedding::Embedding;

/// Matching errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    #[error("No candidate embeddings to compare against")]
    NoCandidates,

    #[error("Query embedding is empty")]
    EmptyQuery,

    #[error("Candidate {index} has {found} dimensions, expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("No candidate distance could be computed")]
    NoComparableCandidates,
}

/// Result of a nearest-candidate scan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateMatch {
    /// Index of the chosen candidate
    pub index: usize,
    /// Cosine distance to the query; `None` when there was only one candidate
    pub distance: Option<f32>,
}

impl CandidateMatch {
    /// A match that needed no comparison
    pub fn trivial() -> Self {
        Self {
            index: 0,
            distance: None,
        }
    }
}

/// Pick the candidate with the smallest cosine distance to the query
///
/// Ties go to the lowest index. A single candidate is returned without
/// looking at any vector. Candidates whose distance is NaN are skipped.
pub fn closest_candidate(
    query: &Embedding,
    candidates: &[Embedding],
) -> Result<CandidateMatch, MatchError> {
    match candidates.len() {
        0 => return Err(MatchError::NoCandidates),
        1 => return Ok(CandidateMatch::trivial()),
        _ => {}
    }

    if query.is_empty() {
        return Err(MatchError::EmptyQuery);
    }

    let expected = query.dimensions();
    let mut best: Option<(usize, f32)> = None;

    for (index, candidate) in candidates.iter().enumerate() {
        if candidate.dimensions() != expected {
            return Err(MatchError::DimensionMismatch {
                index,
                expected,
                found: candidate.dimensions(),
            });
        }

        let distance = query.cosine_distance(candidate);
        if distance.is_nan() {
            continue;
        }

        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }

    let (index, distance) = best.ok_or(MatchError::NoComparableCandidates)?;

    Ok(CandidateMatch {
        index,
        distance: Some(distance),
    })
}
