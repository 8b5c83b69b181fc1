//! Translation result types

use serde::Serialize;

use crate::domain::matching::MatchError;
use crate::domain::DomainError;

/// Pipeline stage at which a translation failure happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureStage {
    KeywordExtraction,
    Embedding,
    Matching,
}

/// A non-fatal failure recorded while translating
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslationFailure {
    pub stage: FailureStage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    pub message: String,
}

impl TranslationFailure {
    /// Failure coming from a language API call
    pub fn from_domain(stage: FailureStage, keyword: Option<&str>, error: &DomainError) -> Self {
        let status = match error {
            DomainError::Upstream { status, .. } => *status,
            _ => None,
        };

        Self {
            stage,
            keyword: keyword.map(str::to_string),
            status,
            message: error.to_string(),
        }
    }

    /// Failure coming from the matcher
    pub fn from_match(keyword: &str, error: &MatchError) -> Self {
        Self {
            stage: FailureStage::Matching,
            keyword: Some(keyword.to_string()),
            status: None,
            message: error.to_string(),
        }
    }
}

/// One recognized keyword and the gesture chosen for it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GestureMatch {
    pub keyword: String,
    pub gesture: String,
    pub candidate_index: usize,
    /// Cosine distance to the keyword; absent when no comparison was made
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f32>,
}

/// Overall outcome of a translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationStatus {
    /// Every upstream call succeeded
    Complete,
    /// At least one upstream call or match failed
    Degraded,
}

/// Ordered gestures for a sentence, in the order the API returned keywords
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslationResult {
    input: String,
    keywords: Vec<String>,
    matches: Vec<GestureMatch>,
    failures: Vec<TranslationFailure>,
}

impl TranslationResult {
    pub fn new(input: impl Into<String>, keywords: Vec<String>) -> Self {
        Self {
            input: input.into(),
            keywords,
            matches: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Empty result for a request whose keyword extraction failed
    pub fn failed_extraction(input: impl Into<String>, error: &DomainError) -> Self {
        let mut result = Self::new(input, Vec::new());
        result.record_failure(TranslationFailure::from_domain(
            FailureStage::KeywordExtraction,
            None,
            error,
        ));
        result
    }

    pub fn push_match(&mut self, gesture_match: GestureMatch) {
        self.matches.push(gesture_match);
    }

    pub fn record_failure(&mut self, failure: TranslationFailure) {
        self.failures.push(failure);
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Keywords as returned by the API, including unrecognized ones
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn matches(&self) -> &[GestureMatch] {
        &self.matches
    }

    pub fn failures(&self) -> &[TranslationFailure] {
        &self.failures
    }

    /// Chosen gesture descriptions, in keyword order
    pub fn gestures(&self) -> Vec<&str> {
        self.matches.iter().map(|m| m.gesture.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn is_degraded(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn status(&self) -> TranslationStatus {
        if self.is_degraded() {
            TranslationStatus::Degraded
        } else {
            TranslationStatus::Complete
        }
    }
}
