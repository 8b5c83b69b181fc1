use serde::{Deserialize, Serialize};

/// A keyword and its ordered candidate gesture descriptions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureEntry {
    keyword: String,
    descriptions: Vec<String>,
}

impl GestureEntry {
    pub fn new(keyword: impl Into<String>, descriptions: Vec<String>) -> Self {
        Self {
            keyword: keyword.into(),
            descriptions,
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn descriptions(&self) -> &[String] {
        &self.descriptions
    }

    /// Description at the given candidate index
    pub fn description(&self, index: usize) -> Option<&str> {
        self.descriptions.get(index).map(String::as_str)
    }

    /// Number of candidate descriptions
    pub fn candidate_count(&self) -> usize {
        self.descriptions.len()
    }

    /// True when there is nothing to choose between
    pub fn is_unambiguous(&self) -> bool {
        self.descriptions.len() == 1
    }
}
