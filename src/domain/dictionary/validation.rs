//! Dictionary validation utilities

use std::fmt;

use super::GestureEntry;

/// Dictionary validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum DictionaryValidationError {
    /// Keyword is empty or whitespace
    EmptyKeyword,
    /// Keyword appears more than once
    DuplicateKeyword { keyword: String },
    /// Entry has no gesture descriptions
    NoDescriptions { keyword: String },
    /// A gesture description is blank
    BlankDescription { keyword: String, index: usize },
}

impl fmt::Display for DictionaryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyKeyword => write!(f, "Dictionary keyword cannot be empty"),
            Self::DuplicateKeyword { keyword } => {
                write!(f, "Keyword '{}' is defined more than once", keyword)
            }
            Self::NoDescriptions { keyword } => {
                write!(f, "Keyword '{}' has no gesture descriptions", keyword)
            }
            Self::BlankDescription { keyword, index } => {
                write!(
                    f,
                    "Gesture description {} of keyword '{}' is blank",
                    index, keyword
                )
            }
        }
    }
}

impl std::error::Error for DictionaryValidationError {}

/// Validate a dictionary keyword
pub fn validate_keyword(keyword: &str) -> Result<(), DictionaryValidationError> {
    if keyword.trim().is_empty() {
        return Err(DictionaryValidationError::EmptyKeyword);
    }

    Ok(())
}

/// Validate a single entry (keyword and descriptions)
pub fn validate_entry(entry: &GestureEntry) -> Result<(), DictionaryValidationError> {
    validate_keyword(entry.keyword())?;

    if entry.descriptions().is_empty() {
        return Err(DictionaryValidationError::NoDescriptions {
            keyword: entry.keyword().to_string(),
        });
    }

    if let Some(index) = entry.descriptions().iter().position(|d| d.trim().is_empty()) {
        return Err(DictionaryValidationError::BlankDescription {
            keyword: entry.keyword().to_string(),
            index,
        });
    }

    Ok(())
}
