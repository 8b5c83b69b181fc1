//! Immutable keyword -> gesture store

use std::collections::HashMap;

use super::validation::{validate_entry, DictionaryValidationError};
use super::GestureEntry;

/// Read-only gesture dictionary, built once at startup
///
/// Entries keep their load order; lookups are exact on the keyword.
#[derive(Debug, Clone, Default)]
pub struct GestureDictionary {
    entries: Vec<GestureEntry>,
    index: HashMap<String, usize>,
}

impl GestureDictionary {
    /// Build a dictionary, rejecting invalid entries and duplicate keywords
    pub fn from_entries(
        entries: impl IntoIterator<Item = GestureEntry>,
    ) -> Result<Self, DictionaryValidationError> {
        let mut dictionary = Self::default();

        for entry in entries {
            validate_entry(&entry)?;

            if dictionary.index.contains_key(entry.keyword()) {
                return Err(DictionaryValidationError::DuplicateKeyword {
                    keyword: entry.keyword().to_string(),
                });
            }

            dictionary
                .index
                .insert(entry.keyword().to_string(), dictionary.entries.len());
            dictionary.entries.push(entry);
        }

        Ok(dictionary)
    }

    /// The built-in starter dictionary
    pub fn seed() -> Self {
        let entries = [
            (
                "menino",
                "Fazer o sinal de 'pessoa' e depois apontar para baixo, indicando 'pequeno'",
            ),
            (
                "gosta",
                "Tocar o peito com a mão aberta e fazer um movimento circular",
            ),
            ("jogar", "Imitar o movimento de arremessar uma bola"),
            ("bola", "Fazer um círculo com as mãos"),
        ];

        let mut dictionary = Self::default();
        for (keyword, description) in entries {
            dictionary
                .index
                .insert(keyword.to_string(), dictionary.entries.len());
            dictionary
                .entries
                .push(GestureEntry::new(keyword, vec![description.to_string()]));
        }

        dictionary
    }

    pub fn get(&self, keyword: &str) -> Option<&GestureEntry> {
        self.index.get(keyword).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.index.contains_key(keyword)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[GestureEntry] {
        &self.entries
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(GestureEntry::keyword)
    }

    /// Total number of gesture descriptions across all keywords
    pub fn description_count(&self) -> usize {
        self.entries.iter().map(GestureEntry::candidate_count).sum()
    }
}
