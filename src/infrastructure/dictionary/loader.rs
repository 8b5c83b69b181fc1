//! TOML gesture dictionary loader
//!
//! File format:
//!
//! ```toml
//! [[gesture]]
//! keyword = "bola"
//! descriptions = ["Fazer um círculo com as mãos"]
//! ```

use serde::Deserialize;
use tracing::info;

use crate::domain::{DomainError, GestureDictionary, GestureEntry};

/// Dictionary source configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DictionaryConfig {
    /// Path to a TOML dictionary; the built-in seed is used when unset
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DictionaryFile {
    #[serde(default)]
    gesture: Vec<GestureRecord>,
}

#[derive(Debug, Deserialize)]
struct GestureRecord {
    keyword: String,
    descriptions: Vec<String>,
}

/// Parse and validate a TOML dictionary
pub fn parse_dictionary(content: &str) -> Result<GestureDictionary, DomainError> {
    let file: DictionaryFile = toml::from_str(content)
        .map_err(|e| DomainError::configuration(format!("Invalid dictionary file: {}", e)))?;

    GestureDictionary::from_entries(
        file.gesture
            .into_iter()
            .map(|record| GestureEntry::new(record.keyword, record.descriptions)),
    )
    .map_err(|e| DomainError::validation(e.to_string()))
}

/// Load the dictionary configured for this process
pub async fn load_dictionary(config: &DictionaryConfig) -> Result<GestureDictionary, DomainError> {
    let dictionary = match &config.path {
        Some(path) => {
            let content = tokio::fs::read_to_string(path).await.map_err(|e| {
                DomainError::configuration(format!("Cannot read dictionary '{}': {}", path, e))
            })?;
            parse_dictionary(&content)?
        }
        None => GestureDictionary::seed(),
    };

    info!(
        source = config.path.as_deref().unwrap_or("built-in"),
        keywords = dictionary.len(),
        descriptions = dictionary.description_count(),
        "Gesture dictionary loaded"
    );

    Ok(dictionary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dictionary() {
        let dictionary = parse_dictionary(
            r#"
            [[gesture]]
            keyword = "menino"
            descriptions = ["Sinal de pessoa", "Apontar para baixo"]

            [[gesture]]
            keyword = "bola"
            descriptions = ["Fazer um círculo com as mãos"]
            "#,
        )
        .unwrap();

        assert_eq!(dictionary.keywords().collect::<Vec<_>>(), vec!["menino", "bola"]);
        assert_eq!(dictionary.get("menino").unwrap().candidate_count(), 2);
    }

    #[test]
    fn test_parse_empty_file() {
        let dictionary = parse_dictionary("").unwrap();
        assert!(dictionary.is_empty());
    }

    #[test]
    fn test_parse_duplicate_keyword() {
        let result = parse_dictionary(
            r#"
            [[gesture]]
            keyword = "bola"
            descriptions = ["a"]

            [[gesture]]
            keyword = "bola"
            descriptions = ["b"]
            "#,
        );

        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[test]
    fn test_parse_malformed_file() {
        let result = parse_dictionary("[[gesture]]\nkeyword = ");
        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }

    #[tokio::test]
    async fn test_load_seed_without_path() {
        let dictionary = load_dictionary(&DictionaryConfig::default()).await.unwrap();
        assert_eq!(dictionary.len(), 4);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let config = DictionaryConfig {
            path: Some("/nonexistent/gestures.toml".into()),
        };

        let result = load_dictionary(&config).await;
        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }

    #[tokio::test]
    async fn test_load_shipped_dictionary() {
        let config = DictionaryConfig {
            path: Some(concat!(env!("CARGO_MANIFEST_DIR"), "/data/gestures.toml").into()),
        };

        let dictionary = load_dictionary(&config).await.unwrap();
        assert!(dictionary.contains("bola"));
    }
}
