use std::fmt;

use serde::{Deserialize, Serialize};

/// The three logical operations offered by the language API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageOperation {
    Tokenize,
    Keywords,
    Embed,
}

impl LanguageOperation {
    /// Endpoint path relative to the API base URL
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Tokenize => "separarPalavras",
            Self::Keywords => "acharPalavrasChave",
            Self::Embed => "gerarEmbedding",
        }
    }

    /// Name of the JSON field carrying the result on success
    pub fn response_field(&self) -> &'static str {
        match self {
            Self::Tokenize => "palavras",
            Self::Keywords => "palavrasChave",
            Self::Embed => "embedding",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tokenize => "tokenize",
            Self::Keywords => "keywords",
            Self::Embed => "embed",
        }
    }
}

impl fmt::Display for LanguageOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
