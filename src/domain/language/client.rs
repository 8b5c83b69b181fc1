//! Language client trait definition

use async_trait::async_trait;

use crate::domain::embedding::Embedding;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Client for the external language-processing API
///
/// Every method is one network call. An `Ok` with an empty collection means
/// the API found nothing; an `Err` means the call itself failed.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LanguageClient: Send + Sync {
    /// Split text into tokens
    async fn tokenize(&self, text: &str) -> Result<Vec<String>, DomainError>;

    /// Extract the significant keywords of a text
    async fn extract_keywords(&self, text: &str) -> Result<Vec<String>, DomainError>;

    /// Generate an embedding vector for a text
    async fn embed(&self, text: &str) -> Result<Embedding, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}
