//! Gemini language API client

use std::time::Instant;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{HttpClientTrait, HttpError};
use crate::domain::embedding::Embedding;
use crate::domain::language::{LanguageClient, LanguageOperation};
use crate::domain::DomainError;
use crate::infrastructure::observability::{record_upstream_call, UpstreamCallMetricParams};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://api.gemini.google.com/v1";

/// Language client speaking the Gemini text endpoints
///
/// Every operation POSTs `{"text": ...}` and reads one named field from the
/// reply. A missing field means "nothing extracted".
#[derive(Debug)]
pub struct GeminiLanguageClient<C: HttpClientTrait> {
    client: C,
    auth_header: String,
    base_url: String,
}

impl<C: HttpClientTrait> GeminiLanguageClient<C> {
    pub fn new(client: C, api_key: impl Into<String>) -> Self {
        Self::with_base_url(client, api_key, DEFAULT_GEMINI_BASE_URL)
    }

    pub fn with_base_url(
        client: C,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let auth_header = format!("Bearer {}", api_key.into());
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client,
            auth_header,
            base_url,
        }
    }

    fn url(&self, operation: LanguageOperation) -> String {
        format!("{}/{}", self.base_url, operation.endpoint())
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        vec![
            ("Authorization", self.auth_header.as_str()),
            ("Content-Type", "application/json"),
        ]
    }

    async fn call<T>(&self, operation: LanguageOperation, text: &str) -> Result<T, DomainError>
    where
        T: DeserializeOwned + Default,
    {
        let start = Instant::now();
        let body = serde_json::json!({ "text": text });

        let result = self
            .client
            .post_json(&self.url(operation), self.headers(), &body)
            .await
            .map_err(|e| upstream_error(operation, e))
            .and_then(|json| extract_field(operation, json));

        record_upstream_call(UpstreamCallMetricParams {
            provider: self.provider_name(),
            operation,
            duration: start.elapsed(),
            success: result.is_ok(),
        });

        match &result {
            Ok(_) => debug!(
                operation = %operation,
                duration_ms = %start.elapsed().as_millis(),
                "Language API call succeeded"
            ),
            Err(DomainError::Upstream {
                status, message, ..
            }) => warn!(
                operation = %operation,
                status = ?status,
                error = %message,
                "Language API call failed"
            ),
            Err(e) => warn!(operation = %operation, error = %e, "Language API call failed"),
        }

        result
    }
}

fn upstream_error(operation: LanguageOperation, error: HttpError) -> DomainError {
    match error {
        HttpError::Status { status, body } => {
            DomainError::upstream_status(operation, status, format!("HTTP {}: {}", status, body))
        }
        other => DomainError::upstream(operation, other.to_string()),
    }
}

fn extract_field<T>(operation: LanguageOperation, mut json: serde_json::Value) -> Result<T, DomainError>
where
    T: DeserializeOwned + Default,
{
    match json.get_mut(operation.response_field()).map(serde_json::Value::take) {
        None | Some(serde_json::Value::Null) => Ok(T::default()),
        Some(value) => serde_json::from_value(value).map_err(|e| {
            DomainError::upstream(
                operation,
                format!("Invalid '{}' field: {}", operation.response_field(), e),
            )
        }),
    }
}

#[async_trait]
impl<C: HttpClientTrait> LanguageClient for GeminiLanguageClient<C> {
    async fn tokenize(&self, text: &str) -> Result<Vec<String>, DomainError> {
        self.call(LanguageOperation::Tokenize, text).await
    }

    async fn extract_keywords(&self, text: &str) -> Result<Vec<String>, DomainError> {
        self.call(LanguageOperation::Keywords, text).await
    }

    async fn embed(&self, text: &str) -> Result<Embedding, DomainError> {
        let values: Vec<f32> = self.call(LanguageOperation::Embed, text).await?;
        Ok(Embedding::new(values))
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}
