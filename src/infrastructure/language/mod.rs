//! Language API client implementations

mod gemini;
mod http_client;

pub use gemini::{GeminiLanguageClient, DEFAULT_GEMINI_BASE_URL};
pub use http_client::{HttpClient, HttpClientTrait, HttpError};

#[cfg(test)]
pub use http_client::mock::MockHttpClient;
