//! HTML error responses

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::error;

use crate::api::views;
use crate::domain::{DomainError, TemplateError};

/// API error with status code, rendered as an error page
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match views::render_error(self.status, &self.message) {
            Ok(page) => (self.status, Html(page)).into_response(),
            Err(e) => {
                error!(error = %e, "Failed to render error page");
                (self.status, self.message).into_response()
            }
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        // Validation only covers server-side data such as the dictionary file
        match &err {
            DomainError::Upstream { .. } => Self::bad_gateway(err.to_string()),
            DomainError::Validation { message } | DomainError::Configuration { message } => {
                Self::internal(message)
            }
            DomainError::Animation(e) => Self::internal(e.to_string()),
        }
    }
}

impl From<TemplateError> for ApiError {
    fn from(err: TemplateError) -> Self {
        Self::internal(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl std::error::Error for ApiError {}
