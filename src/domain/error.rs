use thiserror::Error;

use super::animation::AnimationError;
use super::language::LanguageOperation;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Upstream error: {operation} - {message}")]
    Upstream {
        operation: LanguageOperation,
        status: Option<u16>,
        message: String,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Animation error: {0}")]
    Animation(#[from] AnimationError),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Upstream failure without an HTTP status (transport, timeout, decoding)
    pub fn upstream(operation: LanguageOperation, message: impl Into<String>) -> Self {
        Self::Upstream {
            operation,
            status: None,
            message: message.into(),
        }
    }

    /// Upstream failure caused by a non-success HTTP status
    pub fn upstream_status(
        operation: LanguageOperation,
        status: u16,
        message: impl Into<String>,
    ) -> Self {
        Self::Upstream {
            operation,
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether this error came from the external language API
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("Invalid input");
        assert_eq!(error.to_string(), "Validation error: Invalid input");
    }

    #[test]
    fn test_upstream_status_error() {
        let error = DomainError::upstream_status(LanguageOperation::Keywords, 503, "unavailable");

        assert!(error.is_upstream());
        assert_eq!(error.to_string(), "Upstream error: keywords - unavailable");

        match error {
            DomainError::Upstream { status, .. } => assert_eq!(status, Some(503)),
            _ => panic!("expected upstream error"),
        }
    }

    #[test]
    fn test_animation_error_conversion() {
        let error: DomainError = AnimationError::AvatarNotFound {
            name: "NomeDoAvatar".into(),
        }
        .into();

        assert!(!error.is_upstream());
        assert!(error.to_string().contains("NomeDoAvatar"));
    }
}
