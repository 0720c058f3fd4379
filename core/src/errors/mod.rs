//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, TokenError};

use td_shared::types::ErrorResponse;
use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Stable error code surfaced to API callers
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::Validation { .. } => "VALIDATION_ERROR",
            DomainError::NotFound { .. } => "NOT_FOUND",
            DomainError::Internal { .. } => "INTERNAL_ERROR",
            DomainError::Auth(err) => err.error_code(),
            DomainError::Token(err) => err.error_code(),
        }
    }

    /// True for infrastructure failures that should surface as 5xx
    pub fn is_internal(&self) -> bool {
        matches!(self, DomainError::Internal { .. })
    }
}

impl From<DomainError> for ErrorResponse {
    fn from(err: DomainError) -> Self {
        ErrorResponse::new(err.error_code(), err.to_string())
    }
}
