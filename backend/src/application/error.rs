// Application error taxonomy - every handler fails with exactly one of these kinds

use crate::application::ports::RepositoryError;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    /// One or more structural input violations (HTTP 400)
    #[error("One or more validation errors occurred.")]
    ValidationFailed(Vec<FieldError>),

    /// Missing authentication or an action the principal may not perform (HTTP 401)
    #[error("{0}")]
    Unauthorized(String),

    /// Referenced resource does not exist (HTTP 404)
    #[error("{0}")]
    NotFound(String),

    /// Uniqueness invariant violated (HTTP 409)
    #[error("{0}")]
    Conflict(String),

    /// Anything unanticipated; the detail is logged, never returned (HTTP 500)
    #[error("Unexpected failure: {0}")]
    Unexpected(String),
}

impl AppError {
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::ValidationFailed(vec![FieldError::new(field, message)])
    }

    pub fn unexpected(err: impl fmt::Display) -> Self {
        AppError::Unexpected(err.to_string())
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::UniqueViolation(_) => {
                AppError::Conflict("Resource already exists.".to_string())
            }
            RepositoryError::MissingReference(_) => {
                AppError::NotFound("Referenced resource not found.".to_string())
            }
            RepositoryError::Unavailable(detail) => AppError::Unexpected(detail),
        }
    }
}
