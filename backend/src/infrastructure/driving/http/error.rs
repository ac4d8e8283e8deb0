use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use shared::{FieldViolation, ProblemDetails};
use tracing::error;
use crate::application::AppError;

const UNEXPECTED_DETAIL: &str = "An unexpected error occurred.";

pub fn status_for(err: &AppError) -> StatusCode {
    match err {
        AppError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
        AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        AppError::NotFound(_) => StatusCode::NOT_FOUND,
        AppError::Conflict(_) => StatusCode::CONFLICT,
        AppError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        let detail = match &self {
            AppError::Unexpected(detail) => {
                error!(detail = %detail, "request failed unexpectedly");
                UNEXPECTED_DETAIL.to_string()
            }
            other => other.to_string(),
        };
        let errors = match self {
            AppError::ValidationFailed(fields) => Some(
                fields
                    .into_iter()
                    .map(|f| FieldViolation {
                        field: f.field,
                        message: f.message,
                    })
                    .collect(),
            ),
            _ => None,
        };

        let body = ProblemDetails {
            status: status.as_u16(),
            title: status.canonical_reason().unwrap_or("Error").to_string(),
            detail,
            errors,
        };
        (status, Json(body)).into_response()
    }
}

/// Undecodable bodies are reported like any other validation failure.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::field("body", rejection.body_text())
    }
}
