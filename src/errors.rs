use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::flows::StepError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("unknown flow: {0}")]
    UnknownFlow(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    /// Flow-scoped blocking message, the demo alert equivalent.
    #[error("{0}")]
    StepBlocked(String),

    /// Field-scoped validation messages keyed by field id.
    #[error("validation failed")]
    FieldErrors(BTreeMap<String, String>),
}

impl From<StepError> for AppError {
    fn from(err: StepError) -> Self {
        match err {
            StepError::Blocked(message) => AppError::StepBlocked(message),
            StepError::Invalid(errors) => AppError::FieldErrors(errors),
            other => AppError::BadRequest(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::UnknownFlow(_) | AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::StepBlocked(_) | AppError::FieldErrors(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        };

        let body = match &self {
            AppError::FieldErrors(errors) => serde_json::json!({
                "error": self.to_string(),
                "errors": errors,
            }),
            _ => serde_json::json!({ "error": self.to_string() }),
        };
        (status, axum::Json(body)).into_response()
    }
}
