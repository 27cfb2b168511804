use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

use crate::domain::log::dto::log_entry_create_request::LogValidationError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    BodyParsingError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("The requested resource was not found")]
    NotFound,
}

/// Map a domain error into an `AppError`.
///
/// Validation failures keep their message; anything else is treated as a
/// storage failure and only described in the server log.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        if let Some(v) = err.downcast_ref::<LogValidationError>() {
            return AppError::ValidationError(v.to_string());
        }
        AppError::StorageError(format!("{err:#}"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::BodyParsingError(_) => StatusCode::BAD_REQUEST,
            AppError::StorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound => StatusCode::NOT_FOUND,
        };

        let message = match &self {
            AppError::StorageError(detail) => {
                tracing::error!(%detail, "Request failed on log storage");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
