use anyhow::Result;
use axum::Json;

use crate::errors::AppError;

pub fn to_json<T: serde::Serialize>(result: Result<T>) -> Result<Json<T>, AppError> {
    match result {
        Ok(value) => Ok(Json(value)),
        Err(err) => Err(AppError::from(err)),
    }
}
