//! Log controller: connects routes to log use cases

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::dto::log_dto::LogEntryCreatedResponse;
use crate::api::dto::log_query_dto::LogQuery;
use crate::api::dto::paginated_response::PaginatedLogResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::core::persistence::logs::log_entry_entity::LogEntryEntity;
use crate::domain::log::dto::log_entry_create_request::LogEntryCreateRequest;
use crate::errors::AppError;

pub struct LogController;

impl LogController {
    pub async fn create_log_entry(
        State(state): State<AppState>,
        payload: Result<Json<LogEntryCreateRequest>, JsonRejection>,
    ) -> Result<(StatusCode, Json<LogEntryCreatedResponse>), AppError> {
        let Json(payload) = payload.map_err(|e| AppError::BodyParsingError(e.body_text()))?;
        let created = to_json(state.log_service.create_log_entry(payload).await)?;
        Ok((StatusCode::CREATED, created))
    }

    /// Query parameters are read as raw pairs; a repeated key keeps its first value.
    pub async fn list_log_entries(
        State(state): State<AppState>,
        params: Result<Query<Vec<(String, String)>>, QueryRejection>,
    ) -> Result<Json<PaginatedLogResponse<LogEntryEntity>>, AppError> {
        let Query(pairs) = params.map_err(|e| AppError::BodyParsingError(e.body_text()))?;
        let query = LogQuery::from_pairs(pairs);
        to_json(state.log_service.query_log_entries(query.into()).await)
    }

    pub async fn list_levels(
        State(state): State<AppState>,
    ) -> Result<Json<Vec<String>>, AppError> {
        to_json(state.log_service.list_levels().await)
    }

    pub async fn list_resources(
        State(state): State<AppState>,
    ) -> Result<Json<Vec<String>>, AppError> {
        to_json(state.log_service.list_resources().await)
    }
}
