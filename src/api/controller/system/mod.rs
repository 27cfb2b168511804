//! System controller: connects routes to system usecases

use axum::extract::State;
use axum::Json;

use crate::api::dto::system_dto::HealthResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::errors::AppError;

pub struct SystemController;

impl SystemController {
    pub async fn health(
        State(state): State<AppState>,
    ) -> Result<Json<HealthResponse>, AppError> {
        to_json(state.system_service.health().await)
    }
}
