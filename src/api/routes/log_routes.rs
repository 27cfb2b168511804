//! Log routes (/api/logs/*)

use axum::{routing::get, Router};
use crate::api::controller::log::LogController;
use crate::app_state::AppState;

pub fn log_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/logs",
            get(LogController::list_log_entries).post(LogController::create_log_entry),
        )
        .route("/logs/levels", get(LogController::list_levels))
        .route("/logs/resources", get(LogController::list_resources))
}
