use axum::{routing::get, Router};
use crate::api::controller::ui::UiController;
use crate::app_state::AppState;

pub fn ui_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(UiController::index))
        .route("/ui/{*path}", get(UiController::asset))
}
