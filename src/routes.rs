use axum::{response::IntoResponse, Router};
use http::{header, HeaderValue};
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::errors::AppError;

/// Build the main application router
pub fn app_router() -> Router<AppState> {
    let api = Router::new()
        .merge(crate::api::routes::system_routes::system_routes())
        .merge(crate::api::routes::log_routes::log_routes());

    Router::new()
        // Browser UI
        .merge(crate::api::routes::ui_routes::ui_routes())
        .nest("/api", api)
        .fallback(handler_404)
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .layer(CorsLayer::very_permissive())
}

/// Router with state attached, ready to serve.
pub fn build_router(state: AppState) -> Router {
    app_router().with_state(state)
}

async fn handler_404() -> impl IntoResponse {
    AppError::NotFound
}
