//! Serves the browser UI bundled into the binary.

use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use rust_embed::Embed;

use crate::errors::AppError;

#[derive(Embed)]
#[folder = "ui/"]
struct UiAssets;

fn mime_from_ext(path: &str) -> &'static str {
    match path.rsplit('.').next() {
        Some("html") => "text/html; charset=utf-8",
        Some("js") => "application/javascript; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

fn serve_embedded(path: &str) -> Response {
    match UiAssets::get(path) {
        Some(file) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, mime_from_ext(path)),
                (header::CACHE_CONTROL, "no-cache"),
            ],
            file.data.into_owned(),
        )
            .into_response(),
        None => AppError::NotFound.into_response(),
    }
}

pub struct UiController;

impl UiController {
    /// `GET /`
    pub async fn index() -> impl IntoResponse {
        serve_embedded("index.html")
    }

    /// `GET /ui/{*path}`
    pub async fn asset(Path(path): Path<String>) -> impl IntoResponse {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            return serve_embedded("index.html");
        }
        serve_embedded(path)
    }
}
