//! End-to-end tests for the HTTP surface, driven through the router with
//! `oneshot` so no socket is opened.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use logdesk_core::app_state::build_app_state_with_repo;
use logdesk_core::core::persistence::logs::log_entry_fs_adapter::LogEntryFsAdapter;
use logdesk_core::core::persistence::logs::log_entry_memory_adapter::LogEntryMemoryAdapter;
use logdesk_core::core::persistence::logs::log_entry_repository::LogEntryRepository;
use logdesk_core::routes::build_router;

fn memory_app() -> Router {
    let repo = LogEntryRepository::new(Box::new(LogEntryMemoryAdapter::new()));
    build_router(build_app_state_with_repo(repo))
}

fn file_app(path: std::path::PathBuf) -> Router {
    let repo = LogEntryRepository::new(Box::new(LogEntryFsAdapter::new(path)));
    build_router(build_app_state_with_repo(repo))
}

fn entry(level: &str, message: &str, resource: &str, timestamp: &str) -> Value {
    json!({
        "level": level,
        "message": message,
        "resourceId": resource,
        "timestamp": timestamp,
        "traceId": "abc-xyz-123",
        "spanId": "span-456",
        "commit": "5e5342f",
        "metadata": { "parentResourceId": "server-0987" }
    })
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, req).await
}

async fn post_raw(app: &Router, body: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/logs")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}

async fn post(app: &Router, body: &Value) -> (StatusCode, Value) {
    post_raw(app, &body.to_string()).await
}

async fn seed(app: &Router) {
    let entries = [
        entry("error", "Failed to connect to database", "server-1234", "2023-09-15T08:00:00Z"),
        entry("warn", "High memory usage detected", "server-5678", "2023-09-15T09:00:00Z"),
        entry("info", "User login successful", "server-1234", "2023-09-15T10:00:00Z"),
        entry("debug", "Cache miss for key user-42", "cache-01", "2023-09-15T11:00:00Z"),
    ];
    for e in &entries {
        let (status, _) = post(app, e).await;
        assert_eq!(status, StatusCode::CREATED);
    }
}

#[tokio::test]
async fn health_reports_ok() {
    let app = memory_app();
    let (status, body) = get(&app, "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
    assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn create_returns_201_with_id() {
    let app = memory_app();
    let (status, body) = post(
        &app,
        &entry("info", "hello", "server-1", "2023-09-15T08:00:00.123Z"),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Log entry created successfully");
    assert!(!body["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn created_entry_is_listed_with_all_fields() {
    let app = memory_app();
    let (_, created) = post(
        &app,
        &entry("warn", "disk almost full", "server-9", "2023-09-15T08:00:00Z"),
    )
    .await;

    let (status, body) = get(&app, "/api/logs").await;
    assert_eq!(status, StatusCode::OK);
    let logs = body["logs"].as_array().unwrap();
    assert_eq!(logs.len(), 1);

    let log = &logs[0];
    assert_eq!(log["id"], created["id"]);
    assert_eq!(log["level"], "warn");
    assert_eq!(log["message"], "disk almost full");
    assert_eq!(log["resourceId"], "server-9");
    assert_eq!(log["timestamp"], "2023-09-15T08:00:00Z");
    assert_eq!(log["traceId"], "abc-xyz-123");
    assert_eq!(log["spanId"], "span-456");
    assert_eq!(log["commit"], "5e5342f");
    assert_eq!(log["metadata"]["parentResourceId"], "server-0987");

    assert_eq!(
        body["pagination"],
        json!({ "page": 1, "limit": 50, "total": 1, "totalPages": 1 })
    );
}

#[tokio::test]
async fn missing_field_is_rejected_in_order() {
    let app = memory_app();
    let mut body = entry("info", "hello", "server-1", "2023-09-15T08:00:00Z");
    body.as_object_mut().unwrap().remove("traceId");
    body.as_object_mut().unwrap().remove("commit");

    let (status, resp) = post(&app, &body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp["error"], "Missing required field: traceId");
}

#[tokio::test]
async fn empty_string_counts_as_missing() {
    let app = memory_app();
    let (status, resp) = post(&app, &entry("info", "", "server-1", "2023-09-15T08:00:00Z")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp["error"], "Missing required field: message");
}

#[tokio::test]
async fn invalid_level_is_rejected() {
    let app = memory_app();
    let (status, resp) = post(&app, &entry("fatal", "boom", "server-1", "2023-09-15T08:00:00Z")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        resp["error"],
        "Invalid level. Must be one of: error, warn, info, debug"
    );
}

#[tokio::test]
async fn invalid_timestamp_is_rejected() {
    let app = memory_app();
    let (status, resp) = post(&app, &entry("info", "boom", "server-1", "15/09/2023 08:00")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(resp["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid timestamp format"));

    let (_, listed) = get(&app, "/api/logs").await;
    assert_eq!(listed["pagination"]["total"], 0);
}

#[tokio::test]
async fn malformed_json_is_a_400_with_error_body() {
    let app = memory_app();
    let (status, resp) = post_raw(&app, "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(resp["error"].is_string());
}

#[tokio::test]
async fn wrong_field_type_is_a_400() {
    let app = memory_app();
    let mut body = entry("info", "hello", "server-1", "2023-09-15T08:00:00Z");
    body["message"] = json!(42);

    let (status, resp) = post(&app, &body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(resp["error"].is_string());
}

#[tokio::test]
async fn results_are_newest_first() {
    let app = memory_app();
    seed(&app).await;

    let (_, body) = get(&app, "/api/logs").await;
    let stamps: Vec<&str> = body["logs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["timestamp"].as_str().unwrap())
        .collect();

    assert_eq!(
        stamps,
        vec![
            "2023-09-15T11:00:00Z",
            "2023-09-15T10:00:00Z",
            "2023-09-15T09:00:00Z",
            "2023-09-15T08:00:00Z",
        ]
    );
}

#[tokio::test]
async fn filters_combine() {
    let app = memory_app();
    seed(&app).await;

    let (_, body) = get(&app, "/api/logs?level=error,info&resourceId=SERVER-1234").await;
    assert_eq!(body["pagination"]["total"], 2);

    let (_, body) = get(&app, "/api/logs?search=LOGIN&level=info").await;
    let logs = body["logs"].as_array().unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0]["message"], "User login successful");

    let (_, body) = get(
        &app,
        "/api/logs?startTime=2023-09-15T09:00:00Z&endTime=2023-09-15T10:00:00Z",
    )
    .await;
    assert_eq!(body["pagination"]["total"], 2);
}

#[tokio::test]
async fn datetime_local_bounds_are_accepted() {
    let app = memory_app();
    seed(&app).await;

    let (status, body) = get(&app, "/api/logs?startTime=2023-09-15T10:30").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["logs"][0]["level"], "debug");
}

#[tokio::test]
async fn unreadable_time_bound_matches_nothing() {
    let app = memory_app();
    seed(&app).await;

    let (status, body) = get(&app, "/api/logs?startTime=yesterday").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["total"], 0);
    assert_eq!(body["pagination"]["totalPages"], 0);
}

#[tokio::test]
async fn pagination_reports_pages() {
    let app = memory_app();
    seed(&app).await;

    let (_, body) = get(&app, "/api/logs?page=2&limit=3").await;
    assert_eq!(
        body["pagination"],
        json!({ "page": 2, "limit": 3, "total": 4, "totalPages": 2 })
    );
    let logs = body["logs"].as_array().unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0]["timestamp"], "2023-09-15T08:00:00Z");

    let (_, body) = get(&app, "/api/logs?page=9&limit=3").await;
    assert!(body["logs"].as_array().unwrap().is_empty());
    assert_eq!(body["pagination"]["page"], 9);
}

#[tokio::test]
async fn bad_paging_values_fall_back_to_defaults() {
    let app = memory_app();
    seed(&app).await;

    let (status, body) = get(&app, "/api/logs?page=0&limit=abc").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["limit"], 50);
}

#[tokio::test]
async fn repeated_paging_keys_use_the_first_value() {
    let app = memory_app();
    seed(&app).await;

    let (status, body) = get(&app, "/api/logs?limit=3&limit=20&page=2&page=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["pagination"],
        json!({ "page": 2, "limit": 3, "total": 4, "totalPages": 2 })
    );
}

#[tokio::test]
async fn repeated_filter_keys_use_the_first_value() {
    let app = memory_app();
    seed(&app).await;

    let (status, body) = get(&app, "/api/logs?level=error&level=info&limit=abc&limit=0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["pagination"]["limit"], 50);
    assert_eq!(body["logs"][0]["level"], "error");
}

#[tokio::test]
async fn non_ascii_digit_timestamp_is_rejected() {
    let app = memory_app();
    let (status, resp) = post(
        &app,
        &entry("info", "boom", "server-1", "٢٠٢٣-٠٩-١٥T٠٨:٠٠:٠٠Z"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(resp["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid timestamp format"));
}

#[tokio::test]
async fn levels_and_resources_are_distinct_in_insertion_order() {
    let app = memory_app();
    seed(&app).await;
    post(&app, &entry("error", "again", "server-5678", "2023-09-15T12:00:00Z")).await;

    let (status, levels) = get(&app, "/api/logs/levels").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(levels, json!(["error", "warn", "info", "debug"]));

    let (status, resources) = get(&app, "/api/logs/resources").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resources, json!(["server-1234", "server-5678", "cache-01"]));
}

#[tokio::test]
async fn empty_store_lists_nothing() {
    let app = memory_app();

    let (_, body) = get(&app, "/api/logs").await;
    assert_eq!(
        body,
        json!({
            "logs": [],
            "pagination": { "page": 1, "limit": 50, "total": 0, "totalPages": 0 }
        })
    );
    let (_, levels) = get(&app, "/api/logs/levels").await;
    assert_eq!(levels, json!([]));
}

#[tokio::test]
async fn unknown_route_is_a_json_404() {
    let app = memory_app();
    let (status, body) = get(&app, "/api/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "The requested resource was not found");
}

#[tokio::test]
async fn root_serves_the_ui() {
    let app = memory_app();
    let resp = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));
    assert_eq!(resp.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");

    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("/ui/app.js"));
}

#[tokio::test]
async fn ui_assets_are_served() {
    let app = memory_app();
    let resp = app
        .oneshot(Request::builder().uri("/ui/app.js").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("application/javascript"));
}

#[tokio::test]
async fn file_store_persists_across_app_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("logs.json");

    let app = file_app(path.clone());
    let (status, _) = post(&app, &entry("info", "persisted", "server-1", "2023-09-15T08:00:00Z")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(path.exists());

    let reopened = file_app(path.clone());
    let (_, body) = get(&reopened, "/api/logs").await;
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["logs"][0]["message"], "persisted");

    let on_disk: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn missing_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let app = file_app(dir.path().join("logs.json"));

    let (status, body) = get(&app, "/api/logs").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["total"], 0);
}

#[tokio::test]
async fn corrupt_file_is_a_500() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs.json");
    std::fs::write(&path, "{ definitely not an array").unwrap();
    let app = file_app(path.clone());

    let (status, body) = get(&app, "/api/logs").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");

    let (status, body) = post(&app, &entry("info", "x", "server-1", "2023-09-15T08:00:00Z")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");

    // The store is left untouched.
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ definitely not an array");
}
