//! Log management service: JSON-file log store with filtered, paginated
//! queries over HTTP and a bundled browser UI.

pub mod api;
pub mod app_state;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod routes;
pub mod seed;
pub mod telemetry;
