//! API route declarations (e.g., /api/*)

pub mod log_routes;
pub mod system_routes;
pub mod ui_routes;
