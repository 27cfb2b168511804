use anyhow::Result;

use crate::api::dto::system_dto::HealthResponse;
use crate::core::util::time_util::now_iso_millis;

pub async fn health() -> Result<HealthResponse> {
    Ok(HealthResponse {
        status: "OK".to_string(),
        timestamp: now_iso_millis(),
    })
}
