use serde::{Deserialize, Serialize};

/// Body of `201 Created` for `POST /api/logs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntryCreatedResponse {
    pub message: String,
    pub id: String,
}
