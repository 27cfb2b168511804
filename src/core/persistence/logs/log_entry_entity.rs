use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::util::time_util::parse_instant;

use super::log_level::LogLevel;

/// A single persisted log line.
///
/// Entries are append-only: once written to the store they are never
/// updated or removed. `timestamp` keeps the exact string the client sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LogEntryEntity {
    pub level: LogLevel,
    pub message: String,
    pub resource_id: String,
    pub timestamp: String,
    pub trace_id: String,
    pub span_id: String,
    pub commit: String,
    /// Free-form key/value payload attached by the emitter.
    #[serde(default)]
    pub metadata: Map<String, Value>,
    /// Server-assigned identifier.
    pub id: String,
}

impl LogEntryEntity {
    /// The entry's timestamp as an instant, if it can be read as one.
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        parse_instant(&self.timestamp)
    }
}
