use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use validator::Validate;

use crate::core::persistence::logs::log_entry_entity::LogEntryEntity;
use crate::core::persistence::logs::log_level::LogLevel;

/// `YYYY-MM-DDTHH:mm:ss`, optional `.mmm`, optional `Z` or `±HH:MM`.
/// ASCII digits only; `\d` would also take other Unicode digits.
static TIMESTAMP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}(\.[0-9]{3})?(Z|[+-][0-9]{2}:[0-9]{2})?$")
        .expect("timestamp pattern compiles")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid level. Must be one of: error, warn, info, debug")]
    InvalidLevel,

    #[error("Invalid timestamp format. Must be ISO 8601 format (YYYY-MM-DDTHH:mm:ssZ or YYYY-MM-DDTHH:mm:ss)")]
    InvalidTimestamp,
}

/// Ingest payload for a single log entry. `id` is assigned by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LogEntryCreateRequest {
    pub level: Option<String>,

    pub message: Option<String>,

    #[serde(rename = "resourceId")]
    pub resource_id: Option<String>,

    #[validate(regex(path = *TIMESTAMP_PATTERN, code = "timestamp_format"))]
    pub timestamp: Option<String>,

    #[serde(rename = "traceId")]
    pub trace_id: Option<String>,

    #[serde(rename = "spanId")]
    pub span_id: Option<String>,

    pub commit: Option<String>,

    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
}

impl LogEntryCreateRequest {
    /// Required fields in the order they are checked, keyed by wire name.
    fn required_fields(&self) -> [(&'static str, Option<&str>); 7] {
        [
            ("level", self.level.as_deref()),
            ("message", self.message.as_deref()),
            ("resourceId", self.resource_id.as_deref()),
            ("timestamp", self.timestamp.as_deref()),
            ("traceId", self.trace_id.as_deref()),
            ("spanId", self.span_id.as_deref()),
            ("commit", self.commit.as_deref()),
        ]
    }

    /// Checks the payload and reports the first rule it breaks:
    /// missing fields (in wire order), then level, then timestamp format.
    pub fn check(&self) -> Result<LogLevel, LogValidationError> {
        if let Some((name, _)) = self
            .required_fields()
            .into_iter()
            .find(|(_, value)| value.map_or(true, str::is_empty))
        {
            return Err(LogValidationError::MissingField(name));
        }

        let level = self
            .level
            .as_deref()
            .and_then(LogLevel::from_code)
            .ok_or(LogValidationError::InvalidLevel)?;

        self.validate()
            .map_err(|_| LogValidationError::InvalidTimestamp)?;

        Ok(level)
    }

    /// Validated entity carrying the given id.
    pub fn into_entity(self, id: String) -> Result<LogEntryEntity, LogValidationError> {
        let level = self.check()?;

        Ok(LogEntryEntity {
            level,
            message: self.message.unwrap_or_default(),
            resource_id: self.resource_id.unwrap_or_default(),
            timestamp: self.timestamp.unwrap_or_default(),
            trace_id: self.trace_id.unwrap_or_default(),
            span_id: self.span_id.unwrap_or_default(),
            commit: self.commit.unwrap_or_default(),
            metadata: self.metadata.unwrap_or_default(),
            id,
        })
    }
}
