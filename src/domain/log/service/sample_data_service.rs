use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::core::persistence::logs::log_entry_api_repository_trait::LogEntryApiRepository;
use crate::core::persistence::logs::log_entry_entity::LogEntryEntity;
use crate::core::persistence::logs::log_level::LogLevel;
use crate::core::util::id_util::sample_log_id;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleSeedSummary {
    pub added: usize,
    pub total: usize,
    pub location: String,
}

struct SampleLog {
    level: LogLevel,
    message: &'static str,
    resource_id: &'static str,
    timestamp: &'static str,
    trace_id: &'static str,
    span_id: &'static str,
    commit: &'static str,
    /// JSON object literal.
    metadata: &'static str,
}

const SAMPLE_LOGS: [SampleLog; 8] = [
    SampleLog {
        level: LogLevel::Error,
        message: "Database connection failed: Connection timeout after 30 seconds",
        resource_id: "web-server-01",
        timestamp: "2023-09-15T08:00:00Z",
        trace_id: "trace-abc-123",
        span_id: "span-456",
        commit: "5e5342f",
        metadata: r#"{ "retryCount": 3, "timeout": 30000 }"#,
    },
    SampleLog {
        level: LogLevel::Warn,
        message: "High memory usage detected: 85% of available memory in use",
        resource_id: "api-server-02",
        timestamp: "2023-09-15T08:15:30Z",
        trace_id: "trace-def-456",
        span_id: "span-789",
        commit: "7a8b9c1",
        metadata: r#"{ "memoryUsage": "85%", "threshold": "80%" }"#,
    },
    SampleLog {
        level: LogLevel::Info,
        message: "User authentication successful for user: john.doe@example.com",
        resource_id: "auth-service-01",
        timestamp: "2023-09-15T08:30:45Z",
        trace_id: "trace-ghi-789",
        span_id: "span-012",
        commit: "3f4e5d6",
        metadata: r#"{ "userId": "12345", "method": "oauth2" }"#,
    },
    SampleLog {
        level: LogLevel::Debug,
        message: "Processing request: GET /api/users/12345",
        resource_id: "api-gateway-01",
        timestamp: "2023-09-15T08:45:12Z",
        trace_id: "trace-jkl-012",
        span_id: "span-345",
        commit: "9a1b2c3",
        metadata: r#"{ "method": "GET", "path": "/api/users/12345", "duration": "45ms" }"#,
    },
    SampleLog {
        level: LogLevel::Error,
        message: "Payment processing failed: Invalid credit card number",
        resource_id: "payment-service-01",
        timestamp: "2023-09-15T09:00:00Z",
        trace_id: "trace-mno-345",
        span_id: "span-678",
        commit: "4d5e6f7",
        metadata: r#"{ "errorCode": "INVALID_CARD", "amount": 99.99 }"#,
    },
    SampleLog {
        level: LogLevel::Info,
        message: "Email notification sent successfully to: admin@company.com",
        resource_id: "notification-service-01",
        timestamp: "2023-09-15T09:15:22Z",
        trace_id: "trace-pqr-678",
        span_id: "span-901",
        commit: "8g9h0i1",
        metadata: r#"{ "recipient": "admin@company.com", "template": "alert" }"#,
    },
    SampleLog {
        level: LogLevel::Warn,
        message: "Slow query detected: SELECT * FROM users WHERE email LIKE %@% took 2.5s",
        resource_id: "database-server-01",
        timestamp: "2023-09-15T09:30:15Z",
        trace_id: "trace-stu-901",
        span_id: "span-234",
        commit: "2j3k4l5",
        metadata: r#"{ "queryTime": "2.5s", "threshold": "1s", "table": "users" }"#,
    },
    SampleLog {
        level: LogLevel::Debug,
        message: "Cache miss for key: user_profile_12345, fetching from database",
        resource_id: "cache-server-01",
        timestamp: "2023-09-15T09:45:33Z",
        trace_id: "trace-vwx-234",
        span_id: "span-567",
        commit: "6m7n8o9",
        metadata: r#"{ "cacheKey": "user_profile_12345", "ttl": 3600 }"#,
    },
];

pub fn sample_entries() -> Result<Vec<LogEntryEntity>> {
    SAMPLE_LOGS
        .iter()
        .enumerate()
        .map(|(index, s)| {
            let metadata: Map<String, Value> = serde_json::from_str(s.metadata)
                .with_context(|| format!("Sample entry {index} has invalid metadata"))?;

            Ok(LogEntryEntity {
                level: s.level,
                message: s.message.to_string(),
                resource_id: s.resource_id.to_string(),
                timestamp: s.timestamp.to_string(),
                trace_id: s.trace_id.to_string(),
                span_id: s.span_id.to_string(),
                commit: s.commit.to_string(),
                metadata,
                id: sample_log_id(index),
            })
        })
        .collect()
}

/// Appends the bundled sample entries after whatever is already stored.
pub fn seed_sample_entries<R: LogEntryApiRepository>(repo: &R) -> Result<SampleSeedSummary> {
    let batch = sample_entries()?;
    let added = batch.len();
    let total = repo.append_many(batch)?;

    Ok(SampleSeedSummary {
        added,
        total,
        location: repo.fs_adapter().location(),
    })
}
