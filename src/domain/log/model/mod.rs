//! Query-side domain types for log searches.

use chrono::{DateTime, Utc};

use crate::core::util::time_util::parse_instant;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 50;

/// One end of a time-range filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeBound {
    At(DateTime<Utc>),
    /// The client sent a value that is not a readable instant; nothing matches it.
    Unreadable,
}

impl TimeBound {
    pub fn parse(raw: &str) -> Self {
        parse_instant(raw).map_or(TimeBound::Unreadable, TimeBound::At)
    }
}

/// Request-scoped search criteria. All text filters are already non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFilter {
    /// Case-insensitive substring of the message.
    pub search: Option<String>,
    /// Accepted level codes.
    pub levels: Option<Vec<String>>,
    /// Case-insensitive substring of the resource id.
    pub resource_id: Option<String>,
    pub start_time: Option<TimeBound>,
    pub end_time: Option<TimeBound>,
    /// 1-based.
    pub page: usize,
    pub limit: usize,
}

impl Default for LogFilter {
    fn default() -> Self {
        Self {
            search: None,
            levels: None,
            resource_id: None,
            start_time: None,
            end_time: None,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}
