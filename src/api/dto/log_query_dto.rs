//! Log list query parameters

use serde::Deserialize;

use crate::domain::log::model::{LogFilter, TimeBound, DEFAULT_LIMIT, DEFAULT_PAGE};

/// Raw `GET /api/logs` query string. Everything arrives as text so a bad
/// `page` or `limit` falls back to its default instead of rejecting the request.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct LogQuery {
    pub search: Option<String>,
    /// Comma-separated level codes, e.g. `error,warn`.
    pub level: Option<String>,
    pub resource_id: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl LogQuery {
    /// Builds the query from raw key/value pairs. A repeated key keeps its
    /// first value; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut q = LogQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "search" => &mut q.search,
                "level" => &mut q.level,
                "resourceId" => &mut q.resource_id,
                "startTime" => &mut q.start_time,
                "endTime" => &mut q.end_time,
                "page" => &mut q.page,
                "limit" => &mut q.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        q
    }
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.is_empty())
}

fn positive_or(v: Option<&str>, default: usize) -> usize {
    v.and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(default)
}

impl From<LogQuery> for LogFilter {
    fn from(q: LogQuery) -> Self {
        let levels = non_empty(q.level).map(|raw| {
            raw.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
        });

        LogFilter {
            search: non_empty(q.search),
            levels,
            resource_id: non_empty(q.resource_id),
            start_time: non_empty(q.start_time).map(|s| TimeBound::parse(&s)),
            end_time: non_empty(q.end_time).map(|s| TimeBound::parse(&s)),
            page: positive_or(q.page.as_deref(), DEFAULT_PAGE),
            limit: positive_or(q.limit.as_deref(), DEFAULT_LIMIT),
        }
    }
}
