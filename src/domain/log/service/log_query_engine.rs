//! Filter, sort and page a loaded log collection.

use std::cmp::Reverse;
use std::collections::HashSet;

use crate::api::dto::paginated_response::{PaginatedLogResponse, PaginationMeta};
use crate::core::persistence::logs::log_entry_entity::LogEntryEntity;
use crate::domain::log::model::{LogFilter, TimeBound};

fn within_start(entry: &LogEntryEntity, bound: TimeBound) -> bool {
    match (bound, entry.instant()) {
        (TimeBound::At(start), Some(ts)) => ts >= start,
        _ => false,
    }
}

fn within_end(entry: &LogEntryEntity, bound: TimeBound) -> bool {
    match (bound, entry.instant()) {
        (TimeBound::At(end), Some(ts)) => ts <= end,
        _ => false,
    }
}

/// Conjunction of every criterion present in `filter`.
pub fn apply_filters(entries: Vec<LogEntryEntity>, filter: &LogFilter) -> Vec<LogEntryEntity> {
    let search = filter.search.as_ref().map(|s| s.to_lowercase());
    let resource = filter.resource_id.as_ref().map(|s| s.to_lowercase());

    entries
        .into_iter()
        .filter(|e| match &search {
            Some(needle) => e.message.to_lowercase().contains(needle.as_str()),
            None => true,
        })
        .filter(|e| match &filter.levels {
            Some(levels) => levels.iter().any(|l| l == e.level.as_code()),
            None => true,
        })
        .filter(|e| match &resource {
            Some(needle) => e.resource_id.to_lowercase().contains(needle.as_str()),
            None => true,
        })
        .filter(|e| filter.start_time.map_or(true, |b| within_start(e, b)))
        .filter(|e| filter.end_time.map_or(true, |b| within_end(e, b)))
        .collect()
}

/// Newest first. Equal timestamps keep their stored order; unreadable
/// timestamps go last.
pub fn sort_newest_first(entries: &mut [LogEntryEntity]) {
    entries.sort_by_cached_key(|e| Reverse(e.instant()));
}

pub fn paginate(
    entries: Vec<LogEntryEntity>,
    page: usize,
    limit: usize,
) -> PaginatedLogResponse<LogEntryEntity> {
    let page = page.max(1);
    let limit = limit.max(1);
    let total = entries.len();
    let offset = page.saturating_sub(1).saturating_mul(limit);

    let logs = entries.into_iter().skip(offset).take(limit).collect();

    PaginatedLogResponse {
        logs,
        pagination: PaginationMeta {
            page,
            limit,
            total,
            total_pages: total.div_ceil(limit),
        },
    }
}

pub fn run_query(
    entries: Vec<LogEntryEntity>,
    filter: &LogFilter,
) -> PaginatedLogResponse<LogEntryEntity> {
    let mut matched = apply_filters(entries, filter);
    sort_newest_first(&mut matched);
    paginate(matched, filter.page, filter.limit)
}

/// Distinct values of `key` in first-seen order.
pub fn distinct_in_order<'a, F>(entries: &'a [LogEntryEntity], key: F) -> Vec<String>
where
    F: Fn(&'a LogEntryEntity) -> &'a str,
{
    let mut seen = HashSet::new();
    entries
        .iter()
        .map(key)
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}
