use anyhow::Result;
use tracing::{debug, info};

use crate::api::dto::log_dto::LogEntryCreatedResponse;
use crate::api::dto::paginated_response::PaginatedLogResponse;
use crate::core::persistence::logs::log_entry_api_repository_trait::LogEntryApiRepository;
use crate::core::persistence::logs::log_entry_entity::LogEntryEntity;
use crate::core::util::id_util::generate_log_id;
use crate::domain::log::dto::log_entry_create_request::LogEntryCreateRequest;
use crate::domain::log::model::LogFilter;

use super::log_query_engine::{distinct_in_order, run_query};

/// Log use cases over an injected repository. Every call loads the
/// collection fresh; nothing is cached between requests.
pub struct LogEntryService<R: LogEntryApiRepository> {
    repo: R,
}

impl<R: LogEntryApiRepository> LogEntryService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub async fn create_log_entry(&self, req: LogEntryCreateRequest) -> Result<LogEntryCreatedResponse> {
        let entity = req.into_entity(generate_log_id())?;
        let stored = self.repo.append(entity)?;

        info!(
            id = %stored.id,
            entry_level = %stored.level,
            resource_id = %stored.resource_id,
            "Log entry created"
        );

        Ok(LogEntryCreatedResponse {
            message: "Log entry created successfully".to_string(),
            id: stored.id,
        })
    }

    pub async fn query_log_entries(&self, filter: LogFilter) -> Result<PaginatedLogResponse<LogEntryEntity>> {
        let entries = self.repo.load()?;
        debug!(?filter, loaded = entries.len(), "Querying log entries");
        Ok(run_query(entries, &filter))
    }

    /// Levels present anywhere in the store, ignoring any search filter.
    pub async fn list_levels(&self) -> Result<Vec<String>> {
        let entries = self.repo.load()?;
        Ok(distinct_in_order(&entries, |e| e.level.as_code()))
    }

    /// Resource ids present anywhere in the store, ignoring any search filter.
    pub async fn list_resources(&self) -> Result<Vec<String>> {
        let entries = self.repo.load()?;
        Ok(distinct_in_order(&entries, |e| e.resource_id.as_str()))
    }
}
