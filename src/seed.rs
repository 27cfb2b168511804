use anyhow::Result;
use tracing::{info, warn};

use crate::config::{AppConfig, StorageBackend};
use crate::core::persistence::logs::log_entry_repository::LogEntryRepository;
use crate::domain::log::service::sample_data_service::{seed_sample_entries, SampleSeedSummary};

/// Runs only when LOGDESK_SEED_SAMPLE_DATA is set. The in-memory backend is
/// never seeded; `None` means nothing was written.
pub fn run_seed(config: &AppConfig) -> Result<Option<SampleSeedSummary>> {
    if config.storage == StorageBackend::Memory {
        warn!("⚠️ LOGDESK_SEED_SAMPLE_DATA ignored: LOGDESK_STORAGE=memory keeps nothing after exit");
        return Ok(None);
    }

    info!("🌱 Seeding sample log entries...");

    let repo = LogEntryRepository::from_config(config);
    let summary = seed_sample_entries(&repo)?;

    info!("✅ Added {} sample log entries", summary.added);
    info!("📁 Log file location: {}", summary.location);
    info!("📊 Total logs: {}", summary.total);
    Ok(Some(summary))
}
