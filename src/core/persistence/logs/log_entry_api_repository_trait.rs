use std::sync::Mutex;

use anyhow::{anyhow, Result};

use super::log_entry_entity::LogEntryEntity;
use super::log_entry_fs_adapter_trait::LogEntryFsAdapterTrait;

/// API-facing repository abstraction for the log store.
///
/// Reads take no lock. Every load-modify-store cycle runs under
/// `write_lock` so two appends in the same process cannot clobber each other.
pub trait LogEntryApiRepository: Send + Sync {
    fn fs_adapter(&self) -> &dyn LogEntryFsAdapterTrait;

    fn write_lock(&self) -> &Mutex<()>;

    fn load(&self) -> Result<Vec<LogEntryEntity>> {
        self.fs_adapter().read_all()
    }

    fn append(&self, entry: LogEntryEntity) -> Result<LogEntryEntity> {
        let _guard = self
            .write_lock()
            .lock()
            .map_err(|_| anyhow!("Log store write lock poisoned"))?;

        let mut entries = self.load()?;
        entries.push(entry.clone());
        self.fs_adapter().write_all(&entries)?;

        Ok(entry)
    }

    /// Appends `batch` in one write. Returns the collection size afterwards.
    fn append_many(&self, batch: Vec<LogEntryEntity>) -> Result<usize> {
        let _guard = self
            .write_lock()
            .lock()
            .map_err(|_| anyhow!("Log store write lock poisoned"))?;

        let mut entries = self.load()?;
        entries.extend(batch);
        self.fs_adapter().write_all(&entries)?;

        Ok(entries.len())
    }
}
