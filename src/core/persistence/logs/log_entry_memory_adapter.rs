use std::sync::RwLock;

use anyhow::{anyhow, Result};

use super::log_entry_entity::LogEntryEntity;
use super::log_entry_fs_adapter_trait::LogEntryFsAdapterTrait;

/// Process-local store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct LogEntryMemoryAdapter {
    entries: RwLock<Vec<LogEntryEntity>>,
}

impl LogEntryMemoryAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<LogEntryEntity>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }
}

impl LogEntryFsAdapterTrait for LogEntryMemoryAdapter {
    fn read_all(&self) -> Result<Vec<LogEntryEntity>> {
        let guard = self
            .entries
            .read()
            .map_err(|_| anyhow!("In-memory log store lock poisoned"))?;
        Ok(guard.clone())
    }

    fn write_all(&self, entries: &[LogEntryEntity]) -> Result<()> {
        let mut guard = self
            .entries
            .write()
            .map_err(|_| anyhow!("In-memory log store lock poisoned"))?;
        *guard = entries.to_vec();
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
