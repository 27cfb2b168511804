use std::sync::Mutex;

use crate::config::{AppConfig, StorageBackend};

use super::log_entry_api_repository_trait::LogEntryApiRepository;
use super::log_entry_fs_adapter::LogEntryFsAdapter;
use super::log_entry_fs_adapter_trait::LogEntryFsAdapterTrait;
use super::log_entry_memory_adapter::LogEntryMemoryAdapter;

pub struct LogEntryRepository {
    adapter: Box<dyn LogEntryFsAdapterTrait>,
    write_lock: Mutex<()>,
}

impl LogEntryRepository {
    pub fn new(adapter: Box<dyn LogEntryFsAdapterTrait>) -> Self {
        Self {
            adapter,
            write_lock: Mutex::new(()),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        match config.storage {
            StorageBackend::File => Self::new(Box::new(LogEntryFsAdapter::new(config.log_file.clone()))),
            StorageBackend::Memory => Self::new(Box::new(LogEntryMemoryAdapter::new())),
        }
    }
}

impl LogEntryApiRepository for LogEntryRepository {
    fn fs_adapter(&self) -> &dyn LogEntryFsAdapterTrait {
        self.adapter.as_ref()
    }

    fn write_lock(&self) -> &Mutex<()> {
        &self.write_lock
    }
}
