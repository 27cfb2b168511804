use anyhow::Result;

use super::log_entry_entity::LogEntryEntity;

/// Whole-collection access to the log store.
///
/// Adapters never read or write part of the collection: `read_all` returns
/// every entry and `write_all` replaces the stored array.
pub trait LogEntryFsAdapterTrait: Send + Sync {
    /// Every stored entry in insertion order. An absent store is empty.
    fn read_all(&self) -> Result<Vec<LogEntryEntity>>;

    /// Replace the stored collection.
    fn write_all(&self, entries: &[LogEntryEntity]) -> Result<()>;

    /// Human-readable location of the store, used in startup logs.
    fn location(&self) -> String;
}
