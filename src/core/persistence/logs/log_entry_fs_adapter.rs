use std::{
    fs::{self, File},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::log_entry_entity::LogEntryEntity;
use super::log_entry_fs_adapter_trait::LogEntryFsAdapterTrait;

/// FS adapter for the JSON log store.
///
/// The whole collection lives in one pretty-printed JSON array. Writes go
/// to a sibling temp file first and are renamed over the store.
#[derive(Debug, Clone)]
pub struct LogEntryFsAdapter {
    path: PathBuf,
}

impl LogEntryFsAdapter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

impl LogEntryFsAdapterTrait for LogEntryFsAdapter {
    fn read_all(&self) -> Result<Vec<LogEntryEntity>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read log store {:?}", self.path))
            }
        };

        serde_json::from_str(&raw)
            .with_context(|| format!("Log store {:?} is not a valid JSON array of entries", self.path))
    }

    fn write_all(&self, entries: &[LogEntryEntity]) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir).context("Failed to create log store directory")?;
            }
        }

        let body = serde_json::to_string_pretty(entries).context("Failed to encode log entries")?;

        let tmp_path = self.tmp_path();
        let mut f = File::create(&tmp_path).context("Failed to create temp log store file")?;
        f.write_all(body.as_bytes())?;
        f.flush()?;
        f.sync_all().context("Failed to sync temp log store file")?;

        fs::rename(&tmp_path, &self.path).context("Failed to finalize log store file")?;

        tracing::debug!("Wrote {} log entries to {:?}", entries.len(), self.path);
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
