use crate::core::record::ConversionRecord;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_HISTORY_FILE: &str = "history.json";

/// Conversion history kept as a pretty-printed JSON array in a flat file.
///
/// Every append rewrites the whole file. There is no locking, so concurrent
/// runs race and the last writer wins.
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all records, or `None` if the file is missing, unreadable or malformed.
    pub fn load(&self) -> Option<Vec<ConversionRecord>> {
        let res: Result<Vec<ConversionRecord>> = (|| {
            let data = fs::read_to_string(&self.path)
                .with_context(|| format!("Failed to read history file: {}", self.path.display()))?;
            let records = serde_json::from_str(&data).with_context(|| {
                format!("Failed to parse history file: {}", self.path.display())
            })?;
            Ok(records)
        })();

        match res {
            Ok(records) => Some(records),
            Err(e) => {
                debug!(error = %format!("{e:#}"), "History unavailable");
                None
            }
        }
    }

    pub fn records(&self) -> Vec<ConversionRecord> {
        self.load().unwrap_or_default()
    }

    /// Appends a record. Failures are logged and otherwise dropped.
    pub fn append(&self, record: ConversionRecord) {
        let mut records = self.records();
        records.push(record);
        if let Err(e) = self.write(&records) {
            debug!(error = %format!("{e:#}"), "History append dropped");
        }
    }

    fn write(&self, records: &[ConversionRecord]) -> Result<()> {
        let data = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, data)
            .with_context(|| format!("Failed to write history file: {}", self.path.display()))?;
        debug!(count = records.len(), "History saved");
        Ok(())
    }
}
