//! Conversion history storage
//!
//! The converter never touches storage itself; callers hand records to a
//! `HistoryStore`. Two stores are provided: an in-memory list and an
//! append-only JSON-lines file.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::debug;

use super::errors::ConversionResult;
use super::record::ConversionRecord;

/// Durable ordered log of conversion records
pub trait HistoryStore {
    /// Append a record to the log
    fn append(&mut self, record: ConversionRecord) -> ConversionResult<()>;

    /// All records, newest first
    fn records(&self) -> ConversionResult<Vec<ConversionRecord>>;

    /// Remove every record
    fn clear(&mut self) -> ConversionResult<()>;
}

/// Order records newest first; on equal timestamps the later append wins
fn newest_first(mut records: Vec<ConversionRecord>) -> Vec<ConversionRecord> {
    records.reverse();
    records.sort_by(|a, b| b.timestamp_millis.cmp(&a.timestamp_millis));
    records
}

/// History kept in memory for the lifetime of the store
#[derive(Debug, Default)]
pub struct MemoryHistory {
    records: Vec<ConversionRecord>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        MemoryHistory::default()
    }
}

impl HistoryStore for MemoryHistory {
    fn append(&mut self, record: ConversionRecord) -> ConversionResult<()> {
        self.records.push(record);
        Ok(())
    }

    fn records(&self) -> ConversionResult<Vec<ConversionRecord>> {
        Ok(newest_first(self.records.clone()))
    }

    fn clear(&mut self) -> ConversionResult<()> {
        self.records.clear();
        Ok(())
    }
}

/// History persisted as one JSON object per line
#[derive(Debug, Clone)]
pub struct JsonLinesHistory {
    path: PathBuf,
}

impl JsonLinesHistory {
    /// Open a history file; it is created on first append
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        JsonLinesHistory {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl HistoryStore for JsonLinesHistory {
    fn append(&mut self, record: ConversionRecord) -> ConversionResult<()> {
        let line = serde_json::to_string(&record)?;
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        writeln!(file, "{}", line)?;
        debug!("Appended history record to {}", self.path.display());
        Ok(())
    }

    fn records(&self) -> ConversionResult<Vec<ConversionRecord>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let records = content.lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str::<ConversionRecord>(line))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(newest_first(records))
    }

    fn clear(&mut self) -> ConversionResult<()> {
        File::create(&self.path)?;
        debug!("Cleared history file {}", self.path.display());
        Ok(())
    }
}
