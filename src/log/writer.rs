//! Log Writer
//!
//! Appends records to the backing file. Every call is its own scoped file
//! acquisition: open in append mode, write, sync per strategy, close on drop.
//! No handle is held between calls.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::SyncStrategy;
use crate::error::Result;
use crate::record::{self, Record, RECORD_SIZE};

/// Appends encoded records to a log file
#[derive(Debug)]
pub struct LogWriter {
    /// Backing log file
    path: PathBuf,
    /// When to fsync after appending
    sync_strategy: SyncStrategy,
    /// Records appended since the last fsync
    unsynced: usize,
    /// Records appended by this writer
    records_written: u64,
}

impl LogWriter {
    /// Create a writer for `path`. The file is not touched until the first append.
    pub fn new(path: impl Into<PathBuf>, sync_strategy: SyncStrategy) -> Self {
        Self {
            path: path.into(),
            sync_strategy,
            unsynced: 0,
            records_written: 0,
        }
    }

    /// Append one record, zero-padding `value` to the slot width
    ///
    /// Grows the file by exactly one record. Oversized values are rejected
    /// before the file is opened.
    pub fn append(&mut self, key: u64, value: &[u8]) -> Result<()> {
        let bytes = record::encode(key, value)?;
        self.write_encoded(&bytes, 1)
    }

    /// Append an already padded record
    pub fn append_record(&mut self, record: &Record) -> Result<()> {
        let bytes = record::encode_record(record);
        self.write_encoded(&bytes, 1)
    }

    /// Append a batch of records with a single file acquisition
    ///
    /// All records are encoded first; one oversized value rejects the whole
    /// batch and nothing is written. Returns the number of records appended.
    pub fn append_batch<'a, I>(&mut self, records: I) -> Result<usize>
    where
        I: IntoIterator<Item = (u64, &'a [u8])>,
    {
        let mut buf = Vec::new();
        let mut count = 0;
        for (key, value) in records {
            buf.extend_from_slice(&record::encode(key, value)?);
            count += 1;
        }

        if count == 0 {
            return Ok(0);
        }

        self.write_encoded(&buf, count)?;
        Ok(count)
    }

    /// Get the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the number of records appended by this writer
    pub fn records_written(&self) -> u64 {
        self.records_written
    }

    /// Internal: open, write, sync per strategy. The handle drops on every exit path.
    fn write_encoded(&mut self, bytes: &[u8], count: usize) -> Result<()> {
        debug_assert_eq!(bytes.len(), count * RECORD_SIZE);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.write_all(bytes)?;
        self.unsynced += count;
        self.records_written += count as u64;

        self.maybe_sync(&file)?;

        debug!(
            path = %self.path.display(),
            records = count,
            bytes = bytes.len(),
            "appended records"
        );
        Ok(())
    }

    fn maybe_sync(&mut self, file: &File) -> Result<()> {
        let should_sync = match self.sync_strategy {
            SyncStrategy::OnClose => false,
            SyncStrategy::EveryWrite => true,
            SyncStrategy::EveryNEntries { count } => self.unsynced >= count,
        };

        if should_sync {
            file.sync_data()?;
            self.unsynced = 0;
        }
        Ok(())
    }
}
