//! Key-Value Log
//!
//! Pairs a [`LogWriter`] and a [`LogIndex`] over the same backing file.
//!
//! The two halves share nothing but the file: appends never touch the loaded
//! index, so readers must call [`KeyValueLog::load`] again to observe new
//! records.

use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::record::{Record, VALUE_SIZE};

use super::index::{LoadReport, LoadState, LogIndex};
use super::writer::LogWriter;

/// File-backed append log with an in-memory lookup index
#[derive(Debug)]
pub struct KeyValueLog {
    /// Log configuration
    config: Config,

    /// Write path (scoped file acquisition per call)
    writer: LogWriter,

    /// Read path (rebuilt on every load)
    index: LogIndex,
}

impl KeyValueLog {
    /// Create a log handle from a config. No file I/O happens here.
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;

        let writer = LogWriter::new(config.path.clone(), config.sync_strategy);
        let index = LogIndex::with_buffer_size(config.read_buffer_size);

        Ok(Self {
            config,
            writer,
            index,
        })
    }

    /// Create a log handle for `path` with default settings
    pub fn new(path: impl AsRef<Path>) -> Self {
        let config = Config::builder().path(path.as_ref()).build();
        let writer = LogWriter::new(config.path.clone(), config.sync_strategy);
        let index = LogIndex::with_buffer_size(config.read_buffer_size);

        Self {
            config,
            writer,
            index,
        }
    }

    // =========================================================================
    // Write Path
    // =========================================================================

    /// Append one record to the backing file. Does not update the index.
    pub fn append(&mut self, key: u64, value: &[u8]) -> Result<()> {
        self.writer.append(key, value)
    }

    /// Append a batch of records in one file acquisition
    pub fn append_batch<'a, I>(&mut self, records: I) -> Result<usize>
    where
        I: IntoIterator<Item = (u64, &'a [u8])>,
    {
        self.writer.append_batch(records)
    }

    // =========================================================================
    // Read Path
    // =========================================================================

    /// Rebuild the index from the backing file
    pub fn load(&mut self) -> Result<LoadReport> {
        self.index.load(&self.config.path)
    }

    pub fn find_index(&self, key: u64) -> Option<usize> {
        self.index.find_index(key)
    }

    pub fn get_by_index(&self, index: usize) -> Result<&[u8; VALUE_SIZE]> {
        self.index.get_by_index(index)
    }

    pub fn get_by_key(&self, key: u64) -> Result<&[u8; VALUE_SIZE]> {
        self.index.get_by_key(key)
    }

    pub fn all_pairs(&self) -> &[Record] {
        self.index.all_pairs()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn state(&self) -> LoadState {
        self.index.state()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn writer(&self) -> &LogWriter {
        &self.writer
    }

    pub fn index(&self) -> &LogIndex {
        &self.index
    }
}
