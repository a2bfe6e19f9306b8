//! Log Index
//!
//! In-memory view of a loaded log: every record in on-disk order, with
//! positional access and binary search by key.
//!
//! The index is a cache rebuilt from scratch on every load. It is never
//! re-sorted; keyed lookups are only correct when the log was written with
//! non-decreasing keys. That order is the caller's responsibility and is not
//! verified on load (see [`LogIndex::check_sorted`] for an explicit check).

use std::cmp::Ordering;
use std::io::Read;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{FrameKvError, Result};
use crate::record::{Record, VALUE_SIZE};

use super::reader::{open_log, RecordReader};

/// Default buffer size for loads
const DEFAULT_READ_BUFFER: usize = 64 * 1024;

/// Whether the index currently reflects a load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// No successful load since construction or the last clear
    #[default]
    Empty,

    /// Populated by the most recent load
    Loaded,
}

/// Partial record discarded at the end of a load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortRead {
    /// Byte offset where the partial record starts
    pub offset: u64,

    /// Number of trailing bytes discarded
    pub len: usize,
}

/// Result of a load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of complete records loaded
    pub records_loaded: usize,

    /// Set when the file ended with a partial record
    pub short_read: Option<ShortRead>,
}

/// Ordered in-memory sequence of loaded records
#[derive(Debug)]
pub struct LogIndex {
    records: Vec<Record>,
    state: LoadState,
    read_buffer_size: usize,
}

impl LogIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::with_buffer_size(DEFAULT_READ_BUFFER)
    }

    /// Create an empty index that loads through a buffer of `size` bytes
    pub fn with_buffer_size(size: usize) -> Self {
        Self {
            records: Vec::new(),
            state: LoadState::Empty,
            read_buffer_size: size.max(1),
        }
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Replace the index with the contents of the log at `path`
    ///
    /// Fails with `NotFound` if the path does not exist. A partial trailing
    /// record is discarded and reported in the returned [`LoadReport`].
    pub fn load(&mut self, path: &Path) -> Result<LoadReport> {
        self.clear();
        let file = open_log(path)?;
        let report = self.load_from(file)?;

        info!(
            path = %path.display(),
            records = report.records_loaded,
            "loaded log"
        );
        Ok(report)
    }

    /// Replace the index with records read from any byte source
    ///
    /// On error the index is left Empty.
    pub fn load_from<R: Read>(&mut self, source: R) -> Result<LoadReport> {
        self.clear();

        let mut reader = RecordReader::with_capacity(self.read_buffer_size, source);
        let mut records = Vec::new();
        let mut short_read = None;

        loop {
            match reader.next_record() {
                Ok(Some(record)) => records.push(record),
                Ok(None) => break,
                Err(FrameKvError::ShortRead { offset, len }) => {
                    warn!(offset, len, "discarding partial record at end of log");
                    short_read = Some(ShortRead { offset, len });
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        self.records = records;
        self.state = LoadState::Loaded;

        Ok(LoadReport {
            records_loaded: self.records.len(),
            short_read,
        })
    }

    /// Drop all records and return to the Empty state
    pub fn clear(&mut self) {
        self.records.clear();
        self.state = LoadState::Empty;
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Binary search for `key`, assuming keys are sorted ascending
    ///
    /// With duplicate keys any matching index may be returned. Results are
    /// unspecified if the loaded sequence is not sorted.
    pub fn find_index(&self, key: u64) -> Option<usize> {
        let mut left = 0;
        let mut right = self.records.len();

        while left < right {
            let mid = left + (right - left) / 2;
            match self.records[mid].key.cmp(&key) {
                Ordering::Equal => return Some(mid),
                Ordering::Less => left = mid + 1,
                Ordering::Greater => right = mid,
            }
        }

        None
    }

    /// Get the value at a position in load order
    pub fn get_by_index(&self, index: usize) -> Result<&[u8; VALUE_SIZE]> {
        self.records
            .get(index)
            .map(|record| &record.value)
            .ok_or_else(|| FrameKvError::OutOfRange {
                index,
                len: self.records.len(),
            })
    }

    /// Get the value for a key
    pub fn get_by_key(&self, key: u64) -> Result<&[u8; VALUE_SIZE]> {
        let index = self.find_index(key).ok_or(FrameKvError::KeyNotFound(key))?;
        self.get_by_index(index)
    }

    /// All loaded records in on-disk order
    pub fn all_pairs(&self) -> &[Record] {
        &self.records
    }

    /// Verify that keys are non-decreasing
    ///
    /// Returns `Unsorted` naming the first record whose key is smaller than
    /// the one before it.
    pub fn check_sorted(&self) -> Result<()> {
        match self.records.windows(2).position(|w| w[1].key < w[0].key) {
            Some(pos) => Err(FrameKvError::Unsorted { index: pos + 1 }),
            None => Ok(()),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn state(&self) -> LoadState {
        self.state
    }
}

impl Default for LogIndex {
    fn default() -> Self {
        Self::new()
    }
}
