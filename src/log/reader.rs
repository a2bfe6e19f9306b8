//! Record Reader
//!
//! Streams records from a log in 40-byte chunks.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::error::{FrameKvError, Result};
use crate::record::{self, Record, RECORD_SIZE};

/// Reads records sequentially from a byte source
pub struct RecordReader<R: Read> {
    inner: BufReader<R>,
    /// Byte offset of the next record
    offset: u64,
}

impl RecordReader<File> {
    /// Open a log file for reading
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self::from_reader(open_log(path)?))
    }
}

impl<R: Read> RecordReader<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            inner: BufReader::new(reader),
            offset: 0,
        }
    }

    /// Wrap a reader with a specific buffer size
    pub fn with_capacity(capacity: usize, reader: R) -> Self {
        Self {
            inner: BufReader::with_capacity(capacity, reader),
            offset: 0,
        }
    }

    /// Read the next record
    ///
    /// Returns:
    /// - `Ok(Some(record))` — a full record was read
    /// - `Ok(None)` — clean end of stream
    /// - `Err(ShortRead)` — 1..39 trailing bytes; they are consumed and discarded
    pub fn next_record(&mut self) -> Result<Option<Record>> {
        let mut buf = [0u8; RECORD_SIZE];
        let n = self.fill(&mut buf)?;

        match n {
            0 => Ok(None),
            RECORD_SIZE => {
                self.offset += RECORD_SIZE as u64;
                record::decode(&buf).map(Some)
            }
            len => {
                let offset = self.offset;
                self.offset += len as u64;
                Err(FrameKvError::ShortRead { offset, len })
            }
        }
    }

    /// Byte offset of the next unread record
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Iterate over all records; iteration ends after the first error
    pub fn records(self) -> RecordIter<R> {
        RecordIter {
            reader: self,
            done: false,
        }
    }

    /// Internal: read until `buf` is full or the stream ends
    fn fill(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(filled)
    }
}

/// Iterator over log records
pub struct RecordIter<R: Read> {
    reader: RecordReader<R>,
    done: bool,
}

impl<R: Read> Iterator for RecordIter<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.reader.next_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Open a log file, mapping a missing path to `NotFound`
pub(crate) fn open_log(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => FrameKvError::NotFound(path.to_path_buf()),
        _ => FrameKvError::Io(e),
    })
}
