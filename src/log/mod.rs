//! Key-Value Log Module
//!
//! Append-only file of fixed-size records plus an in-memory index for lookups.
//!
//! ## Responsibilities
//! - Append records in arrival order, one scoped file acquisition per call
//! - Bulk-load the whole file into an ordered in-memory sequence
//! - Detect and report a partial trailing record without losing earlier ones
//! - Positional and keyed (binary search) queries over the loaded sequence
//!
//! ## File Format
//! ```text
//! ┌──────────────────────────────┐
//! │ Record 0                     │
//! │ ┌─────────┬────────────────┐ │
//! │ │ Key (8) │ Value (32)     │ │
//! │ └─────────┴────────────────┘ │
//! ├──────────────────────────────┤
//! │ Record 1                     │
//! │ ┌─────────┬────────────────┐ │
//! │ │ Key (8) │ Value (32)     │ │
//! │ └─────────┴────────────────┘ │
//! └──────────────────────────────┘
//! ```
//! No header, footer, or separators.

mod index;
mod reader;
mod store;
mod writer;

pub use index::{LoadReport, LoadState, LogIndex, ShortRead};
pub use reader::{RecordIter, RecordReader};
pub use store::KeyValueLog;
pub use writer::LogWriter;
