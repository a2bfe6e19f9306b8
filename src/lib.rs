//! # FrameKV
//!
//! A minimal append-only key-value log for per-frame acquisition metadata:
//! - Fixed 40-byte records (u64 key + 32-byte zero-padded value)
//! - Scoped append path, one file acquisition per call
//! - Bulk load into an in-memory index with partial-tail detection
//! - Positional lookups and binary search by sequence key
//!
//! ## Architecture Overview
//!
//! ```text
//!   producer (one call per frame)        consumer (after recording)
//!                │                                  │
//!                ▼                                  ▼
//!        ┌──────────────┐                   ┌──────────────┐
//!        │  LogWriter   │                   │   LogIndex   │
//!        │  (append)    │                   │ (load/query) │
//!        └──────┬───────┘                   └──────▲───────┘
//!               │        ┌──────────────┐          │
//!               └───────►│  log file    │──────────┘
//!                        │ [40B][40B].. │
//!                        └──────────────┘
//!               both halves encode/decode through `record`
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;

pub mod log;
pub mod record;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use config::{Config, SyncStrategy};
pub use error::{FrameKvError, Result};
pub use log::{KeyValueLog, LoadReport, LoadState, LogIndex, LogWriter, RecordReader, ShortRead};
pub use record::{FrameData, Record, RECORD_SIZE, VALUE_SIZE};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of FrameKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
