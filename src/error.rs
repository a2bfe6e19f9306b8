//! Error types for FrameKV
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using FrameKvError
pub type Result<T> = std::result::Result<T, FrameKvError>;

/// Unified error type for FrameKV operations
#[derive(Debug, Error)]
pub enum FrameKvError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Log file not found: {}", .0.display())]
    NotFound(PathBuf),

    // -------------------------------------------------------------------------
    // Format Errors
    // -------------------------------------------------------------------------
    /// Trailing bytes at end of file that do not form a whole record
    #[error("Short read at offset {offset}: {len} trailing bytes do not form a full record")]
    ShortRead { offset: u64, len: usize },

    #[error("Format error: {0}")]
    Format(String),

    #[error("Value too large: {len} bytes (max {max})")]
    OversizedValue { len: usize, max: usize },

    // -------------------------------------------------------------------------
    // Query Errors
    // -------------------------------------------------------------------------
    #[error("Index {index} out of range (len {len})")]
    OutOfRange { index: usize, len: usize },

    #[error("Key not found: {0}")]
    KeyNotFound(u64),

    #[error("Keys not sorted: key at index {index} is smaller than its predecessor")]
    Unsorted { index: usize },

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<bincode::Error> for FrameKvError {
    fn from(err: bincode::Error) -> Self {
        FrameKvError::Serialization(err.to_string())
    }
}
