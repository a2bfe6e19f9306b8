//! Configuration for FrameKV
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{FrameKvError, Result};

/// Main configuration for a FrameKV log
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Backing log file. A flat run of 40-byte records, no header or footer.
    pub path: PathBuf,

    // -------------------------------------------------------------------------
    // Write Configuration
    // -------------------------------------------------------------------------
    /// Sync strategy: how often appends fsync the log
    pub sync_strategy: SyncStrategy,

    // -------------------------------------------------------------------------
    // Read Configuration
    // -------------------------------------------------------------------------
    /// Buffer size used when loading the log (in bytes)
    pub read_buffer_size: usize,
}

/// Append sync strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStrategy {
    /// No explicit fsync; data reaches disk when the OS flushes it after close
    OnClose,

    /// fsync after every append call (safest, slowest)
    EveryWrite,

    /// fsync once `count` records have been appended since the last sync
    EveryNEntries { count: usize },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./frames.bin"),
            sync_strategy: SyncStrategy::OnClose,
            read_buffer_size: 64 * 1024, // 64 KB
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Reject values that would make the log unusable
    pub fn validate(&self) -> Result<()> {
        if self.read_buffer_size == 0 {
            return Err(FrameKvError::Config(
                "read_buffer_size must be greater than zero".to_string(),
            ));
        }
        if let SyncStrategy::EveryNEntries { count: 0 } = self.sync_strategy {
            return Err(FrameKvError::Config(
                "EveryNEntries sync count must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the backing log file
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.path = path.into();
        self
    }

    /// Set the append sync strategy
    pub fn sync_strategy(mut self, strategy: SyncStrategy) -> Self {
        self.config.sync_strategy = strategy;
        self
    }

    /// Set the load buffer size (in bytes)
    pub fn read_buffer_size(mut self, size: usize) -> Self {
        self.config.read_buffer_size = size;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
