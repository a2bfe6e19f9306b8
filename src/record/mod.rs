//! Record Module
//!
//! The atomic persisted unit of the log: a 64-bit key followed by a
//! fixed-width, zero-padded 32-byte value.
//!
//! ## Record Layout
//! ```text
//! ┌──────────────┬──────────────────────────────────────┐
//! │ Key (8)      │ Value (32, zero right-padded)        │
//! │ u64 LE       │ opaque payload                       │
//! └──────────────┴──────────────────────────────────────┘
//! ```
//!
//! Records are concatenated on disk with no separators.

mod codec;
pub mod frame;

pub use codec::{decode, encode, encode_record};
pub use frame::FrameData;

use crate::error::{FrameKvError, Result};

// =============================================================================
// Layout Constants
// =============================================================================

/// Size of the encoded key
pub const KEY_SIZE: usize = 8;

/// Size of the fixed value slot
pub const VALUE_SIZE: usize = 32;

/// Size of one encoded record: Key (8) + Value (32) = 40 bytes
pub const RECORD_SIZE: usize = KEY_SIZE + VALUE_SIZE;

// =============================================================================
// Record
// =============================================================================

/// A single key-value record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Record {
    /// Sequence key, usually a frame counter
    pub key: u64,

    /// Full padded value slot
    pub value: [u8; VALUE_SIZE],
}

impl Record {
    /// Build a record, zero-padding `value` to the slot width.
    ///
    /// Values longer than [`VALUE_SIZE`] are rejected rather than truncated.
    pub fn new(key: u64, value: &[u8]) -> Result<Self> {
        if value.len() > VALUE_SIZE {
            return Err(FrameKvError::OversizedValue {
                len: value.len(),
                max: VALUE_SIZE,
            });
        }

        let mut slot = [0u8; VALUE_SIZE];
        slot[..value.len()].copy_from_slice(value);

        Ok(Self { key, value: slot })
    }

    /// Build a record from an already padded value slot
    pub fn from_slot(key: u64, value: [u8; VALUE_SIZE]) -> Self {
        Self { key, value }
    }

    /// Get the padded value slot
    pub fn value(&self) -> &[u8; VALUE_SIZE] {
        &self.value
    }
}
