//! Frame descriptor payload
//!
//! The acquisition device stamps each frame with a packed 32-byte descriptor.
//! The log never interprets payloads; this type is for the producers and
//! consumers that agree on this layout.
//!
//! ## Layout (little-endian, packed)
//! ```text
//! ┌──────────────┬──────────┬─────────┬─────────┬──────────┬──────────────┐
//! │ fpga_ts (8)  │ rhythm(4)│ ttl_in  │ ttl_out │ spi_perf │ reserved (8) │
//! └──────────────┴──────────┴─────────┴─────────┴──────────┴──────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{FrameKvError, Result};

use super::VALUE_SIZE;

/// Per-frame metadata emitted by the acquisition device
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameData {
    /// FPGA clock at frame capture
    pub fpga_timestamp: u64,

    /// Rhythm (sample) clock at frame capture
    pub rhythm_timestamp: u32,

    /// TTL input line states
    pub ttl_in: u32,

    /// TTL output line states
    pub ttl_out: u32,

    /// SPI performance counter
    pub spi_perf_counter: u32,

    pub reserved: u64,
}

impl FrameData {
    /// Serialize into a full value slot
    pub fn to_payload(&self) -> Result<[u8; VALUE_SIZE]> {
        // bincode 1.x default: fixed-width integers, little-endian, no padding
        let bytes = bincode::serialize(self)?;
        if bytes.len() != VALUE_SIZE {
            return Err(FrameKvError::Serialization(format!(
                "Frame descriptor encoded to {} bytes, expected {}",
                bytes.len(),
                VALUE_SIZE
            )));
        }

        let mut slot = [0u8; VALUE_SIZE];
        slot.copy_from_slice(&bytes);
        Ok(slot)
    }

    /// Interpret the leading 32 bytes of a payload as a frame descriptor
    pub fn from_payload(payload: &[u8]) -> Result<Self> {
        if payload.len() < VALUE_SIZE {
            return Err(FrameKvError::Format(format!(
                "Frame descriptor needs {} bytes, got {}",
                VALUE_SIZE,
                payload.len()
            )));
        }
        Ok(bincode::deserialize(&payload[..VALUE_SIZE])?)
    }
}
