//! Record codec
//!
//! Fixed-layout encoding and decoding of a single record.

use crate::error::{FrameKvError, Result};

use super::{Record, KEY_SIZE, RECORD_SIZE, VALUE_SIZE};

/// Encode a key and an unpadded value into one record
///
/// Format: key (8, little-endian) + value right-padded with zeros to 32 bytes.
/// Fails with `OversizedValue` before producing any bytes if `value` does not fit.
pub fn encode(key: u64, value: &[u8]) -> Result<[u8; RECORD_SIZE]> {
    let record = Record::new(key, value)?;
    Ok(encode_record(&record))
}

/// Encode an already padded record
pub fn encode_record(record: &Record) -> [u8; RECORD_SIZE] {
    let mut buf = [0u8; RECORD_SIZE];
    buf[..KEY_SIZE].copy_from_slice(&record.key.to_le_bytes());
    buf[KEY_SIZE..].copy_from_slice(&record.value);
    buf
}

/// Decode a record from bytes
///
/// Reads the first 40 bytes. The value is returned verbatim, padding included.
pub fn decode(bytes: &[u8]) -> Result<Record> {
    if bytes.len() < RECORD_SIZE {
        return Err(FrameKvError::Format(format!(
            "Incomplete record: expected {} bytes, got {}",
            RECORD_SIZE,
            bytes.len()
        )));
    }

    let mut key_bytes = [0u8; KEY_SIZE];
    key_bytes.copy_from_slice(&bytes[..KEY_SIZE]);

    let mut value = [0u8; VALUE_SIZE];
    value.copy_from_slice(&bytes[KEY_SIZE..RECORD_SIZE]);

    Ok(Record::from_slot(u64::from_le_bytes(key_bytes), value))
}
