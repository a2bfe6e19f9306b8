//! Tests for LogWriter
//!
//! These tests verify:
//! - Append grows the file by exactly one record
//! - Appends accumulate without rewriting earlier bytes
//! - Oversized values never reach the file
//! - Batch appends are all-or-nothing
//! - Sync strategies do not change file contents

use std::fs;
use std::path::PathBuf;

use framekv::config::SyncStrategy;
use framekv::record::{self, Record, RECORD_SIZE};
use framekv::{FrameKvError, LogWriter};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_log() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("frames.bin");
    (temp_dir, path)
}

fn file_len(path: &PathBuf) -> u64 {
    fs::metadata(path).unwrap().len()
}

// =============================================================================
// Basic Append Tests
// =============================================================================

#[test]
fn test_writer_does_not_create_file_until_append() {
    let (_temp, path) = setup_temp_log();
    let _writer = LogWriter::new(&path, SyncStrategy::OnClose);
    assert!(!path.exists());
}

#[test]
fn test_append_creates_file() {
    let (_temp, path) = setup_temp_log();
    let mut writer = LogWriter::new(&path, SyncStrategy::OnClose);

    writer.append(1, b"A").unwrap();

    assert!(path.exists());
    assert_eq!(file_len(&path), RECORD_SIZE as u64);
}

#[test]
fn test_append_grows_by_record_size() {
    let (_temp, path) = setup_temp_log();
    let mut writer = LogWriter::new(&path, SyncStrategy::OnClose);

    for i in 0..25u64 {
        writer.append(i, &i.to_le_bytes()).unwrap();
    }

    assert_eq!(file_len(&path), 25 * RECORD_SIZE as u64);
    assert_eq!(writer.records_written(), 25);
}

#[test]
fn test_append_preserves_existing_bytes() {
    let (_temp, path) = setup_temp_log();
    let mut writer = LogWriter::new(&path, SyncStrategy::OnClose);

    writer.append(1, b"first").unwrap();
    let before = fs::read(&path).unwrap();

    writer.append(2, b"second").unwrap();
    let after = fs::read(&path).unwrap();

    assert_eq!(&after[..RECORD_SIZE], &before[..]);
    assert_eq!(&after[RECORD_SIZE..], &record::encode(2, b"second").unwrap());
}

#[test]
fn test_append_to_existing_file_from_new_writer() {
    let (_temp, path) = setup_temp_log();

    LogWriter::new(&path, SyncStrategy::OnClose).append(1, b"a").unwrap();
    LogWriter::new(&path, SyncStrategy::OnClose).append(2, b"b").unwrap();

    assert_eq!(file_len(&path), 2 * RECORD_SIZE as u64);
}

#[test]
fn test_append_record() {
    let (_temp, path) = setup_temp_log();
    let mut writer = LogWriter::new(&path, SyncStrategy::OnClose);

    let rec = Record::new(11, b"payload").unwrap();
    writer.append_record(&rec).unwrap();

    assert_eq!(fs::read(&path).unwrap(), record::encode_record(&rec).to_vec());
}

// =============================================================================
// Rejection Tests
// =============================================================================

#[test]
fn test_oversized_value_writes_nothing() {
    let (_temp, path) = setup_temp_log();
    let mut writer = LogWriter::new(&path, SyncStrategy::OnClose);

    let err = writer.append(1, &[0u8; 64]).unwrap_err();

    assert!(matches!(err, FrameKvError::OversizedValue { len: 64, max: 32 }));
    assert!(!path.exists());
    assert_eq!(writer.records_written(), 0);
}

#[test]
fn test_append_to_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("frames.bin");
    let mut writer = LogWriter::new(&path, SyncStrategy::OnClose);

    let err = writer.append(1, b"x").unwrap_err();
    assert!(matches!(err, FrameKvError::Io(_)));
}

// =============================================================================
// Batch Tests
// =============================================================================

#[test]
fn test_append_batch_writes_all() {
    let (_temp, path) = setup_temp_log();
    let mut writer = LogWriter::new(&path, SyncStrategy::OnClose);

    let batch: Vec<(u64, &[u8])> = vec![(1, &b"a"[..]), (2, &b"b"[..]), (3, &b"c"[..])];
    let written = writer.append_batch(batch).unwrap();

    assert_eq!(written, 3);
    assert_eq!(file_len(&path), 3 * RECORD_SIZE as u64);
    assert_eq!(writer.records_written(), 3);
}

#[test]
fn test_append_batch_rejects_whole_batch() {
    let (_temp, path) = setup_temp_log();
    let mut writer = LogWriter::new(&path, SyncStrategy::OnClose);

    let big = [0u8; 40];
    let batch: Vec<(u64, &[u8])> = vec![(1, &b"a"[..]), (2, &big[..]), (3, &b"c"[..])];
    let err = writer.append_batch(batch).unwrap_err();

    assert!(matches!(err, FrameKvError::OversizedValue { .. }));
    assert!(!path.exists());
}

#[test]
fn test_append_empty_batch() {
    let (_temp, path) = setup_temp_log();
    let mut writer = LogWriter::new(&path, SyncStrategy::OnClose);

    let written = writer.append_batch(Vec::<(u64, &[u8])>::new()).unwrap();

    assert_eq!(written, 0);
    assert!(!path.exists());
}

// =============================================================================
// Sync Strategy Tests
// =============================================================================

#[test]
fn test_sync_strategies_produce_identical_files() {
    let temp_dir = TempDir::new().unwrap();
    let strategies = [
        SyncStrategy::OnClose,
        SyncStrategy::EveryWrite,
        SyncStrategy::EveryNEntries { count: 3 },
    ];

    let mut contents = Vec::new();
    for (i, strategy) in strategies.iter().enumerate() {
        let path = temp_dir.path().join(format!("log{}.bin", i));
        let mut writer = LogWriter::new(&path, *strategy);
        for key in 0..10u64 {
            writer.append(key, b"frame").unwrap();
        }
        contents.push(fs::read(&path).unwrap());
    }

    assert_eq!(contents[0], contents[1]);
    assert_eq!(contents[1], contents[2]);
}
