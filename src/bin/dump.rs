//! FrameKV Dump Tool
//!
//! Lists every record of a frame log and looks up one key.

use std::path::PathBuf;

use clap::Parser;
use framekv::{FrameData, KeyValueLog};
use tracing_subscriber::{fmt, EnvFilter};

/// FrameKV dump
#[derive(Parser, Debug)]
#[command(name = "framekv-dump")]
#[command(about = "List the records of a frame metadata log")]
#[command(version)]
struct Args {
    /// Log file to read
    filename: PathBuf,

    /// Frame key to look up after the listing
    search_key: u64,
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,framekv=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!("FrameKV dump v{}", framekv::VERSION);

    let mut log = KeyValueLog::new(&args.filename);
    if let Err(e) = log.load() {
        tracing::error!("Failed to load {}: {}", args.filename.display(), e);
        std::process::exit(1);
    }

    for (index, record) in log.all_pairs().iter().enumerate() {
        match FrameData::from_payload(&record.value) {
            Ok(frame) => println!(
                "Index: {}, Key: {}, fpga_timestamp: {}, rhythm_timestamp: {}, ttl_in: {}, ttl_out: {}, spi_perf_counter: {}",
                index,
                record.key,
                frame.fpga_timestamp,
                frame.rhythm_timestamp,
                frame.ttl_in,
                frame.ttl_out,
                frame.spi_perf_counter
            ),
            Err(e) => tracing::warn!(index, key = record.key, "undecodable payload: {}", e),
        }
    }

    println!("Size: {}", log.len());

    match log.find_index(args.search_key) {
        Some(index) => {
            println!("Key: {} Index: {}", args.search_key, index);
            if let Ok(frame) = log
                .get_by_index(index)
                .and_then(|value| FrameData::from_payload(value))
            {
                println!("fpga_timestamp: {}", frame.fpga_timestamp);
            }
        }
        None => println!("Key {} not found", args.search_key),
    }
}
