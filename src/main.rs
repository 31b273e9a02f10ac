mod engine;
mod models;
mod types;

use std::io::stderr;
use std::time::Instant;

use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::engine::{Converter, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::WARN;

fn main() -> Result<()> {
    //NOTE: Every argument is optional and positional, run without any to convert history.csv into history_transformed.csv.
    let args: Vec<String> = std::env::args().collect();

    if args.iter().skip(1).any(|arg| arg == "-h" || arg == "--help") {
        print_usage();
        return Ok(());
    }

    let input = args.get(1).map_or(DEFAULT_INPUT_PATH, String::as_str);
    let output = args.get(2).map_or(DEFAULT_OUTPUT_PATH, String::as_str);
    let log_level = args.get(3)
        .map(|s| parse_log_level(s)).unwrap_or(DEFAULT_LOG_LEVEL);

    setup_logging(log_level);

    let converter = Converter::new(input, output);

    info!("Converting [{}]", converter.input().display());

    let timer = Instant::now();
    let summary = converter.run().inspect_err(|error| error!("{error}"))?;
    let duration = timer.elapsed();

    info!(
        "Wrote {} of {} rows to [{}] in: {duration:?}",
        summary.emitted,
        summary.read,
        converter.output().display()
    );

    Ok(())
}

fn print_usage() {
    eprintln!("Usage: history-transformer [input].csv [output].csv [log_level]");
    eprintln!("Defaults: {DEFAULT_INPUT_PATH} {DEFAULT_OUTPUT_PATH} warn");
    eprintln!("Available log levels: error, warn, info, debug, trace");
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to '{}'", level, DEFAULT_LOG_LEVEL);
            DEFAULT_LOG_LEVEL
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: Diagnostics go to stderr so they never mix with anything piped from stdout
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
