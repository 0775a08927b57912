mod config;
mod engine;
mod models;
mod source;
mod storage;
mod types;

use std::io::stderr;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::config::LoaderConfig;
use crate::engine::Loader;

const CONFIRMATION: &str = "Bulk insert completed successfully!";

/// Loads a point-of-sale CSV export into the `transactions` table
#[derive(Parser)]
#[command(name = "pos-transaction-loader", version)]
struct Cli {
    #[command(flatten)]
    config: LoaderConfig,

    /// Log level written to stderr: error, warn, info, debug, trace
    #[arg(long, env = "LOADER_LOG_LEVEL", default_value = "error")]
    log_level: String
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(parse_log_level(&cli.log_level));

    let loader = Loader::new(cli.config);

    let timer = Instant::now();
    let report = loader.run().await?;
    let duration = timer.elapsed();

    info!("Loaded {} of {} rows in: {duration:?}", report.rows_committed, report.rows_read);

    println!("{CONFIRMATION}");

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries only the confirmation message, logs go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
