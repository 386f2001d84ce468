//! Logging Setup
//!
//! Library code logs through the `log` facade. The binary installs a
//! `tracing` subscriber that writes JSON lines to a daily-rolling file and,
//! unless the terminal is busy, human-readable lines to stderr. `log` records
//! are forwarded into `tracing` with `tracing-log`.

use std::fs;
use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Layer};

/// Log file name prefix; the appender adds a date suffix.
pub const LOG_FILE_NAME: &str = "storefront-search.log";

const DEFAULT_FILTER: &str = "info";

/// Initialize logging to `log_dir` and stderr.
///
/// Keep the returned guard alive for the life of the process; dropping it
/// flushes and stops the file writer.
pub fn init(log_dir: &Path) -> WorkerGuard {
    install(log_dir, true)
}

/// Same as [`init`] but file only, for when stdout/stderr carry the REPL.
pub fn init_file_only(log_dir: &Path) -> WorkerGuard {
    install(log_dir, false)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn install(log_dir: &Path, with_stderr: bool) -> WorkerGuard {
    if !log_dir.exists() {
        if let Err(e) = fs::create_dir_all(log_dir) {
            eprintln!("Failed to create logs directory: {}", e);
        }
    }

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // File layer: JSON for later ingestion
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_filter(env_filter());

    let stderr_layer = with_stderr.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .compact()
            .with_filter(env_filter())
    });

    let subscriber = tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer);

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install tracing subscriber: {}", e);
        return guard;
    }

    // Route `log` macros into `tracing`
    if let Err(e) = tracing_log::LogTracer::init() {
        eprintln!("Failed to initialize LogTracer: {}", e);
    }

    log::info!(
        "Logging initialized. Writing to: {:?} (daily rolling)",
        log_dir.join(LOG_FILE_NAME)
    );

    guard
}
