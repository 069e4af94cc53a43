use std::fs::OpenOptions;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Set up tracing for a TUI process: stdout belongs to the terminal UI, so
/// logs only go to a file, and only when `FOLIO_LOG_FILE` names one.
/// `RUST_LOG` controls the filter (default `info`).
pub fn init() {
    let Some(log_path) = std::env::var("FOLIO_LOG_FILE").ok() else {
        return;
    };

    let file = match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Failed to open log file {log_path}: {e}");
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(file_layer).init();
}
