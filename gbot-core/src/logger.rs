//! Process-wide tracing setup for the `gbot` binary.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::{fmt::format::FmtSpan, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "info";

/// Opens `path` for appending, creating missing parent directories.
fn open_log_file(path: &Path) -> io::Result<File> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)?,
        _ => {}
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Installs the global subscriber: one fmt layer written to stdout and appended to `log_file_path`.
///
/// `RUST_LOG` selects the level (default `info`); load `.env` first.
pub fn init_tracing(log_file_path: &str) -> anyhow::Result<()> {
    let log_file = Arc::new(open_log_file(Path::new(log_file_path))?);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stdout.and(log_file))
                .with_span_events(FmtSpan::CLOSE)
                .with_thread_ids(true)
                .with_file(false)
                .with_line_number(false),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))
}
