use std::fs::OpenOptions;
use std::path::Path;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer};

use crate::constants::LOG_FILE_ENV;

/// Initialize tracing with an optional file layer.
///
/// The TUI owns the terminal, so there is no stdout/stderr layer. Logging
/// goes to a file when a path is given explicitly (`--log-file`) or via the
/// `AUTHORLY_LOG_FILE` environment variable; otherwise tracing is inert.
pub fn init_tracing(log_file: Option<&Path>) -> anyhow::Result<()> {
    let path = match log_file {
        Some(p) => Some(p.to_path_buf()),
        None => std::env::var(LOG_FILE_ENV).ok().map(Into::into),
    };

    let Some(path) = path else {
        // No sink configured - install an empty registry so `tracing`
        // macros stay cheap no-ops.
        tracing_subscriber::registry().init();
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let file_layer = fmt::layer()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG);

    tracing_subscriber::registry().with(file_layer).init();
    Ok(())
}
