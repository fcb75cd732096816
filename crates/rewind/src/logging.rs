//! Tracing setup.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::config::Settings;

/// Installs a subscriber writing to the configured log file.
///
/// Logging to the terminal would corrupt the UI, so output always goes to a
/// file. `RUST_LOG` takes precedence over the configured filter.
pub fn init_logging(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!("Failed to create log file {}", settings.log_file().display())
    })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    Ok(())
}
