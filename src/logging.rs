use crate::config::AppConfig;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the file logger. The terminal belongs to the UI, so nothing is
/// written to stdout or stderr; with file logging off no subscriber is set.
pub fn init(config: &AppConfig) -> Result<()> {
    let Some(path) = config.log_path() else {
        return Ok(());
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .context(format!("Could not create log directory: {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .context(format!("Could not open log file: {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .try_init()
        .context("Could not install logger")?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(())
}
