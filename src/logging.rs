//! Diagnostic logging setup
//!
//! `RUST_LOG` wins when set. Otherwise `--verbose` selects `debug` and the
//! default is `warn`. The TUI owns the terminal, so in interactive mode logs
//! go to a file or nowhere.

use anyhow::{Context, Result, anyhow};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where and how much to log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogConfig<'a> {
    pub verbose: bool,
    pub log_file: Option<&'a Path>,
    /// Terminal is taken over by the TUI
    pub interactive: bool,
}

impl LogConfig<'_> {
    fn default_directive(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a global subscriber
/// is already installed.
pub fn init(config: &LogConfig<'_>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directive()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let installed = match config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            builder
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
        None if config.interactive => return Ok(()),
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    installed.map_err(|err| anyhow!("Failed to install logger: {err}"))
}
