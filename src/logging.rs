//! Logging init: file under the XDG state dir, or stderr when that fails.
//! The shelf owns the terminal in raw mode, so the file is the normal destination.

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,extshelf=debug";

fn env_filter() -> EnvFilter {
  EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Log to `~/.local/state/extshelf/extshelf.log`.
/// Returns Err so the caller can fall back to [`init_logging_stderr`].
pub fn init_logging() -> Result<PathBuf> {
  let xdg_dirs = xdg::BaseDirectories::with_prefix("extshelf")?;
  let log_dir = xdg_dirs.get_state_home();

  fs::create_dir_all(&log_dir)?;
  let log_file_path = log_dir.join("extshelf.log");

  let file = fs::OpenOptions::new()
    .create(true)
    .append(true)
    .open(&log_file_path)?;

  tracing_subscriber::fmt()
    .with_env_filter(env_filter())
    .with_writer(Mutex::new(file))
    .with_ansi(false)
    .try_init()
    .map_err(|e| anyhow::anyhow!(e))?;

  tracing::info!("extshelf logging initialized at {}", log_file_path.display());

  Ok(log_file_path)
}

pub fn init_logging_stderr() {
  let _ = tracing_subscriber::fmt()
    .with_env_filter(env_filter())
    .with_writer(std::io::stderr)
    .with_ansi(false)
    .try_init();
}
