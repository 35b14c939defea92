//! Log subscriber setup for the binary.
//!
//! The terminal belongs to the TUI while it runs, so logs only go to a file
//! and only when one is requested.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "CHIPSEARCH_LOG";

const DEFAULT_FILTER: &str = "info";

/// The filter from [`LOG_ENV`], or `info` when unset or invalid.
#[must_use]
pub fn env_filter() -> EnvFilter {
	EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a global fmt subscriber writing to `path`, truncating it first.
pub fn init_file(path: &Path) -> Result<()> {
	let file = File::create(path)
		.with_context(|| format!("failed to create log file {}", path.display()))?;

	tracing_subscriber::fmt()
		.with_env_filter(env_filter())
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.try_init()
		.map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}

#[cfg(test)]
mod tests {
	use super::*;
	use tempfile::tempdir;

	#[test]
	fn init_file_creates_the_log_and_accepts_events() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("chipsearch.log");

		init_file(&path).expect("subscriber installs");
		tracing::info!("hello");
		assert!(path.exists());
	}

	#[test]
	fn missing_directory_is_reported() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("missing").join("chipsearch.log");
		let err = init_file(&path).expect_err("directory does not exist");
		assert!(err.to_string().contains("failed to create log file"));
	}
}
