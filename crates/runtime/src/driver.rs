//! chromedriver discovery.
//!
//! Locates a usable chromedriver binary without downloading anything.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Locate the chromedriver executable.
///
/// Candidates are tried in order:
/// 1. `MATINEE_CHROMEDRIVER` environment variable (runtime override)
/// 2. An explicitly configured path, if any
/// 3. `PATH` lookup via `which`/`where`
/// 4. Common install locations
///
/// Each candidate must answer `chromedriver --version` successfully; a path
/// that exists but is not runnable is skipped with a warning rather than
/// accepted, since a broken binary would only fail later with a worse message.
///
/// # Errors
///
/// Returns [`Error::DriverNotFound`] when no candidate survives the probe.
pub fn locate_chromedriver(configured: Option<&Path>) -> Result<PathBuf> {
	if let Ok(env_path) = std::env::var("MATINEE_CHROMEDRIVER") {
		if let Some(path) = accept_candidate("MATINEE_CHROMEDRIVER", Path::new(&env_path)) {
			return Ok(path);
		}
	}

	if let Some(path) = configured {
		if let Some(path) = accept_candidate("configured path", path) {
			return Ok(path);
		}
	}

	if let Some(path) = find_in_path() {
		if let Some(path) = accept_candidate("PATH", &path) {
			return Ok(path);
		}
	}

	for location in common_locations() {
		let path = PathBuf::from(location);
		if path.exists() {
			if let Some(path) = accept_candidate("common location", &path) {
				return Ok(path);
			}
		}
	}

	Err(Error::DriverNotFound)
}

fn accept_candidate(source: &str, path: &Path) -> Option<PathBuf> {
	if !path.exists() {
		debug!(target = "matinee_runtime", source, path = %path.display(), "candidate does not exist");
		return None;
	}

	if driver_is_usable(path) {
		debug!(target = "matinee_runtime", source, path = %path.display(), "using chromedriver");
		return Some(path.to_path_buf());
	}

	warn!(
		target = "matinee_runtime",
		source,
		path = %path.display(),
		"chromedriver candidate is not runnable; trying the next one"
	);
	None
}

fn driver_is_usable(path: &Path) -> bool {
	Command::new(path)
		.arg("--version")
		.stdout(Stdio::null())
		.stderr(Stdio::null())
		.status()
		.map(|status| status.success())
		.unwrap_or(false)
}

fn find_in_path() -> Option<PathBuf> {
	#[cfg(not(windows))]
	let which_cmd = "which";
	#[cfg(windows)]
	let which_cmd = "where";

	let output = Command::new(which_cmd).arg("chromedriver").output().ok()?;
	if !output.status.success() {
		return None;
	}

	let found = String::from_utf8_lossy(&output.stdout);
	let first = found.lines().next()?.trim();
	if first.is_empty() {
		return None;
	}

	let path = PathBuf::from(first);
	path.exists().then_some(path)
}

#[cfg(not(windows))]
fn common_locations() -> &'static [&'static str] {
	&[
		"/usr/bin/chromedriver",
		"/usr/local/bin/chromedriver",
		"/usr/lib/chromium-browser/chromedriver",
		"/usr/lib/chromium/chromedriver",
		"/snap/bin/chromium.chromedriver",
		"/opt/homebrew/bin/chromedriver",
	]
}

#[cfg(windows)]
fn common_locations() -> &'static [&'static str] {
	&[
		"C:\\Program Files\\chromedriver\\chromedriver.exe",
		"C:\\chromedriver\\chromedriver.exe",
	]
}
