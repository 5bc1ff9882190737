//! Failure screenshots.

use std::path::Path;

use chrono::Local;
use matinee::Page;
use tracing::{info, warn};

use crate::ui;

/// Best-effort capture after a stage fails. Never masks the real error; any
/// problem here is logged and swallowed.
pub async fn capture_failure(page: &Page, dir: Option<&Path>, stage: &str) {
	let Some(dir) = dir else {
		return;
	};

	if let Err(err) = std::fs::create_dir_all(dir) {
		warn!(target = "matinee", %err, dir = %dir.display(), "cannot create artifacts dir");
		return;
	}

	let bytes = match page.screenshot().await {
		Ok(bytes) => bytes,
		Err(err) => {
			warn!(target = "matinee", %err, stage, "failure screenshot unavailable");
			return;
		}
	};

	let filename = format!("{}-{}.png", stage, Local::now().format("%Y%m%d-%H%M%S"));
	let path = dir.join(filename);
	match std::fs::write(&path, bytes) {
		Ok(()) => {
			info!(target = "matinee", path = %path.display(), stage, "failure screenshot saved");
			ui::note(&format!("Saved failure screenshot: {}", path.display()));
		}
		Err(err) => {
			warn!(target = "matinee", %err, path = %path.display(), "could not write screenshot");
		}
	}
}
