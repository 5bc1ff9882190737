//! Runtime configuration: a JSON file merged under CLI flags.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BotError, Result};

pub const DEFAULT_BASE_URL: &str = "https://in.bookmyshow.com/movies";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
	/// Movie-page URL prefix; `{base}/{location}/{movie}` is the target.
	pub base_url: String,

	/// chromedriver binary; discovery runs when unset.
	pub chromedriver: Option<PathBuf>,

	/// Chrome/Chromium binary override.
	pub chrome_binary: Option<PathBuf>,

	/// Persistent Chrome profile dir; defaults to the platform data dir.
	pub profile_dir: Option<PathBuf>,

	/// Failure-screenshot directory; unset disables capture.
	pub artifacts_dir: Option<PathBuf>,

	/// Seconds between refreshes while waiting for booking to open.
	pub refresh_interval_secs: u64,

	/// Seconds to keep the browser open after the payment is initiated, so
	/// the confirmation can be watched.
	pub observation_hold_secs: u64,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.to_string(),
			chromedriver: None,
			chrome_binary: None,
			profile_dir: None,
			artifacts_dir: None,
			refresh_interval_secs: 300,
			observation_hold_secs: 45,
		}
	}
}

impl Config {
	/// Load from an explicit path (must exist) or the default location
	/// (missing file means defaults).
	pub fn load(explicit: Option<&Path>) -> Result<Self> {
		let (path, must_exist) = match explicit {
			Some(path) => (path.to_path_buf(), true),
			None => match default_config_path() {
				Some(path) => (path, false),
				None => return Ok(Self::default()),
			},
		};

		match std::fs::read_to_string(&path) {
			Ok(raw) => serde_json::from_str(&raw).map_err(|err| BotError::Config {
				path: path.display().to_string(),
				message: err.to_string(),
			}),
			Err(err) if !must_exist && err.kind() == std::io::ErrorKind::NotFound => {
				Ok(Self::default())
			}
			Err(err) => Err(BotError::Config {
				path: path.display().to_string(),
				message: err.to_string(),
			}),
		}
	}

	/// The profile dir to launch with, creating the default one on demand.
	pub fn resolve_profile_dir(&self) -> Result<PathBuf> {
		let dir = match &self.profile_dir {
			Some(dir) => dir.clone(),
			None => dirs::data_dir()
				.unwrap_or_else(|| PathBuf::from("."))
				.join("matinee")
				.join("chrome-profile"),
		};
		std::fs::create_dir_all(&dir)?;
		Ok(dir)
	}
}

fn default_config_path() -> Option<PathBuf> {
	Some(dirs::config_dir()?.join("matinee").join("config.json"))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_are_sane() {
		let config = Config::default();
		assert_eq!(config.base_url, DEFAULT_BASE_URL);
		assert_eq!(config.refresh_interval_secs, 300);
		assert_eq!(config.observation_hold_secs, 45);
		assert!(config.chromedriver.is_none());
	}

	#[test]
	fn partial_file_fills_in_defaults() {
		let temp = tempfile::TempDir::new().unwrap();
		let path = temp.path().join("config.json");
		std::fs::write(&path, r#"{"refreshIntervalSecs": 60}"#).unwrap();

		let config = Config::load(Some(&path)).unwrap();
		assert_eq!(config.refresh_interval_secs, 60);
		assert_eq!(config.base_url, DEFAULT_BASE_URL);
	}

	#[test]
	fn explicit_missing_file_is_an_error() {
		let temp = tempfile::TempDir::new().unwrap();
		let path = temp.path().join("nope.json");
		assert!(Config::load(Some(&path)).is_err());
	}

	#[test]
	fn malformed_file_names_the_path() {
		let temp = tempfile::TempDir::new().unwrap();
		let path = temp.path().join("config.json");
		std::fs::write(&path, "{not json").unwrap();

		let err = Config::load(Some(&path)).unwrap_err();
		assert!(err.to_string().contains("config.json"));
	}
}
