use matinee_protocol::ErrorCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
	#[error("chromedriver not found")]
	DriverNotFound,

	#[error("chromedriver launch failed: {0}")]
	LaunchFailed(String),

	#[error("chromedriver did not become ready within {ms}ms")]
	StartupTimeout { ms: u64 },

	#[error("webdriver request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error(transparent)]
	Json(#[from] serde_json::Error),

	#[error("webdriver error [{code}]: {message}")]
	Wire { code: ErrorCode, message: String },

	#[error("session already closed")]
	SessionClosed,
}

impl Error {
	pub fn wire_code(&self) -> Option<&ErrorCode> {
		match self {
			Error::Wire { code, .. } => Some(code),
			_ => None,
		}
	}

	/// A human hint for the setup failures users actually hit.
	pub fn hint(&self) -> Option<&'static str> {
		match self {
			Error::DriverNotFound => Some(
				"Install chromedriver (it ships with Chromium on most distros) or point \
				 MATINEE_CHROMEDRIVER at the binary.",
			),
			Error::Wire { code, message } if *code == ErrorCode::SessionNotCreated => {
				if message.contains("version") {
					Some("chromedriver and Chrome versions must match; update whichever is older.")
				} else if message.to_lowercase().contains("binary") {
					Some("Chrome binary auto-detection failed; pass --chrome-binary or set it in the config file.")
				} else {
					None
				}
			}
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn version_mismatch_gets_hint() {
		let err = Error::Wire {
			code: ErrorCode::SessionNotCreated,
			message: "session not created: This version of ChromeDriver only supports Chrome version 125".into(),
		};
		assert!(err.hint().unwrap().contains("version"));
	}

	#[test]
	fn missing_binary_gets_hint() {
		let err = Error::Wire {
			code: ErrorCode::SessionNotCreated,
			message: "session not created: cannot find Chrome binary".into(),
		};
		assert!(err.hint().unwrap().contains("--chrome-binary"));
	}

	#[test]
	fn wire_errors_without_known_cause_have_no_hint() {
		let err = Error::Wire {
			code: ErrorCode::UnknownError,
			message: "something else".into(),
		};
		assert!(err.hint().is_none());
	}
}
