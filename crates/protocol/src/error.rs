//! Error payloads and the standard error-code vocabulary.

use std::fmt;

use serde::Deserialize;

/// `value` of a non-2xx WebDriver response.
#[derive(Debug, Clone, Deserialize)]
pub struct WireError {
	pub error: String,
	pub message: String,

	#[serde(default)]
	pub stacktrace: String,
}

impl WireError {
	pub fn code(&self) -> ErrorCode {
		ErrorCode::from_wire(&self.error)
	}
}

/// Standard error strings from W3C WebDriver §6.6 that the flow reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCode {
	NoSuchElement,
	StaleElementReference,
	ElementClickIntercepted,
	ElementNotInteractable,
	Timeout,
	ScriptTimeout,
	InvalidSessionId,
	SessionNotCreated,
	UnknownError,
	Other(String),
}

impl ErrorCode {
	/// Total mapping; unrecognized strings are preserved in `Other`.
	pub fn from_wire(error: &str) -> Self {
		match error {
			"no such element" => Self::NoSuchElement,
			"stale element reference" => Self::StaleElementReference,
			"element click intercepted" => Self::ElementClickIntercepted,
			"element not interactable" => Self::ElementNotInteractable,
			"timeout" => Self::Timeout,
			"script timeout" => Self::ScriptTimeout,
			"invalid session id" => Self::InvalidSessionId,
			"session not created" => Self::SessionNotCreated,
			"unknown error" => Self::UnknownError,
			other => Self::Other(other.to_string()),
		}
	}

	pub fn as_str(&self) -> &str {
		match self {
			Self::NoSuchElement => "no such element",
			Self::StaleElementReference => "stale element reference",
			Self::ElementClickIntercepted => "element click intercepted",
			Self::ElementNotInteractable => "element not interactable",
			Self::Timeout => "timeout",
			Self::ScriptTimeout => "script timeout",
			Self::InvalidSessionId => "invalid session id",
			Self::SessionNotCreated => "session not created",
			Self::UnknownError => "unknown error",
			Self::Other(s) => s,
		}
	}
}

impl fmt::Display for ErrorCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn wire_payload_parses() {
		let json = r##"{
			"error": "no such element",
			"message": "no such element: Unable to locate element: {\"method\":\"css selector\",\"selector\":\"#prePay\"}",
			"stacktrace": "#0 0x55d..."
		}"##;
		let err: WireError = serde_json::from_str(json).unwrap();
		assert_eq!(err.code(), ErrorCode::NoSuchElement);
	}

	#[test]
	fn unknown_strings_are_preserved() {
		let code = ErrorCode::from_wire("detached shadow root");
		assert_eq!(code, ErrorCode::Other("detached shadow root".into()));
		assert_eq!(code.as_str(), "detached shadow root");
	}

	#[test]
	fn round_trip_known_codes() {
		for s in [
			"no such element",
			"stale element reference",
			"element click intercepted",
			"timeout",
			"invalid session id",
		] {
			assert_eq!(ErrorCode::from_wire(s).as_str(), s);
		}
	}
}
