//! Session and status response payloads.

use serde::Deserialize;

/// `value` of a successful `POST /session`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewSessionResponse {
	#[serde(rename = "sessionId")]
	pub session_id: String,

	#[serde(default)]
	pub capabilities: serde_json::Value,
}

/// `value` of `GET /status`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
	pub ready: bool,

	#[serde(default)]
	pub message: String,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_session_value_parses() {
		let json = r#"{
			"capabilities": {"browserName": "chrome", "browserVersion": "126.0.6478.126"},
			"sessionId": "3c5b2f8d6a1e"
		}"#;
		let resp: NewSessionResponse = serde_json::from_str(json).unwrap();
		assert_eq!(resp.session_id, "3c5b2f8d6a1e");
		assert_eq!(resp.capabilities["browserName"], "chrome");
	}

	#[test]
	fn status_parses_without_message() {
		let resp: StatusResponse = serde_json::from_str(r#"{"ready": true}"#).unwrap();
		assert!(resp.ready);
		assert!(resp.message.is_empty());
	}
}
