//! HTTP JSON transport to chromedriver.

use matinee_protocol::{ValueResponse, WireError};
use reqwest::Method;
use tracing::trace;

use crate::error::{Error, Result};

/// Thin command client. One instance per driver process; sessions share it.
#[derive(Debug, Clone)]
pub struct Transport {
	http: reqwest::Client,
	base: String,
}

impl Transport {
	pub fn new(base_url: impl Into<String>) -> Self {
		Self {
			http: reqwest::Client::new(),
			base: base_url.into(),
		}
	}

	pub fn base_url(&self) -> &str {
		&self.base
	}

	/// Execute one WebDriver command and return the unwrapped `value`.
	///
	/// POST bodies default to `{}`; chromedriver rejects empty POST bodies.
	/// Non-2xx responses are decoded as [`WireError`] payloads.
	pub async fn execute(
		&self,
		method: Method,
		path: &str,
		body: Option<serde_json::Value>,
	) -> Result<serde_json::Value> {
		let url = format!("{}{}", self.base, path);
		trace!(target = "matinee_runtime", %method, %url, "webdriver command");

		let mut request = self.http.request(method.clone(), &url);
		if method == Method::POST {
			request = request.json(&body.unwrap_or_else(|| serde_json::json!({})));
		}

		let response = request.send().await?;
		let status = response.status();
		let payload: serde_json::Value = response.json().await?;

		if status.is_success() {
			return Ok(payload
				.get("value")
				.cloned()
				.unwrap_or(serde_json::Value::Null));
		}

		match serde_json::from_value::<ValueResponse<WireError>>(payload.clone()) {
			Ok(wrapped) => Err(Error::Wire {
				code: wrapped.value.code(),
				message: wrapped.value.message,
			}),
			Err(_) => Err(Error::Wire {
				code: matinee_protocol::ErrorCode::UnknownError,
				message: format!("HTTP {status}: {payload}"),
			}),
		}
	}
}

#[cfg(test)]
mod tests {
	use httpmock::prelude::*;
	use matinee_protocol::ErrorCode;

	use super::*;

	#[tokio::test]
	async fn unwraps_value_envelope() {
		let server = MockServer::start_async().await;
		server
			.mock_async(|when, then| {
				when.method(GET).path("/session/s1/title");
				then.status(200)
					.json_body(serde_json::json!({"value": "Movie Tickets Online"}));
			})
			.await;

		let transport = Transport::new(server.base_url());
		let value = transport
			.execute(Method::GET, "/session/s1/title", None)
			.await
			.unwrap();
		assert_eq!(value, "Movie Tickets Online");
	}

	#[tokio::test]
	async fn maps_wire_errors() {
		let server = MockServer::start_async().await;
		server
			.mock_async(|when, then| {
				when.method(POST).path("/session/s1/element");
				then.status(404).json_body(serde_json::json!({
					"value": {
						"error": "no such element",
						"message": "no such element: Unable to locate element",
						"stacktrace": ""
					}
				}));
			})
			.await;

		let transport = Transport::new(server.base_url());
		let err = transport
			.execute(
				Method::POST,
				"/session/s1/element",
				Some(serde_json::json!({"using": "css selector", "value": "#prePay"})),
			)
			.await
			.unwrap_err();

		match err {
			Error::Wire { code, .. } => assert_eq!(code, ErrorCode::NoSuchElement),
			other => panic!("unexpected error: {other:?}"),
		}
	}

	#[tokio::test]
	async fn posts_empty_object_when_no_body() {
		let server = MockServer::start_async().await;
		let mock = server
			.mock_async(|when, then| {
				when.method(POST).path("/session/s1/refresh").json_body(serde_json::json!({}));
				then.status(200).json_body(serde_json::json!({"value": null}));
			})
			.await;

		let transport = Transport::new(server.base_url());
		transport
			.execute(Method::POST, "/session/s1/refresh", None)
			.await
			.unwrap();
		mock.assert_async().await;
	}
}
