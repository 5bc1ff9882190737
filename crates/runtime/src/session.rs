//! One WebDriver session and its command scope.

use matinee_protocol::{NewSessionRequest, NewSessionResponse};
use reqwest::Method;
use tracing::debug;

use crate::error::Result;
use crate::transport::Transport;

/// A created browser session. Commands are addressed relative to its id.
#[derive(Debug)]
pub struct Session {
	transport: Transport,
	id: String,
}

impl Session {
	/// `POST /session` with the given capabilities.
	pub async fn create(transport: Transport, request: &NewSessionRequest) -> Result<Self> {
		let value = transport
			.execute(Method::POST, "/session", Some(serde_json::to_value(request)?))
			.await?;
		let response: NewSessionResponse = serde_json::from_value(value)?;
		debug!(target = "matinee_runtime", session = %response.session_id, "session created");

		Ok(Self {
			transport,
			id: response.session_id,
		})
	}

	pub fn id(&self) -> &str {
		&self.id
	}

	/// Execute a command under this session, e.g. `command(POST, "url", body)`
	/// becomes `POST /session/{id}/url`.
	pub async fn command(
		&self,
		method: Method,
		suffix: &str,
		body: Option<serde_json::Value>,
	) -> Result<serde_json::Value> {
		let path = if suffix.is_empty() {
			format!("/session/{}", self.id)
		} else {
			format!("/session/{}/{}", self.id, suffix)
		};
		self.transport.execute(method, &path, body).await
	}

	/// `DELETE /session/{id}`, which closes the browser window this session owns.
	pub async fn delete(&self) -> Result<()> {
		self.command(Method::DELETE, "", None).await?;
		debug!(target = "matinee_runtime", session = %self.id, "session deleted");
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use httpmock::prelude::*;
	use matinee_protocol::{ChromeOptions, NewSessionRequest};

	use super::*;

	#[tokio::test]
	async fn create_and_delete() {
		let server = MockServer::start_async().await;
		server
			.mock_async(|when, then| {
				when.method(POST).path("/session");
				then.status(200).json_body(serde_json::json!({
					"value": {"sessionId": "s-42", "capabilities": {}}
				}));
			})
			.await;
		let delete_mock = server
			.mock_async(|when, then| {
				when.method(DELETE).path("/session/s-42");
				then.status(200).json_body(serde_json::json!({"value": null}));
			})
			.await;

		let transport = Transport::new(server.base_url());
		let request = NewSessionRequest::chrome(ChromeOptions::new());
		let session = Session::create(transport, &request).await.unwrap();
		assert_eq!(session.id(), "s-42");

		session.delete().await.unwrap();
		delete_mock.assert_async().await;
	}

	#[tokio::test]
	async fn command_paths_are_session_scoped() {
		let server = MockServer::start_async().await;
		server
			.mock_async(|when, then| {
				when.method(POST).path("/session");
				then.status(200).json_body(serde_json::json!({
					"value": {"sessionId": "abc", "capabilities": {}}
				}));
			})
			.await;
		let url_mock = server
			.mock_async(|when, then| {
				when.method(GET).path("/session/abc/url");
				then.status(200)
					.json_body(serde_json::json!({"value": "https://example.com/"}));
			})
			.await;

		let transport = Transport::new(server.base_url());
		let request = NewSessionRequest::chrome(ChromeOptions::new());
		let session = Session::create(transport, &request).await.unwrap();

		let value = session.command(Method::GET, "url", None).await.unwrap();
		assert_eq!(value, "https://example.com/");
		url_mock.assert_async().await;
	}
}
