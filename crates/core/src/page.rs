//! The page command surface.

use std::sync::Arc;

use base64::Engine as _;
use matinee_protocol::{ExecuteScriptRequest, WebElement};
use matinee_runtime::{Method, Session};

use crate::by::By;
use crate::element::Element;
use crate::error::{Error, Result};
use crate::wait::Wait;

/// The single window the flow drives.
#[derive(Debug, Clone)]
pub struct Page {
	session: Arc<Session>,
}

impl Page {
	pub(crate) fn new(session: Arc<Session>) -> Self {
		Self { session }
	}

	pub async fn goto(&self, url: &str) -> Result<()> {
		self.session
			.command(Method::POST, "url", Some(serde_json::json!({ "url": url })))
			.await?;
		Ok(())
	}

	pub async fn current_url(&self) -> Result<String> {
		let value = self.session.command(Method::GET, "url", None).await?;
		Ok(value.as_str().unwrap_or_default().to_string())
	}

	pub async fn title(&self) -> Result<String> {
		let value = self.session.command(Method::GET, "title", None).await?;
		Ok(value.as_str().unwrap_or_default().to_string())
	}

	pub async fn refresh(&self) -> Result<()> {
		self.session.command(Method::POST, "refresh", None).await?;
		Ok(())
	}

	pub async fn find(&self, by: &By) -> Result<Element> {
		let value = self
			.session
			.command(
				Method::POST,
				"element",
				Some(serde_json::to_value(by.to_locator()).map_err(matinee_runtime::Error::from)?),
			)
			.await
			.map_err(|err| Error::classify(err, &by.to_string()))?;
		let element: WebElement =
			serde_json::from_value(value).map_err(matinee_runtime::Error::from)?;
		Ok(Element::new(self.session.clone(), element, by.to_string()))
	}

	/// All matches; an empty vec is not an error.
	pub async fn find_all(&self, by: &By) -> Result<Vec<Element>> {
		let value = self
			.session
			.command(
				Method::POST,
				"elements",
				Some(serde_json::to_value(by.to_locator()).map_err(matinee_runtime::Error::from)?),
			)
			.await
			.map_err(|err| Error::classify(err, &by.to_string()))?;
		let elements: Vec<WebElement> =
			serde_json::from_value(value).map_err(matinee_runtime::Error::from)?;
		Ok(elements
			.into_iter()
			.map(|element| Element::new(self.session.clone(), element, by.to_string()))
			.collect())
	}

	/// Run a script in the page, no arguments.
	pub async fn execute(&self, script: &str) -> Result<serde_json::Value> {
		self.evaluate(ExecuteScriptRequest::new(script)).await
	}

	/// Run a prepared script request (with element or JSON arguments).
	pub async fn evaluate(&self, request: ExecuteScriptRequest) -> Result<serde_json::Value> {
		let value = self
			.session
			.command(
				Method::POST,
				"execute/sync",
				Some(serde_json::to_value(&request).map_err(matinee_runtime::Error::from)?),
			)
			.await?;
		Ok(value)
	}

	/// PNG bytes of the viewport.
	pub async fn screenshot(&self) -> Result<Vec<u8>> {
		let value = self.session.command(Method::GET, "screenshot", None).await?;
		let encoded = value.as_str().unwrap_or_default();
		let bytes = base64::engine::general_purpose::STANDARD
			.decode(encoded)
			.map_err(|err| Error::Screenshot(format!("invalid base64 payload: {err}")))?;
		Ok(bytes)
	}

	/// A wait builder against this page with default timeout and interval.
	pub fn wait(&self) -> Wait<'_> {
		Wait::new(self)
	}
}
