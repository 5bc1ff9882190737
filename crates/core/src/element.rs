//! Element handle and its interaction methods.

use std::sync::Arc;
use std::time::Duration;

use matinee_protocol::{ExecuteScriptRequest, WebElement};
use matinee_runtime::{Method, Session};

use crate::by::By;
use crate::error::{Error, Result};

/// Settle pause between scrolling an element into view and clicking it; gives
/// the site's scroll handlers time to finish moving things around.
const JS_CLICK_SETTLE: Duration = Duration::from_millis(500);

/// A located element. Holds the wire reference plus the selector it was found
/// by, so errors can say what they were about.
#[derive(Debug, Clone)]
pub struct Element {
	session: Arc<Session>,
	element: WebElement,
	selector: String,
}

impl Element {
	pub(crate) fn new(session: Arc<Session>, element: WebElement, selector: String) -> Self {
		Self {
			session,
			element,
			selector,
		}
	}

	pub fn selector(&self) -> &str {
		&self.selector
	}

	async fn command(
		&self,
		method: Method,
		suffix: &str,
		body: Option<serde_json::Value>,
	) -> Result<serde_json::Value> {
		let path = format!("element/{}/{}", self.element.element_id, suffix);
		self.session
			.command(method, &path, body)
			.await
			.map_err(|err| Error::classify(err, &self.selector))
	}

	/// Native click through the driver.
	pub async fn click(&self) -> Result<()> {
		self.command(Method::POST, "click", None).await?;
		Ok(())
	}

	/// Scroll into view, settle, then click via JavaScript. The site renders
	/// several of its "buttons" as divs and anchors behind overlays where the
	/// native click is flaky; this is the robust path the flow prefers.
	pub async fn js_click(&self) -> Result<()> {
		self.scroll_into_view().await?;
		tokio::time::sleep(JS_CLICK_SETTLE).await;
		self.execute_on_self("arguments[0].click();").await?;
		Ok(())
	}

	pub async fn scroll_into_view(&self) -> Result<()> {
		self.execute_on_self("arguments[0].scrollIntoView({block: 'center'});")
			.await?;
		Ok(())
	}

	async fn execute_on_self(&self, script: &str) -> Result<serde_json::Value> {
		let request = ExecuteScriptRequest::new(script).element_arg(&self.element);
		self.session
			.command(
				Method::POST,
				"execute/sync",
				Some(serde_json::to_value(&request).map_err(matinee_runtime::Error::from)?),
			)
			.await
			.map_err(|err| Error::classify(err, &self.selector))
	}

	pub async fn send_keys(&self, text: &str) -> Result<()> {
		self.command(
			Method::POST,
			"value",
			Some(serde_json::json!({ "text": text })),
		)
		.await?;
		Ok(())
	}

	pub async fn clear(&self) -> Result<()> {
		self.command(Method::POST, "clear", None).await?;
		Ok(())
	}

	pub async fn text(&self) -> Result<String> {
		let value = self.command(Method::GET, "text", None).await?;
		Ok(value.as_str().unwrap_or_default().to_string())
	}

	pub async fn attr(&self, name: &str) -> Result<Option<String>> {
		let value = self
			.command(Method::GET, &format!("attribute/{name}"), None)
			.await?;
		Ok(value.as_str().map(String::from))
	}

	pub async fn is_displayed(&self) -> Result<bool> {
		let value = self.command(Method::GET, "displayed", None).await?;
		Ok(value.as_bool().unwrap_or(false))
	}

	pub async fn is_enabled(&self) -> Result<bool> {
		let value = self.command(Method::GET, "enabled", None).await?;
		Ok(value.as_bool().unwrap_or(false))
	}

	/// Find a descendant (or, with `By::xpath("..")`, the parent).
	pub async fn find(&self, by: &By) -> Result<Element> {
		let value = self
			.command(
				Method::POST,
				"element",
				Some(serde_json::to_value(by.to_locator()).map_err(matinee_runtime::Error::from)?),
			)
			.await
			.map_err(|err| match err {
				Error::NoSuchElement { .. } => Error::NoSuchElement {
					selector: format!("{} within {}", by, self.selector),
				},
				other => other,
			})?;
		let element: WebElement =
			serde_json::from_value(value).map_err(matinee_runtime::Error::from)?;
		Ok(Element::new(
			self.session.clone(),
			element,
			format!("{} within {}", by, self.selector),
		))
	}

	/// Find all descendants matching the selector. Empty is not an error.
	pub async fn find_all(&self, by: &By) -> Result<Vec<Element>> {
		let value = self
			.command(
				Method::POST,
				"elements",
				Some(serde_json::to_value(by.to_locator()).map_err(matinee_runtime::Error::from)?),
			)
			.await?;
		let elements: Vec<WebElement> =
			serde_json::from_value(value).map_err(matinee_runtime::Error::from)?;
		Ok(elements
			.into_iter()
			.map(|element| {
				Element::new(
					self.session.clone(),
					element,
					format!("{} within {}", by, self.selector),
				)
			})
			.collect())
	}
}
