//! Condition polling with a deadline.
//!
//! Every probe re-finds the element, so references that went stale between
//! ticks are simply retried instead of surfacing to the caller.

use std::time::Duration;

use tokio::time::Instant;

use crate::by::By;
use crate::element::Element;
use crate::error::{Error, Result};
use crate::page::Page;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);
const DEFAULT_POLL: Duration = Duration::from_millis(250);

/// Builder-style wait against one page.
#[derive(Debug, Clone, Copy)]
pub struct Wait<'a> {
	page: &'a Page,
	timeout: Duration,
	poll: Duration,
}

impl<'a> Wait<'a> {
	pub fn new(page: &'a Page) -> Self {
		Self {
			page,
			timeout: DEFAULT_TIMEOUT,
			poll: DEFAULT_POLL,
		}
	}

	pub fn timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}

	pub fn poll(mut self, poll: Duration) -> Self {
		self.poll = poll;
		self
	}

	/// Wait until the element exists in the DOM.
	pub async fn until_present(&self, by: &By) -> Result<Element> {
		self.run(&format!("presence of {by}"), || async {
			match self.page.find(by).await {
				Ok(element) => Ok(Some(element)),
				Err(err) if err.is_absence() => Ok(None),
				Err(err) => Err(err),
			}
		})
		.await
	}

	/// Wait until the element exists, is displayed, and is enabled.
	pub async fn until_clickable(&self, by: &By) -> Result<Element> {
		self.run(&format!("clickability of {by}"), || async {
			let element = match self.page.find(by).await {
				Ok(element) => element,
				Err(err) if err.is_absence() => return Ok(None),
				Err(err) => return Err(err),
			};

			match clickable_probe(&element).await {
				Ok(true) => Ok(Some(element)),
				Ok(false) => Ok(None),
				Err(err) if err.is_absence() => Ok(None),
				Err(err) => Err(err),
			}
		})
		.await
	}

	/// Wait until no element matches.
	pub async fn until_gone(&self, by: &By) -> Result<()> {
		self.run(&format!("absence of {by}"), || async {
			match self.page.find(by).await {
				Ok(_) => Ok(None),
				Err(err) if err.is_absence() => Ok(Some(())),
				Err(err) => Err(err),
			}
		})
		.await
	}

	/// Generic polling: the probe returns `Ok(Some(_))` when satisfied,
	/// `Ok(None)` to keep polling, `Err` to abort.
	pub async fn until<T, F, Fut>(&self, condition: &str, probe: F) -> Result<T>
	where
		F: Fn() -> Fut,
		Fut: Future<Output = Result<Option<T>>>,
	{
		self.run(condition, probe).await
	}

	async fn run<T, F, Fut>(&self, condition: &str, probe: F) -> Result<T>
	where
		F: Fn() -> Fut,
		Fut: Future<Output = Result<Option<T>>>,
	{
		let deadline = Instant::now() + self.timeout;

		loop {
			if let Some(value) = probe().await? {
				return Ok(value);
			}

			if Instant::now() + self.poll > deadline {
				return Err(Error::Timeout {
					ms: self.timeout.as_millis() as u64,
					condition: condition.to_string(),
				});
			}
			tokio::time::sleep(self.poll).await;
		}
	}
}

async fn clickable_probe(element: &Element) -> Result<bool> {
	Ok(element.is_displayed().await? && element.is_enabled().await?)
}
