//! New-session capability payloads.

use serde::Serialize;

/// Body of `POST /session`.
#[derive(Debug, Clone, Serialize)]
pub struct NewSessionRequest {
	pub capabilities: Capabilities,
}

impl NewSessionRequest {
	pub fn chrome(options: ChromeOptions) -> Self {
		Self {
			capabilities: Capabilities {
				always_match: BrowserCapabilities {
					browser_name: "chrome".into(),
					chrome_options: options,
				},
			},
		}
	}
}

#[derive(Debug, Clone, Serialize)]
pub struct Capabilities {
	#[serde(rename = "alwaysMatch")]
	pub always_match: BrowserCapabilities,
}

#[derive(Debug, Clone, Serialize)]
pub struct BrowserCapabilities {
	#[serde(rename = "browserName")]
	pub browser_name: String,

	#[serde(rename = "goog:chromeOptions")]
	pub chrome_options: ChromeOptions,
}

/// Chromium launch options carried inside `goog:chromeOptions`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChromeOptions {
	/// Browser binary override; chromedriver auto-detects when absent.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub binary: Option<String>,

	pub args: Vec<String>,
}

impl ChromeOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn binary(mut self, path: impl Into<String>) -> Self {
		self.binary = Some(path.into());
		self
	}

	pub fn arg(mut self, arg: impl Into<String>) -> Self {
		self.args.push(arg.into());
		self
	}
}
