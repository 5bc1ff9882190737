//! Element location strategies.

use serde::Serialize;

/// Body of find-element commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Locator {
	pub using: Strategy,
	pub value: String,
}

impl Locator {
	pub fn css(value: impl Into<String>) -> Self {
		Self {
			using: Strategy::Css,
			value: value.into(),
		}
	}

	pub fn xpath(value: impl Into<String>) -> Self {
		Self {
			using: Strategy::XPath,
			value: value.into(),
		}
	}
}

/// The two strategies the flow uses. W3C defines more; chromedriver rewrites
/// them all to these internally anyway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Strategy {
	#[serde(rename = "css selector")]
	Css,
	#[serde(rename = "xpath")]
	XPath,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn strategy_wire_names() {
		let css = serde_json::to_value(Locator::css("#prePay")).unwrap();
		assert_eq!(css["using"], "css selector");
		assert_eq!(css["value"], "#prePay");

		let xpath = serde_json::to_value(Locator::xpath("//button")).unwrap();
		assert_eq!(xpath["using"], "xpath");
	}
}
