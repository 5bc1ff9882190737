//! Selector type bridging user intent to wire locators.

use std::fmt;

use matinee_protocol::Locator;

/// How to find an element. Ids are expressed as CSS attribute selectors so
/// numeric-leading ids (the site's date cells are `YYYYMMDD`) stay valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum By {
	Id(String),
	Css(String),
	XPath(String),
}

impl By {
	pub fn id(id: impl Into<String>) -> Self {
		By::Id(id.into())
	}

	pub fn css(selector: impl Into<String>) -> Self {
		By::Css(selector.into())
	}

	pub fn xpath(expression: impl Into<String>) -> Self {
		By::XPath(expression.into())
	}

	pub(crate) fn to_locator(&self) -> Locator {
		match self {
			By::Id(id) => Locator::css(format!("[id='{}']", escape_attr_value(id))),
			By::Css(selector) => Locator::css(selector.clone()),
			By::XPath(expression) => Locator::xpath(expression.clone()),
		}
	}
}

impl fmt::Display for By {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			By::Id(id) => write!(f, "id={id}"),
			By::Css(selector) => write!(f, "css={selector}"),
			By::XPath(expression) => write!(f, "xpath={expression}"),
		}
	}
}

fn escape_attr_value(value: &str) -> String {
	value.replace('\\', "\\\\").replace('\'', "\\'")
}

#[cfg(test)]
mod tests {
	use matinee_protocol::Strategy;

	use super::*;

	#[test]
	fn id_becomes_attribute_selector() {
		let locator = By::id("20250614").to_locator();
		assert_eq!(locator.using, Strategy::Css);
		assert_eq!(locator.value, "[id='20250614']");
	}

	#[test]
	fn id_quotes_are_escaped() {
		let locator = By::id("o'brien").to_locator();
		assert_eq!(locator.value, r#"[id='o\'brien']"#);
	}

	#[test]
	fn css_and_xpath_pass_through() {
		assert_eq!(By::css(".seatI a").to_locator(), Locator::css(".seatI a"));
		assert_eq!(By::xpath("//button").to_locator(), Locator::xpath("//button"));
	}

	#[test]
	fn display_names_the_strategy() {
		assert_eq!(By::id("prePay").to_string(), "id=prePay");
		assert_eq!(By::xpath("//a").to_string(), "xpath=//a");
	}
}
