//! Element references as they appear on the wire.

use serde::{Deserialize, Serialize};

/// JSON key identifying an element reference object (W3C WebDriver §11).
pub const ELEMENT_KEY: &str = "element-6066-11e4-a52e-4f735466cecf";

/// An element handle returned by find-element commands.
///
/// Serializes back to the same `{ELEMENT_KEY: id}` object, which is how
/// elements are passed as script arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebElement {
	#[serde(rename = "element-6066-11e4-a52e-4f735466cecf")]
	pub element_id: String,
}

impl WebElement {
	pub fn new(element_id: impl Into<String>) -> Self {
		Self {
			element_id: element_id.into(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn deserializes_chromedriver_shape() {
		let json = format!(r#"{{"{ELEMENT_KEY}": "f.1234.d.5678.e.1"}}"#);
		let element: WebElement = serde_json::from_str(&json).unwrap();
		assert_eq!(element.element_id, "f.1234.d.5678.e.1");
	}

	#[test]
	fn round_trips() {
		let element = WebElement::new("abc");
		let json = serde_json::to_string(&element).unwrap();
		let back: WebElement = serde_json::from_str(&json).unwrap();
		assert_eq!(element, back);
		assert!(json.contains(ELEMENT_KEY));
	}
}
