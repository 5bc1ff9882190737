//! Script execution payloads.

use serde::Serialize;

use crate::WebElement;

/// Body of `POST /session/{id}/execute/sync`.
#[derive(Debug, Clone, Serialize)]
pub struct ExecuteScriptRequest {
	pub script: String,
	pub args: Vec<serde_json::Value>,
}

impl ExecuteScriptRequest {
	pub fn new(script: impl Into<String>) -> Self {
		Self {
			script: script.into(),
			args: Vec::new(),
		}
	}

	/// Append an element argument; it reaches the script as a live DOM node.
	pub fn element_arg(mut self, element: &WebElement) -> Self {
		// serializing a WebElement cannot fail: it is a single-entry string map
		self.args
			.push(serde_json::to_value(element).unwrap_or(serde_json::Value::Null));
		self
	}

	pub fn arg(mut self, value: serde_json::Value) -> Self {
		self.args.push(value);
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ELEMENT_KEY;

	#[test]
	fn element_args_serialize_as_refs() {
		let req = ExecuteScriptRequest::new("arguments[0].click();")
			.element_arg(&WebElement::new("e.9"));
		let json = serde_json::to_value(&req).unwrap();
		assert_eq!(json["script"], "arguments[0].click();");
		assert_eq!(json["args"][0][ELEMENT_KEY], "e.9");
	}
}
