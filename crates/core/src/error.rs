use matinee_protocol::ErrorCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
	#[error("timeout after {ms}ms waiting for: {condition}")]
	Timeout { ms: u64, condition: String },

	#[error("no such element: {selector}")]
	NoSuchElement { selector: String },

	#[error("stale element reference: {selector}")]
	StaleElement { selector: String },

	#[error("click intercepted: {selector}")]
	ClickIntercepted { selector: String },

	#[error("element not interactable: {selector}")]
	NotInteractable { selector: String },

	#[error("screenshot failed: {0}")]
	Screenshot(String),

	#[error(transparent)]
	Runtime(#[from] matinee_runtime::Error),
}

impl Error {
	/// Lift a wire error into the variant the flow matches on, carrying the
	/// selector the command was about. Anything unclassified stays a runtime
	/// error with its original message.
	pub(crate) fn classify(err: matinee_runtime::Error, selector: &str) -> Self {
		match err.wire_code() {
			Some(ErrorCode::NoSuchElement) => Error::NoSuchElement {
				selector: selector.to_string(),
			},
			Some(ErrorCode::StaleElementReference) => Error::StaleElement {
				selector: selector.to_string(),
			},
			Some(ErrorCode::ElementClickIntercepted) => Error::ClickIntercepted {
				selector: selector.to_string(),
			},
			Some(ErrorCode::ElementNotInteractable) => Error::NotInteractable {
				selector: selector.to_string(),
			},
			_ => Error::Runtime(err),
		}
	}

	/// True when the element is merely not there (yet): the retryable cases
	/// for presence/clickability polling.
	pub fn is_absence(&self) -> bool {
		matches!(
			self,
			Error::NoSuchElement { .. } | Error::StaleElement { .. }
		)
	}

	pub fn hint(&self) -> Option<&'static str> {
		match self {
			Error::Runtime(err) => err.hint(),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn wire(code: &str) -> matinee_runtime::Error {
		matinee_runtime::Error::Wire {
			code: ErrorCode::from_wire(code),
			message: format!("{code}: detail"),
		}
	}

	#[test]
	fn classifies_element_errors() {
		let err = Error::classify(wire("no such element"), "#prePay");
		assert!(matches!(err, Error::NoSuchElement { ref selector } if selector == "#prePay"));
		assert!(err.is_absence());

		let err = Error::classify(wire("stale element reference"), "#pop_2");
		assert!(err.is_absence());

		let err = Error::classify(wire("element click intercepted"), "#pop_2");
		assert!(matches!(err, Error::ClickIntercepted { .. }));
		assert!(!err.is_absence());
	}

	#[test]
	fn unclassified_errors_pass_through() {
		let err = Error::classify(wire("invalid session id"), "#x");
		assert!(matches!(err, Error::Runtime(_)));
	}
}
