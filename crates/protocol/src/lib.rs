//! Wire types for the W3C WebDriver protocol.
//!
//! Serde shapes only, no IO. The runtime crate owns the transport and session
//! lifecycle; the core crate owns the user-facing client API.

mod capabilities;
mod element;
mod error;
mod locator;
mod script;
mod session;

pub use capabilities::*;
pub use element::*;
pub use error::*;
pub use locator::*;
pub use script::*;
pub use session::*;

use serde::Deserialize;

/// The `{"value": ...}` envelope every WebDriver response is wrapped in.
#[derive(Debug, Clone, Deserialize)]
pub struct ValueResponse<T> {
	pub value: T,
}
