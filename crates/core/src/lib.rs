//! High-level WebDriver client used by the booking flow.
//!
//! [`Browser`] owns the chromedriver process and session; [`Page`] is the
//! command surface for the single window the flow drives; [`Element`] wraps a
//! wire element reference; [`Wait`] polls conditions with a timeout.

mod browser;
mod by;
mod element;
mod error;
mod page;
mod wait;

pub use browser::{Browser, LaunchOptions};
pub use by::By;
pub use element::Element;
pub use error::{Error, Result};
pub use page::Page;
pub use wait::Wait;

pub use matinee_runtime as runtime;
