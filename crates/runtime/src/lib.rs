//! chromedriver lifecycle, HTTP transport, and session plumbing.
//!
//! The layering mirrors the client API above it: [`driver`] locates a usable
//! chromedriver binary, [`DriverProcess`] owns the spawned process, [`Transport`]
//! speaks HTTP JSON to it, and [`Session`] scopes commands to one browser session.

pub mod driver;
mod error;
mod process;
mod session;
mod transport;

pub use error::{Error, Result};
pub use process::DriverProcess;
pub use session::Session;
pub use transport::Transport;

/// Re-exported so callers can issue commands without naming the HTTP crate.
pub use reqwest::Method;
