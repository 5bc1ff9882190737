//! Browser lifecycle: locate driver, spawn it, open a session.

use std::path::PathBuf;
use std::sync::Arc;

use matinee_protocol::{ChromeOptions, NewSessionRequest};
use matinee_runtime::{DriverProcess, Session, Transport, driver};
use tracing::{info, warn};

use crate::error::Result;
use crate::page::Page;

/// Chrome flags the flow always runs with. The persistent profile keeps the
/// site's login cookies between runs; the rest keep Chrome quiet in containers.
const BASE_ARGS: &[&str] = &[
	"--no-first-run",
	"--no-service-autorun",
	"--password-store=basic",
	"--no-sandbox",
	"--disable-dev-shm-usage",
];

/// Options for [`Browser::launch`].
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
	profile_dir: Option<PathBuf>,
	binary: Option<PathBuf>,
	driver: Option<PathBuf>,
	port: u16,
	headless: bool,
	extra_args: Vec<String>,
}

impl LaunchOptions {
	pub fn new() -> Self {
		Self::default()
	}

	/// Directory for the persistent Chrome profile (`--user-data-dir`).
	pub fn profile_dir(mut self, dir: impl Into<PathBuf>) -> Self {
		self.profile_dir = Some(dir.into());
		self
	}

	/// Chrome/Chromium binary override.
	pub fn binary(mut self, path: impl Into<PathBuf>) -> Self {
		self.binary = Some(path.into());
		self
	}

	/// chromedriver binary override; discovery runs when absent.
	pub fn driver(mut self, path: impl Into<PathBuf>) -> Self {
		self.driver = Some(path.into());
		self
	}

	/// Fixed chromedriver port; 0 picks a free one.
	pub fn port(mut self, port: u16) -> Self {
		self.port = port;
		self
	}

	pub fn headless(mut self, headless: bool) -> Self {
		self.headless = headless;
		self
	}

	pub fn arg(mut self, arg: impl Into<String>) -> Self {
		self.extra_args.push(arg.into());
		self
	}

	fn chrome_options(&self) -> ChromeOptions {
		let mut options = ChromeOptions::new();
		if let Some(binary) = &self.binary {
			options = options.binary(binary.display().to_string());
		}
		if let Some(profile) = &self.profile_dir {
			options = options.arg(format!("--user-data-dir={}", profile.display()));
		}
		for arg in BASE_ARGS {
			options = options.arg(*arg);
		}
		if self.headless {
			options = options.arg("--headless=new");
		}
		for arg in &self.extra_args {
			options = options.arg(arg.clone());
		}
		options
	}
}

/// A launched browser: the driver process plus the one session the flow uses.
pub struct Browser {
	process: DriverProcess,
	session: Arc<Session>,
	page: Page,
}

impl Browser {
	pub async fn launch(options: LaunchOptions) -> Result<Self> {
		let driver_path = driver::locate_chromedriver(options.driver.as_deref())?;
		let mut process = DriverProcess::spawn(&driver_path, options.port).await?;

		let transport = Transport::new(process.base_url());
		let request = NewSessionRequest::chrome(options.chrome_options());
		let session = match Session::create(transport, &request).await {
			Ok(session) => session,
			Err(err) => {
				process.stop().await;
				return Err(err.into());
			}
		};

		info!(
			target = "matinee",
			session = %session.id(),
			port = process.port(),
			"browser launched"
		);

		let session = Arc::new(session);
		let page = Page::new(session.clone());
		Ok(Self {
			process,
			session,
			page,
		})
	}

	pub fn page(&self) -> &Page {
		&self.page
	}

	/// Best-effort teardown: delete the session, then stop the driver.
	/// Failures are logged, not returned; there is nothing useful a caller
	/// can do with them at shutdown.
	pub async fn close(mut self) {
		if let Err(err) = self.session.delete().await {
			warn!(target = "matinee", %err, "session delete failed");
		}
		self.process.stop().await;
		info!(target = "matinee", "browser closed");
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn profile_and_binary_reach_capabilities() {
		let options = LaunchOptions::new()
			.profile_dir("/tmp/profile")
			.binary("/usr/bin/chromium-browser")
			.headless(true)
			.chrome_options();

		assert_eq!(options.binary.as_deref(), Some("/usr/bin/chromium-browser"));
		assert!(options.args.contains(&"--user-data-dir=/tmp/profile".to_string()));
		assert!(options.args.contains(&"--no-sandbox".to_string()));
		assert!(options.args.contains(&"--headless=new".to_string()));
	}

	#[test]
	fn headless_flag_absent_by_default() {
		let options = LaunchOptions::new().chrome_options();
		assert!(!options.args.iter().any(|arg| arg.starts_with("--headless")));
	}
}
