//! Owns a spawned chromedriver process.

use std::net::TcpListener;
use std::path::Path;
use std::time::Duration;

use matinee_protocol::{StatusResponse, ValueResponse};
use tokio::process::{Child, Command};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};

const STARTUP_TIMEOUT: Duration = Duration::from_secs(15);
const STARTUP_POLL: Duration = Duration::from_millis(100);

/// A running chromedriver. Killing it tears down the browser it controls.
#[derive(Debug)]
pub struct DriverProcess {
	child: Child,
	port: u16,
}

impl DriverProcess {
	/// Spawn `chromedriver --port=N` and wait for its status endpoint to report
	/// ready. `port` 0 picks a free port.
	pub async fn spawn(path: &Path, port: u16) -> Result<Self> {
		let port = if port == 0 { pick_free_port()? } else { port };

		debug!(target = "matinee_runtime", path = %path.display(), port, "spawning chromedriver");
		let child = Command::new(path)
			.arg(format!("--port={port}"))
			.stdout(std::process::Stdio::null())
			.stderr(std::process::Stdio::null())
			.kill_on_drop(true)
			.spawn()
			.map_err(|err| {
				if err.kind() == std::io::ErrorKind::NotFound {
					Error::LaunchFailed(format!("{} does not exist", path.display()))
				} else {
					Error::LaunchFailed(err.to_string())
				}
			})?;

		let process = Self { child, port };
		process.wait_ready().await?;
		info!(target = "matinee_runtime", port, "chromedriver ready");
		Ok(process)
	}

	pub fn port(&self) -> u16 {
		self.port
	}

	pub fn base_url(&self) -> String {
		format!("http://127.0.0.1:{}", self.port)
	}

	async fn wait_ready(&self) -> Result<()> {
		let client = reqwest::Client::new();
		let status_url = format!("{}/status", self.base_url());
		let deadline = tokio::time::Instant::now() + STARTUP_TIMEOUT;

		loop {
			match client.get(&status_url).send().await {
				Ok(resp) => {
					if let Ok(status) = resp.json::<ValueResponse<StatusResponse>>().await {
						if status.value.ready {
							return Ok(());
						}
					}
				}
				Err(err) => {
					debug!(target = "matinee_runtime", %err, "status probe failed, retrying");
				}
			}

			if tokio::time::Instant::now() >= deadline {
				return Err(Error::StartupTimeout {
					ms: STARTUP_TIMEOUT.as_millis() as u64,
				});
			}
			tokio::time::sleep(STARTUP_POLL).await;
		}
	}

	/// Kill the process. Also runs on drop via `kill_on_drop`; calling it
	/// explicitly lets shutdown be awaited and logged.
	pub async fn stop(&mut self) {
		if let Err(err) = self.child.kill().await {
			warn!(target = "matinee_runtime", %err, "failed to kill chromedriver");
		}
		let _ = self.child.wait().await;
	}
}

fn pick_free_port() -> Result<u16> {
	let listener = TcpListener::bind(("127.0.0.1", 0))
		.map_err(|err| Error::LaunchFailed(format!("no free port: {err}")))?;
	let port = listener
		.local_addr()
		.map_err(|err| Error::LaunchFailed(format!("no free port: {err}")))?
		.port();
	Ok(port)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn picks_a_nonzero_free_port() {
		let port = pick_free_port().unwrap();
		assert!(port > 0);
	}

	#[tokio::test]
	async fn spawn_of_missing_binary_reports_path() {
		let err = DriverProcess::spawn(Path::new("/nonexistent/chromedriver"), 0)
			.await
			.unwrap_err();
		match err {
			Error::LaunchFailed(msg) => assert!(msg.contains("/nonexistent/chromedriver")),
			other => panic!("unexpected error: {other:?}"),
		}
	}
}
