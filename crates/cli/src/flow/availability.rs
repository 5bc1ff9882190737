//! Poll until booking opens.
//!
//! Before a booking window opens the movie page simply has no "Book tickets"
//! button; the only signal is its appearance. A missed check costs nothing,
//! so the loop refreshes on a long interval and re-checks for block pages
//! after every reload.

use std::time::Duration;

use matinee::Page;
use tracing::info;

use crate::error::Result;
use crate::flow::navigate;
use crate::flow::{BOOK_BUTTON_CHECK_TIMEOUT, RELOAD_SETTLE};
use crate::selectors;
use crate::ui;

/// One probe's outcome. Real failures propagate as errors instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
	/// Button found and clicked; the date selector should be loading.
	Open,
	/// Button absent within the check timeout; booking not open yet.
	NotYet,
}

/// Look for the button once; click it if it is there.
pub async fn check(page: &Page) -> Result<Availability> {
	let button = selectors::book_tickets_button();
	match page
		.wait()
		.timeout(BOOK_BUTTON_CHECK_TIMEOUT)
		.until_clickable(&button)
		.await
	{
		Ok(element) => {
			ui::note("'Book tickets' is clickable; clicking.");
			element.js_click().await?;
			Ok(Availability::Open)
		}
		Err(matinee::Error::Timeout { .. }) => Ok(Availability::NotYet),
		Err(err) => Err(err.into()),
	}
}

/// Loop until [`check`] reports [`Availability::Open`], refreshing the page
/// between probes and bailing out if a refresh lands on a block page.
pub async fn wait_until_open(page: &Page, refresh_interval: Duration) -> Result<()> {
	ui::stage("Checking booking availability");

	loop {
		match check(page).await? {
			Availability::Open => {
				ui::success("Booking is open.");
				return Ok(());
			}
			Availability::NotYet => {
				let minutes = refresh_interval.as_secs_f64() / 60.0;
				ui::note(&format!(
					"Booking not open yet; refreshing in {minutes:.1} minutes."
				));
				info!(
					target = "matinee",
					interval_secs = refresh_interval.as_secs(),
					"book button absent, scheduling refresh"
				);
				tokio::time::sleep(refresh_interval).await;

				page.refresh().await?;
				tokio::time::sleep(RELOAD_SETTLE).await;
				navigate::ensure_not_blocked(page).await?;
			}
		}
	}
}
