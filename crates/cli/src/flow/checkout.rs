//! Terms popup, booking summary, and contact details.

use std::time::Duration;

use matinee::Page;
use tracing::info;

use crate::error::Result;
use crate::flow::{ACCEPT_TC_TIMEOUT, CONTACT_DETAILS_TIMEOUT, SUMMARY_PROCEED_TIMEOUT};
use crate::selectors;
use crate::ui;

const INPUT_SETTLE: Duration = Duration::from_millis(300);
const POST_INPUT_SETTLE: Duration = Duration::from_millis(500);

pub async fn accept_terms(page: &Page) -> Result<()> {
	ui::stage("Terms & conditions");

	let accept = page
		.wait()
		.timeout(ACCEPT_TC_TIMEOUT)
		.until_clickable(&selectors::terms_accept())
		.await?;
	accept.js_click().await?;
	ui::note("Accepted terms.");
	Ok(())
}

pub async fn proceed_on_summary(page: &Page) -> Result<()> {
	ui::stage("Booking summary");

	let wait = page.wait().timeout(SUMMARY_PROCEED_TIMEOUT);
	wait.until_present(&selectors::summary_proceed()).await?;

	match wait.until_clickable(&selectors::summary_proceed()).await {
		Ok(proceed) => {
			proceed.js_click().await?;
			ui::note("Clicked 'Proceed'.");
			Ok(())
		}
		Err(err @ matinee::Error::Timeout { .. }) => {
			// the summary keeps a disabled placeholder while totals compute;
			// report it so the timeout is explainable
			if let Ok(placeholder) = page.find(&selectors::summary_wait_placeholder()).await {
				if placeholder.is_displayed().await.unwrap_or(false) {
					ui::note("('Please wait...' is still showing on the summary.)");
				}
			}
			Err(err.into())
		}
		Err(err) => Err(err.into()),
	}
}

pub async fn enter_contact_details(page: &Page, phone: &str) -> Result<()> {
	ui::stage("Contact details");

	let wait = page.wait().timeout(CONTACT_DETAILS_TIMEOUT);

	let mobile = wait.until_clickable(&selectors::mobile_input()).await?;
	// clear first: the field pre-fills a +91 prefix
	mobile.clear().await?;
	tokio::time::sleep(INPUT_SETTLE).await;
	mobile.send_keys(phone).await?;
	info!(target = "matinee", "mobile number entered");
	tokio::time::sleep(POST_INPUT_SETTLE).await;

	let proceed = wait.until_clickable(&selectors::contact_continue()).await?;
	proceed.js_click().await?;
	ui::note("Submitted contact details.");
	Ok(())
}
