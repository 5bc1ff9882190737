//! Payment method and the final UPI submit.

use std::time::Duration;

use matinee::Page;
use tracing::info;

use crate::error::Result;
use crate::flow::{PAYMENT_OPTION_TIMEOUT, UPI_PAYMENT_TIMEOUT};
use crate::selectors;
use crate::ui;

const FIELD_SETTLE: Duration = Duration::from_millis(200);
const FORM_SETTLE: Duration = Duration::from_millis(500);

pub async fn choose_phonepe_upi(page: &Page) -> Result<()> {
	ui::stage("Payment method");

	let label = page
		.wait()
		.timeout(PAYMENT_OPTION_TIMEOUT)
		.until_clickable(&selectors::phonepe_label())
		.await?;
	label.scroll_into_view().await?;
	tokio::time::sleep(FIELD_SETTLE).await;
	// a real <label>; the native click is the one that toggles the radio
	label.click().await?;
	ui::note("Selected PhonePe UPI.");
	Ok(())
}

pub async fn submit_upi_payment(page: &Page, upi_user: &str, upi_handle: &str) -> Result<()> {
	ui::stage("UPI payment");

	let wait = page.wait().timeout(UPI_PAYMENT_TIMEOUT);

	let username = wait.until_clickable(&selectors::upi_username_input()).await?;
	username.clear().await?;
	tokio::time::sleep(FIELD_SETTLE).await;
	username.send_keys(upi_user).await?;

	let handle = wait.until_clickable(&selectors::upi_handle_input()).await?;
	handle.clear().await?;
	tokio::time::sleep(FIELD_SETTLE).await;
	handle.send_keys(upi_handle).await?;
	info!(target = "matinee", "upi id entered");
	tokio::time::sleep(FORM_SETTLE).await;

	let pay = wait.until_clickable(&selectors::make_payment_button()).await?;
	pay.click().await?;
	ui::note("Clicked 'MAKE PAYMENT'.");
	Ok(())
}
