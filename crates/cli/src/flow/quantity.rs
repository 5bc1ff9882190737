//! Pick how many seats in the quantity popup.

use std::time::Duration;

use matinee::Page;
use tracing::info;

use crate::error::Result;
use crate::flow::SEAT_QTY_TIMEOUT;
use crate::selectors;
use crate::ui;

const POPUP_SETTLE: Duration = Duration::from_secs(1);

pub async fn select_quantity(page: &Page, seats: u8) -> Result<()> {
	ui::stage("Seat quantity");
	ui::note(&format!("Selecting quantity {seats}"));

	let option = page
		.wait()
		.timeout(SEAT_QTY_TIMEOUT)
		.until_clickable(&selectors::quantity_option(seats))
		.await?;

	option.scroll_into_view().await?;
	// the popup animates in; a native click can land on the overlay mid-slide
	match option.click().await {
		Ok(()) => {}
		Err(matinee::Error::ClickIntercepted { .. }) => {
			info!(target = "matinee", seats, "native click intercepted, using js click");
			option.js_click().await?;
		}
		Err(err) => return Err(err.into()),
	}
	tokio::time::sleep(POPUP_SETTLE).await;

	let proceed = page
		.wait()
		.timeout(SEAT_QTY_TIMEOUT)
		.until_clickable(&selectors::select_seats_button())
		.await?;
	// a div with a click handler, not a real button
	proceed.js_click().await?;
	ui::note("Clicked 'Select Seats'.");
	Ok(())
}
