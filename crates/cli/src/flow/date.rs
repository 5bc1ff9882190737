//! Pick the show date.

use matinee::Page;
use tracing::info;

use crate::error::Result;
use crate::flow::{DATE_LIST_SETTLE, DATE_SELECTION_TIMEOUT};
use crate::params::BookingRequest;
use crate::selectors;
use crate::ui;

pub async fn select_show_date(page: &Page, request: &BookingRequest) -> Result<()> {
	ui::stage("Date selection");
	ui::note(&format!(
		"Looking for {} (cell id {})",
		request.date_display, request.date_id
	));
	info!(target = "matinee", date_id = %request.date_id, "selecting date");

	let cell = page
		.wait()
		.timeout(DATE_SELECTION_TIMEOUT)
		.until_clickable(&selectors::date_cell(&request.date_id))
		.await?;
	cell.js_click().await?;

	ui::note("Date clicked.");
	// the theatre list refreshes in place after a date change
	tokio::time::sleep(DATE_LIST_SETTLE).await;
	Ok(())
}
