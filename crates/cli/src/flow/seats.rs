//! Lock seats on the layout.
//!
//! The layout auto-expands a single seat click to the requested quantity and
//! only then arms the pay button. So the strategy is: click one available
//! seat, give the pay button a short window to become clickable, and move on
//! to the next seat if it does not.

use std::collections::HashSet;
use std::time::Duration;

use matinee::{By, Page};
use tracing::{debug, info};

use crate::error::{BotError, Result};
use crate::flow::{MAX_SEAT_CLICK_ATTEMPTS, PAY_BUTTON_CHECK_TIMEOUT, SEAT_SELECTION_TIMEOUT};
use crate::params::BookingRequest;
use crate::selectors;
use crate::ui;

const LAYOUT_SETTLE: Duration = Duration::from_secs(2);
const SELECT_SCRIPT_SETTLE: Duration = Duration::from_millis(500);
const PRE_CLICK_PAUSE: Duration = Duration::from_millis(300);

/// Seat container ids look like `A_12`; anything else is decoration. Ids we
/// already tried are skipped rather than re-clicked (a second click would
/// deselect).
pub fn usable_seat_id(id: Option<String>, tried: &HashSet<String>) -> Option<String> {
	let id = id?;
	if id.is_empty() || !id.contains('_') || tried.contains(&id) {
		return None;
	}
	Some(id)
}

pub async fn select_seats_and_pay(page: &Page, request: &BookingRequest) -> Result<()> {
	ui::stage("Seat selection");
	ui::note(&format!(
		"Trying to lock {} seats by probing the layout",
		request.seats
	));

	page.wait()
		.timeout(SEAT_SELECTION_TIMEOUT)
		.until_present(&selectors::available_seats())
		.await?;
	tokio::time::sleep(LAYOUT_SETTLE).await;

	let anchors = page.find_all(&selectors::available_seats()).await?;
	if anchors.is_empty() {
		return Err(BotError::SeatsNotSelectable { attempts: 0 });
	}
	info!(target = "matinee", available = anchors.len(), "seat layout loaded");

	let mut tried: HashSet<String> = HashSet::new();

	for (attempt, anchor) in anchors.iter().take(MAX_SEAT_CLICK_ATTEMPTS).enumerate() {
		// the id lives on the seat's container div, one level up
		let container_id = match anchor.find(&By::xpath("..")).await {
			Ok(container) => container.attr("id").await.unwrap_or(None),
			Err(err) if err.is_absence() => continue,
			Err(err) => return Err(err.into()),
		};

		let Some(seat_id) = usable_seat_id(container_id, &tried) else {
			debug!(target = "matinee", attempt, "skipping seat without a usable id");
			continue;
		};
		tried.insert(seat_id.clone());
		info!(target = "matinee", attempt, seat = %seat_id, "probing seat");

		// re-find by id for freshness; the initial list goes stale as the
		// layout re-renders around selections
		let fresh = match page.find(&selectors::seat_anchor(&seat_id)).await {
			Ok(element) => element,
			Err(err) if err.is_absence() => {
				tried.remove(&seat_id);
				continue;
			}
			Err(err) => return Err(err.into()),
		};
		if let Err(err) = fresh.scroll_into_view().await {
			if err.is_absence() {
				tried.remove(&seat_id);
				continue;
			}
			return Err(err.into());
		}
		tokio::time::sleep(PRE_CLICK_PAUSE).await;

		// the page's own selection entry point; clicking the anchor directly
		// misses the auto-expand logic
		let seat_literal = serde_json::to_string(&seat_id).map_err(|err| {
			BotError::InvalidInput(format!("seat id not encodable: {err}"))
		})?;
		page.execute(&format!("fnSelectSeat({seat_literal});")).await?;
		tokio::time::sleep(SELECT_SCRIPT_SETTLE).await;

		match page
			.wait()
			.timeout(PAY_BUTTON_CHECK_TIMEOUT)
			.until_clickable(&selectors::pay_button())
			.await
		{
			Ok(pay_button) => {
				ui::success(&format!("Pay button armed after seat {seat_id}."));
				pay_button.js_click().await?;
				ui::note("Clicked 'Pay'.");
				return Ok(());
			}
			Err(matinee::Error::Timeout { .. }) => {
				debug!(target = "matinee", seat = %seat_id, "pay button not armed, next seat");
				continue;
			}
			Err(err) => return Err(err.into()),
		}
	}

	Err(BotError::SeatsNotSelectable {
		attempts: tried.len(),
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accepts_fresh_underscore_ids() {
		let tried = HashSet::new();
		assert_eq!(
			usable_seat_id(Some("A_12".into()), &tried),
			Some("A_12".into())
		);
	}

	#[test]
	fn rejects_missing_empty_and_plain_ids() {
		let tried = HashSet::new();
		assert_eq!(usable_seat_id(None, &tried), None);
		assert_eq!(usable_seat_id(Some(String::new()), &tried), None);
		assert_eq!(usable_seat_id(Some("legend".into()), &tried), None);
	}

	#[test]
	fn rejects_already_tried_ids() {
		let mut tried = HashSet::new();
		tried.insert("A_12".to_string());
		assert_eq!(usable_seat_id(Some("A_12".into()), &tried), None);
		assert_eq!(
			usable_seat_id(Some("B_03".into()), &tried),
			Some("B_03".into())
		);
	}
}
