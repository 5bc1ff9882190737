//! Find the theatre and click the first showtime inside the window.

use std::time::Duration;

use chrono::NaiveTime;
use matinee::Page;
use tracing::{debug, info};

use crate::error::{BotError, Result};
use crate::flow::THEATRE_TIMEOUT;
use crate::params::{BookingRequest, parse_show_time};
use crate::selectors;
use crate::ui;

const LISTING_SETTLE: Duration = Duration::from_secs(1);

/// Inclusive on both ends: a show at exactly the earliest or latest time counts.
pub fn within_window(time: NaiveTime, earliest: NaiveTime, latest: NaiveTime) -> bool {
	earliest <= time && time <= latest
}

/// Returns the clicked showtime's text, for the progress report.
pub async fn select_showtime(page: &Page, request: &BookingRequest) -> Result<String> {
	ui::stage("Theatre and showtime");
	ui::note(&format!(
		"Theatre: '{}', window {} - {}",
		request.theatre,
		request.earliest.format("%H:%M"),
		request.latest.format("%H:%M")
	));
	if request.window_is_inverted() {
		ui::warn("earliest is after latest; no showtime can match unless that was intended");
	}

	// the listing lazy-loads below the fold
	page.execute("window.scrollBy(0, 500);").await?;
	tokio::time::sleep(LISTING_SETTLE).await;
	page.wait()
		.timeout(THEATRE_TIMEOUT)
		.until_present(&selectors::theatre_names())
		.await?;
	tokio::time::sleep(LISTING_SETTLE).await;

	let name_node = match page
		.find(&selectors::theatre_name_exact(&request.theatre))
		.await
	{
		Ok(node) => node,
		Err(err) if err.is_absence() => {
			return Err(BotError::TheatreNotFound(request.theatre.clone()));
		}
		Err(err) => return Err(err.into()),
	};
	name_node.scroll_into_view().await?;

	let block = name_node.find(&selectors::theatre_block()).await?;
	let chips = block.find_all(&selectors::showtimes()).await?;
	info!(
		target = "matinee",
		theatre = %request.theatre,
		showtimes = chips.len(),
		"theatre block found"
	);

	for chip in &chips {
		let text = match chip.text().await {
			Ok(text) => text,
			Err(err) if err.is_absence() => {
				debug!(target = "matinee", "showtime chip went stale, skipping");
				continue;
			}
			Err(err) => return Err(err.into()),
		};
		let text = text.trim().to_string();
		if text.is_empty() {
			continue;
		}

		let Some(time) = parse_show_time(&text) else {
			debug!(target = "matinee", chip = %text, "unparseable showtime text");
			continue;
		};

		if within_window(time, request.earliest, request.latest) {
			match chip.js_click().await {
				Ok(()) => {
					ui::success(&format!("Clicked showtime {text}."));
					return Ok(text);
				}
				Err(err) if err.is_absence() => continue,
				Err(err) => return Err(err.into()),
			}
		}
	}

	Err(BotError::NoShowtimeInRange {
		theatre: request.theatre.clone(),
		earliest: request.earliest.format("%H:%M").to_string(),
		latest: request.latest.format("%H:%M").to_string(),
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	fn time(hour: u32, minute: u32) -> NaiveTime {
		NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
	}

	#[test]
	fn window_is_inclusive() {
		let earliest = time(18, 0);
		let latest = time(22, 30);
		assert!(within_window(time(18, 0), earliest, latest));
		assert!(within_window(time(22, 30), earliest, latest));
		assert!(within_window(time(20, 15), earliest, latest));
	}

	#[test]
	fn window_excludes_outside_times() {
		let earliest = time(18, 0);
		let latest = time(22, 30);
		assert!(!within_window(time(17, 59), earliest, latest));
		assert!(!within_window(time(22, 31), earliest, latest));
	}

	#[test]
	fn inverted_window_matches_nothing() {
		let earliest = time(22, 0);
		let latest = time(18, 0);
		assert!(!within_window(time(20, 0), earliest, latest));
	}
}
