//! The booking flow: eleven stages run strictly in order, with the pauses the
//! site needs between them.
//!
//! Stage timeouts and inter-stage pauses are tuned against the live site; the
//! values are deliberately generous because the seat-layout and payment pages
//! load heavy scripts.

pub mod availability;
pub mod checkout;
pub mod date;
pub mod navigate;
pub mod payment;
pub mod quantity;
pub mod seats;
pub mod showtime;

use std::path::Path;
use std::time::Duration;

use matinee::Page;
use tracing::debug;

use crate::artifacts;
use crate::config::Config;
use crate::error::Result;
use crate::params::BookingRequest;
use crate::ui;

pub(crate) const NAV_SETTLE: Duration = Duration::from_secs(3);
pub(crate) const BOOK_BUTTON_CHECK_TIMEOUT: Duration = Duration::from_secs(10);
pub(crate) const RELOAD_SETTLE: Duration = Duration::from_secs(5);
pub(crate) const DATE_SELECTION_TIMEOUT: Duration = Duration::from_secs(10);
pub(crate) const DATE_LIST_SETTLE: Duration = Duration::from_secs(2);
pub(crate) const THEATRE_TIMEOUT: Duration = Duration::from_secs(10);
pub(crate) const SEAT_QTY_TIMEOUT: Duration = Duration::from_secs(15);
pub(crate) const SEAT_SELECTION_TIMEOUT: Duration = Duration::from_secs(25);
pub(crate) const PAY_BUTTON_CHECK_TIMEOUT: Duration = Duration::from_secs(3);
pub(crate) const MAX_SEAT_CLICK_ATTEMPTS: usize = 50;
pub(crate) const ACCEPT_TC_TIMEOUT: Duration = Duration::from_secs(15);
pub(crate) const SUMMARY_PROCEED_TIMEOUT: Duration = Duration::from_secs(40);
pub(crate) const CONTACT_DETAILS_TIMEOUT: Duration = Duration::from_secs(20);
pub(crate) const PAYMENT_OPTION_TIMEOUT: Duration = Duration::from_secs(25);
pub(crate) const UPI_PAYMENT_TIMEOUT: Duration = Duration::from_secs(30);

const AFTER_BOOK_CLICK: Duration = Duration::from_secs(4);
const AFTER_DATE: Duration = Duration::from_secs(3);
const AFTER_SHOWTIME: Duration = Duration::from_secs(5);
const AFTER_QUANTITY: Duration = Duration::from_secs(5);
const AFTER_PAY_CLICK: Duration = Duration::from_secs(4);
const AFTER_TERMS: Duration = Duration::from_secs(5);
const AFTER_SUMMARY: Duration = Duration::from_secs(6);
const AFTER_CONTACT: Duration = Duration::from_secs(4);
const AFTER_UPI_CHOICE: Duration = Duration::from_secs(4);
const AFTER_PAYMENT: Duration = Duration::from_secs(5);

/// Drive the whole booking, from navigation to the UPI collect request.
pub async fn run(page: &Page, request: &BookingRequest, config: &Config) -> Result<()> {
	let dir = config.artifacts_dir.as_deref();
	let refresh = Duration::from_secs(config.refresh_interval_secs);

	guarded(page, dir, "navigate", navigate::to_movie(page, config, request)).await?;

	guarded(page, dir, "availability", availability::wait_until_open(page, refresh)).await?;
	pause(AFTER_BOOK_CLICK).await;

	guarded(page, dir, "select-date", date::select_show_date(page, request)).await?;
	pause(AFTER_DATE).await;

	let showtime = guarded(page, dir, "select-showtime", showtime::select_showtime(page, request)).await?;
	ui::note(&format!("Locked showtime {showtime} at {}", request.theatre));
	pause(AFTER_SHOWTIME).await;

	guarded(page, dir, "select-quantity", quantity::select_quantity(page, request.seats)).await?;
	pause(AFTER_QUANTITY).await;

	guarded(page, dir, "select-seats", seats::select_seats_and_pay(page, request)).await?;
	pause(AFTER_PAY_CLICK).await;

	guarded(page, dir, "accept-terms", checkout::accept_terms(page)).await?;
	pause(AFTER_TERMS).await;

	guarded(page, dir, "summary", checkout::proceed_on_summary(page)).await?;
	pause(AFTER_SUMMARY).await;

	guarded(page, dir, "contact-details", checkout::enter_contact_details(page, &request.phone)).await?;
	pause(AFTER_CONTACT).await;

	guarded(page, dir, "choose-upi", payment::choose_phonepe_upi(page)).await?;
	pause(AFTER_UPI_CHOICE).await;

	guarded(
		page,
		dir,
		"upi-payment",
		payment::submit_upi_payment(page, &request.upi_user, &request.upi_handle),
	)
	.await?;
	pause(AFTER_PAYMENT).await;

	Ok(())
}

/// Run one stage; on failure, grab a screenshot before the error propagates.
async fn guarded<T>(
	page: &Page,
	dir: Option<&Path>,
	stage: &'static str,
	step: impl Future<Output = Result<T>>,
) -> Result<T> {
	match step.await {
		Ok(value) => Ok(value),
		Err(err) => {
			artifacts::capture_failure(page, dir, stage).await;
			Err(err)
		}
	}
}

async fn pause(duration: Duration) {
	debug!(target = "matinee", secs = duration.as_secs(), "inter-stage pause");
	tokio::time::sleep(duration).await;
}
