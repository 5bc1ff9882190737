//! Every locator the booking flow touches, in one place.
//!
//! These are coupled to the site's current markup (generated class names
//! included) and break when it redeploys; keeping them together makes the
//! repair a one-file job.

use matinee::By;

/// "Book tickets" button on the movie page.
pub fn book_tickets_button() -> By {
	By::xpath("//button[.//span[contains(text(), 'Book tickets')]]")
}

/// Date cells carry their date as a DOM id, `YYYYMMDD`.
pub fn date_cell(date_id: &str) -> By {
	By::id(date_id)
}

/// Any theatre-name node in the listing.
pub fn theatre_names() -> By {
	By::xpath("//div[contains(@class, 'hvoTNx')]")
}

/// The theatre-name node matching one theatre exactly.
pub fn theatre_name_exact(name: &str) -> By {
	By::xpath(format!(
		"//div[contains(@class, 'hvoTNx') and normalize-space(text())={}]",
		xpath_literal(name)
	))
}

/// From a theatre-name node up to the block that holds its showtimes.
pub fn theatre_block() -> By {
	By::xpath("./ancestor::div[contains(@class, 'sc-e8nk8f-3')][1]")
}

/// Showtime chips inside a theatre block.
pub fn showtimes() -> By {
	By::xpath(".//div[contains(@class, 'sc-1vhizuf-2')]")
}

/// Quantity entry in the how-many-seats popup.
pub fn quantity_option(seats: u8) -> By {
	By::id(format!("pop_{seats}"))
}

/// "Select Seats" confirm in the quantity popup (a div acting as a button).
pub fn select_seats_button() -> By {
	By::id("proceed-Qty")
}

/// Anchors of seats still available on the layout.
pub fn available_seats() -> By {
	By::xpath("//div[contains(@class, 'seatI')]/a[contains(@class, '_available')]")
}

/// Re-find one seat's anchor by its container id, for freshness before a click.
pub fn seat_anchor(seat_id: &str) -> By {
	By::xpath(format!("//div[@id={}]/a", xpath_literal(seat_id)))
}

/// The pay button that activates once a valid seat selection exists.
pub fn pay_button() -> By {
	By::id("btmcntbook")
}

/// Accept on the terms popup.
pub fn terms_accept() -> By {
	By::id("btnPopupAccept")
}

/// Proceed on the booking summary.
pub fn summary_proceed() -> By {
	By::id("prePay")
}

/// The "Please wait..." placeholder shown while the summary proceed is disabled.
pub fn summary_wait_placeholder() -> By {
	By::id("btnseatdisab")
}

/// Mobile-number input on the payment page.
pub fn mobile_input() -> By {
	By::id("txtMobile")
}

/// Continue anchor under the contact-details section.
pub fn contact_continue() -> By {
	By::xpath("//div[@id='dContinueContactSec']/a[contains(@onclick, 'pay.fnValUserDetails')]")
}

/// The PhonePe option among the UPI payment labels.
pub fn phonepe_label() -> By {
	By::xpath("//label[contains(@onclick, \"pay.fnSetUPI\") and contains(@onclick, \"'PHONEPE'\")]")
}

/// UPI id input (the part before '@').
pub fn upi_username_input() -> By {
	By::id("txtUPIId")
}

/// UPI handle input (the part after '@').
pub fn upi_handle_input() -> By {
	By::id("dUPIVPADrop")
}

/// Final MAKE PAYMENT button.
pub fn make_payment_button() -> By {
	By::xpath(
		"//button[contains(@onclick, \"pay.fnPayUPI('UPI')\") and contains(normalize-space(), 'MAKE PAYMENT')]",
	)
}

/// Quote a string as an XPath 1.0 literal. XPath has no escape sequence for
/// quotes, so a value containing both kinds has to be split into a concat().
pub fn xpath_literal(value: &str) -> String {
	if !value.contains('\'') {
		return format!("'{value}'");
	}
	if !value.contains('"') {
		return format!("\"{value}\"");
	}

	let mut pieces = Vec::new();
	for (index, chunk) in value.split('\'').enumerate() {
		if index > 0 {
			pieces.push(String::from("\"'\""));
		}
		if !chunk.is_empty() {
			pieces.push(format!("'{chunk}'"));
		}
	}
	format!("concat({})", pieces.join(", "))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn xpath_literal_plain() {
		assert_eq!(xpath_literal("PVR Forum"), "'PVR Forum'");
	}

	#[test]
	fn xpath_literal_with_apostrophe() {
		assert_eq!(xpath_literal("O'Neil's"), r#"concat('O', "'", 'Neil', "'", 's')"#);
	}

	#[test]
	fn xpath_literal_with_double_quote() {
		// double quotes are safe inside a single-quoted literal
		assert_eq!(xpath_literal(r#"The "Grand""#), r#"'The "Grand"'"#);
	}

	#[test]
	fn xpath_literal_with_both_quote_kinds() {
		assert_eq!(
			xpath_literal(r#"O'Neil "Grand""#),
			r#"concat('O', "'", 'Neil "Grand"')"#
		);
	}

	#[test]
	fn theatre_selector_embeds_escaped_name() {
		let by = theatre_name_exact("INOX: City Centre");
		let matinee::By::XPath(expr) = by else {
			panic!("expected xpath");
		};
		assert!(expr.contains("'INOX: City Centre'"));
		assert!(expr.contains("normalize-space(text())"));
	}

	#[test]
	fn quantity_option_interpolates_count() {
		assert_eq!(quantity_option(3), matinee::By::Id("pop_3".into()));
	}
}
