//! Booking parameters: raw CLI inputs and their resolved, validated form.

use std::io::{self, BufRead, Write};
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate, NaiveTime};
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::error::{BotError, Result};

const MONTHS: [&str; 12] = [
	"JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// The showtime formats users actually type.
const TIME_FORMATS: [&str; 3] = ["%I:%M %p", "%H:%M", "%I:%M%p"];

/// Raw inputs from CLI flags. Everything optional; [`fill_missing_interactive`]
/// prompts for whatever was not passed.
///
/// [`fill_missing_interactive`]: BookingArgs::fill_missing_interactive
#[derive(Debug, Clone, Default, Args, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingArgs {
	/// City slug as it appears in the site URL (e.g. bengaluru)
	#[arg(long, value_name = "SLUG")]
	#[serde(default)]
	pub location: Option<String>,

	/// Movie code from the movie page URL (e.g. ET00310216)
	#[arg(long, value_name = "CODE")]
	#[serde(default)]
	pub movie: Option<String>,

	/// Show date as "MMM DD" (e.g. "AUG 14")
	#[arg(long, value_name = "MMM DD")]
	#[serde(default)]
	pub date: Option<String>,

	/// Exact theatre name as the listing shows it
	#[arg(long, value_name = "NAME")]
	#[serde(default)]
	pub theatre: Option<String>,

	/// Earliest acceptable showtime (HH:MM or HH:MM AM/PM)
	#[arg(long, value_name = "TIME")]
	#[serde(default)]
	pub earliest: Option<String>,

	/// Latest acceptable showtime (HH:MM or HH:MM AM/PM)
	#[arg(long, value_name = "TIME")]
	#[serde(default)]
	pub latest: Option<String>,

	/// Number of seats (1-10)
	#[arg(long, value_name = "N")]
	#[serde(default)]
	pub seats: Option<u8>,

	/// 10-digit mobile number for the booking contact
	#[arg(long, value_name = "DIGITS")]
	#[serde(default)]
	pub phone: Option<String>,

	/// UPI id before the '@'
	#[arg(long, value_name = "USER")]
	#[serde(default)]
	pub upi_user: Option<String>,

	/// UPI handle after the '@' (e.g. ybl, okhdfcbank, axl)
	#[arg(long, value_name = "HANDLE")]
	#[serde(default)]
	pub upi_handle: Option<String>,
}

impl BookingArgs {
	/// Prompt on stdin for any parameter not given as a flag.
	pub fn fill_missing_interactive(&mut self) -> io::Result<()> {
		let stdin = io::stdin();
		let mut lines = stdin.lock();

		prompt_if_missing(&mut lines, &mut self.location, "Location slug")?;
		prompt_if_missing(&mut lines, &mut self.movie, "Movie code")?;
		prompt_if_missing(&mut lines, &mut self.date, "Date (MMM DD, e.g. AUG 14)")?;
		prompt_if_missing(&mut lines, &mut self.theatre, "Exact theatre name")?;
		prompt_if_missing(&mut lines, &mut self.earliest, "Earliest showtime (HH:MM or HH:MM AM/PM)")?;
		prompt_if_missing(&mut lines, &mut self.latest, "Latest showtime (HH:MM or HH:MM AM/PM)")?;

		if self.seats.is_none() {
			let raw = read_prompted(&mut lines, "Number of seats (1-10)")?;
			// unparseable input becomes 0 and fails validation with the rest
			self.seats = Some(raw.parse().unwrap_or(0));
		}

		prompt_if_missing(&mut lines, &mut self.phone, "10-digit mobile number")?;
		prompt_if_missing(&mut lines, &mut self.upi_user, "UPI username (before the '@')")?;
		prompt_if_missing(&mut lines, &mut self.upi_handle, "UPI handle (after the '@')")?;
		Ok(())
	}

	/// Validate everything and produce the resolved request. `today` is
	/// injected so year inference is deterministic under test.
	pub fn resolve(self, today: NaiveDate) -> Result<BookingRequest> {
		let location = required(self.location, "location")?.trim().to_lowercase();
		let movie = required(self.movie, "movie")?.trim().to_string();
		let date_raw = required(self.date, "date")?.trim().to_uppercase();
		let theatre = required(self.theatre, "theatre")?.trim().to_string();
		let earliest_raw = required(self.earliest, "earliest")?;
		let latest_raw = required(self.latest, "latest")?;
		let phone = required(self.phone, "phone")?.trim().to_string();
		let upi_user = required(self.upi_user, "upi-user")?.trim().to_string();
		let upi_handle = required(self.upi_handle, "upi-handle")?.trim().to_string();

		if location.is_empty() || movie.is_empty() || theatre.is_empty() {
			return Err(BotError::InvalidInput(
				"location, movie, and theatre must not be empty".into(),
			));
		}

		let date_id = show_date_id(&date_raw, today)?;

		let earliest = parse_show_time(&earliest_raw).ok_or_else(|| {
			BotError::InvalidInput(format!(
				"could not parse time '{earliest_raw}'; use HH:MM or HH:MM AM/PM"
			))
		})?;
		let latest = parse_show_time(&latest_raw).ok_or_else(|| {
			BotError::InvalidInput(format!(
				"could not parse time '{latest_raw}'; use HH:MM or HH:MM AM/PM"
			))
		})?;

		let seats = self
			.seats
			.ok_or_else(|| BotError::InvalidInput("seat count is required".into()))?;
		if !(1..=10).contains(&seats) {
			return Err(BotError::InvalidInput(format!(
				"seat count must be 1-10, got {seats}"
			)));
		}

		validate_phone(&phone)?;
		validate_upi_part(&upi_user, "UPI username")?;
		validate_upi_part(&upi_handle, "UPI handle")?;

		Ok(BookingRequest {
			location,
			movie,
			date_display: date_raw,
			date_id,
			theatre,
			earliest,
			latest,
			seats,
			phone,
			upi_user,
			upi_handle,
		})
	}
}

/// Fully validated booking parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
	pub location: String,
	pub movie: String,
	/// As entered, uppercased ("AUG 14"); used in messages.
	pub date_display: String,
	/// The date cell's DOM id, `YYYYMMDD`.
	pub date_id: String,
	pub theatre: String,
	pub earliest: NaiveTime,
	pub latest: NaiveTime,
	pub seats: u8,
	pub phone: String,
	pub upi_user: String,
	pub upi_handle: String,
}

impl BookingRequest {
	pub fn upi_id(&self) -> String {
		format!("{}@{}", self.upi_user, self.upi_handle)
	}

	/// True when start > end was entered; the flow warns but proceeds, since
	/// a window like "11:00 PM - 01:00 AM" is a typo more often than intent.
	pub fn window_is_inverted(&self) -> bool {
		self.earliest > self.latest
	}
}

/// Compute the date cell id (`YYYYMMDD`) from "MMM DD" input.
///
/// The year is inferred: a month earlier than the current one means next year
/// (booking windows only open days ahead, never months behind).
pub fn show_date_id(input: &str, today: NaiveDate) -> Result<String> {
	let mut parts = input.split_whitespace();
	let (month_abbr, day_str) = match (parts.next(), parts.next(), parts.next()) {
		(Some(month), Some(day), None) => (month, day),
		_ => {
			return Err(BotError::InvalidInput(format!(
				"date must be 'MMM DD', got '{input}'"
			)));
		}
	};

	let month = MONTHS
		.iter()
		.position(|abbr| *abbr == month_abbr)
		.map(|index| index as u32 + 1)
		.ok_or_else(|| {
			BotError::InvalidInput(format!("unknown month '{month_abbr}' in '{input}'"))
		})?;

	let day: u32 = day_str
		.parse()
		.map_err(|_| BotError::InvalidInput(format!("bad day '{day_str}' in '{input}'")))?;
	if !(1..=31).contains(&day) {
		return Err(BotError::InvalidInput(format!(
			"day must be 1-31, got {day}"
		)));
	}

	let year = if month < today.month() {
		today.year() + 1
	} else {
		today.year()
	};

	Ok(format!("{year}{month:02}{day:02}"))
}

/// Parse a showtime string the way people type it, normalized first.
pub fn parse_show_time(input: &str) -> Option<NaiveTime> {
	let normalized = input.trim().to_uppercase();
	TIME_FORMATS
		.iter()
		.find_map(|format| NaiveTime::parse_from_str(&normalized, format).ok())
}

static PHONE_PATTERN: LazyLock<regex_lite::Regex> =
	LazyLock::new(|| regex_lite::Regex::new(r"^\d{10}$").expect("static pattern"));
static UPI_PART_PATTERN: LazyLock<regex_lite::Regex> =
	LazyLock::new(|| regex_lite::Regex::new(r"^[A-Za-z0-9._-]+$").expect("static pattern"));

fn validate_phone(phone: &str) -> Result<()> {
	if PHONE_PATTERN.is_match(phone) {
		Ok(())
	} else {
		Err(BotError::InvalidInput(format!(
			"phone must be exactly 10 digits, got '{phone}'"
		)))
	}
}

fn validate_upi_part(part: &str, label: &str) -> Result<()> {
	if part.contains('@') {
		return Err(BotError::InvalidInput(format!(
			"{label} must be entered without the '@'"
		)));
	}
	if UPI_PART_PATTERN.is_match(part) {
		Ok(())
	} else {
		Err(BotError::InvalidInput(format!(
			"{label} '{part}' contains invalid characters"
		)))
	}
}

fn required(value: Option<String>, flag: &str) -> Result<String> {
	value.ok_or_else(|| BotError::InvalidInput(format!("--{flag} is required")))
}

fn prompt_if_missing(
	lines: &mut impl BufRead,
	slot: &mut Option<String>,
	label: &str,
) -> io::Result<()> {
	if slot.is_none() {
		let value = read_prompted(lines, label)?;
		*slot = Some(value);
	}
	Ok(())
}

fn read_prompted(lines: &mut impl BufRead, label: &str) -> io::Result<String> {
	print!("{label}: ");
	io::stdout().flush()?;
	let mut line = String::new();
	lines.read_line(&mut line)?;
	Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn date(year: i32, month: u32, day: u32) -> NaiveDate {
		NaiveDate::from_ymd_opt(year, month, day).unwrap()
	}

	fn complete_args() -> BookingArgs {
		BookingArgs {
			location: Some("bengaluru".into()),
			movie: Some("ET00310216".into()),
			date: Some("aug 14".into()),
			theatre: Some("PVR: Forum Mall".into()),
			earliest: Some("6:00 PM".into()),
			latest: Some("10:30 PM".into()),
			seats: Some(2),
			phone: Some("9876543210".into()),
			upi_user: Some("moviefan_7".into()),
			upi_handle: Some("ybl".into()),
		}
	}

	#[test]
	fn date_id_same_year() {
		assert_eq!(show_date_id("AUG 14", date(2026, 8, 6)).unwrap(), "20260814");
		assert_eq!(show_date_id("DEC 1", date(2026, 8, 6)).unwrap(), "20261201");
	}

	#[test]
	fn date_id_rolls_to_next_year() {
		assert_eq!(show_date_id("JAN 05", date(2026, 12, 20)).unwrap(), "20270105");
		assert_eq!(show_date_id("MAR 31", date(2026, 8, 6)).unwrap(), "20270331");
	}

	#[test]
	fn date_id_current_month_stays() {
		assert_eq!(show_date_id("AUG 06", date(2026, 8, 6)).unwrap(), "20260806");
	}

	#[test]
	fn date_id_rejects_garbage() {
		assert!(show_date_id("AUGUST 14", date(2026, 8, 6)).is_err());
		assert!(show_date_id("AUG", date(2026, 8, 6)).is_err());
		assert!(show_date_id("AUG 14 2026", date(2026, 8, 6)).is_err());
		assert!(show_date_id("AUG 32", date(2026, 8, 6)).is_err());
	}

	#[test]
	fn parses_all_time_formats() {
		let six_thirty_pm = NaiveTime::from_hms_opt(18, 30, 0).unwrap();
		assert_eq!(parse_show_time("6:30 PM"), Some(six_thirty_pm));
		assert_eq!(parse_show_time("06:30 pm"), Some(six_thirty_pm));
		assert_eq!(parse_show_time("18:30"), Some(six_thirty_pm));
		assert_eq!(parse_show_time("6:30PM"), Some(six_thirty_pm));
		assert_eq!(parse_show_time("  6:30 pm  "), Some(six_thirty_pm));
	}

	#[test]
	fn rejects_unparseable_times() {
		assert_eq!(parse_show_time("half past six"), None);
		assert_eq!(parse_show_time("25:00"), None);
		assert_eq!(parse_show_time(""), None);
	}

	#[test]
	fn resolve_accepts_complete_args() {
		let request = complete_args().resolve(date(2026, 8, 6)).unwrap();
		assert_eq!(request.date_id, "20260814");
		assert_eq!(request.location, "bengaluru");
		assert_eq!(request.upi_id(), "moviefan_7@ybl");
		assert!(!request.window_is_inverted());
	}

	#[test]
	fn resolve_lowercases_location() {
		let mut args = complete_args();
		args.location = Some("Bengaluru".into());
		let request = args.resolve(date(2026, 8, 6)).unwrap();
		assert_eq!(request.location, "bengaluru");
	}

	#[test]
	fn resolve_rejects_bad_seat_counts() {
		for seats in [0u8, 11] {
			let mut args = complete_args();
			args.seats = Some(seats);
			assert!(args.resolve(date(2026, 8, 6)).is_err());
		}
	}

	#[test]
	fn resolve_rejects_bad_phone() {
		for phone in ["12345", "98765432101", "98765abc10", "+919876543210"] {
			let mut args = complete_args();
			args.phone = Some(phone.into());
			assert!(args.resolve(date(2026, 8, 6)).is_err());
		}
	}

	#[test]
	fn resolve_rejects_upi_with_at_sign() {
		let mut args = complete_args();
		args.upi_user = Some("user@ybl".into());
		let err = args.resolve(date(2026, 8, 6)).unwrap_err();
		assert!(err.to_string().contains("without the '@'"));
	}

	#[test]
	fn resolve_rejects_upi_bad_chars() {
		let mut args = complete_args();
		args.upi_handle = Some("y bl".into());
		assert!(args.resolve(date(2026, 8, 6)).is_err());
	}

	#[test]
	fn inverted_window_is_flagged_not_rejected() {
		let mut args = complete_args();
		args.earliest = Some("10:30 PM".into());
		args.latest = Some("6:00 PM".into());
		let request = args.resolve(date(2026, 8, 6)).unwrap();
		assert!(request.window_is_inverted());
	}

	#[test]
	fn missing_field_names_the_flag() {
		let mut args = complete_args();
		args.movie = None;
		let err = args.resolve(date(2026, 8, 6)).unwrap_err();
		assert!(err.to_string().contains("--movie"));
	}
}
