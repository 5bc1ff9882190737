//! End-to-end parameter resolution: CLI strings in, validated request out.

use chrono::NaiveDate;
use clap::Parser;
use matinee_cli::cli::Cli;

fn today() -> NaiveDate {
	NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
}

fn parse(args: &[&str]) -> Cli {
	let mut full = vec!["matinee"];
	full.extend_from_slice(args);
	Cli::try_parse_from(full).unwrap()
}

fn complete() -> Vec<&'static str> {
	vec![
		"--location",
		"bengaluru",
		"--movie",
		"ET00310216",
		"--date",
		"aug 14",
		"--theatre",
		"PVR: Forum Mall",
		"--earliest",
		"18:00",
		"--latest",
		"10:30 PM",
		"--seats",
		"3",
		"--phone",
		"9876543210",
		"--upi-user",
		"moviefan",
		"--upi-handle",
		"ybl",
	]
}

#[test]
fn flags_resolve_without_prompting() {
	let cli = parse(&complete());
	let request = cli.booking.resolve(today()).unwrap();

	assert_eq!(request.date_id, "20260814");
	assert_eq!(request.date_display, "AUG 14");
	assert_eq!(request.seats, 3);
	assert_eq!(request.upi_id(), "moviefan@ybl");
	assert_eq!(request.earliest.format("%H:%M").to_string(), "18:00");
	assert_eq!(request.latest.format("%H:%M").to_string(), "22:30");
}

#[test]
fn mixed_time_formats_agree() {
	let cli = parse(&complete());
	let request = cli.booking.resolve(today()).unwrap();
	// "18:00" and "10:30 PM" both parsed, order preserved
	assert!(request.earliest < request.latest);
	assert!(!request.window_is_inverted());
}

#[test]
fn resolution_failures_surface_as_invalid_input() {
	let mut args = complete();
	args[13] = "99"; // --seats
	let cli = parse(&args);
	let err = cli.booking.resolve(today()).unwrap_err();
	assert!(err.to_string().contains("seat count"));
}

#[test]
fn date_in_a_past_month_rolls_over() {
	let mut args = complete();
	args[5] = "feb 01"; // --date, february from an august vantage
	let cli = parse(&args);
	let request = cli.booking.resolve(today()).unwrap();
	assert_eq!(request.date_id, "20270201");
}
