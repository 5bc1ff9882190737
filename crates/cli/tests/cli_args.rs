//! CLI surface: flags parse where expected, nothing is accidentally required.

use clap::Parser;
use matinee_cli::cli::Cli;

#[test]
fn parses_a_fully_specified_run() {
	let cli = Cli::try_parse_from([
		"matinee",
		"--location",
		"bengaluru",
		"--movie",
		"ET00310216",
		"--date",
		"AUG 14",
		"--theatre",
		"PVR: Forum Mall",
		"--earliest",
		"6:00 PM",
		"--latest",
		"10:30 PM",
		"--seats",
		"2",
		"--phone",
		"9876543210",
		"--upi-user",
		"moviefan",
		"--upi-handle",
		"ybl",
	])
	.unwrap();

	assert_eq!(cli.booking.location.as_deref(), Some("bengaluru"));
	assert_eq!(cli.booking.seats, Some(2));
	assert_eq!(cli.booking.upi_handle.as_deref(), Some("ybl"));
	assert_eq!(cli.verbose, 0);
	assert!(!cli.headless);
}

#[test]
fn all_booking_flags_are_optional() {
	// missing parameters are prompted for at runtime, not rejected at parse
	let cli = Cli::try_parse_from(["matinee"]).unwrap();
	assert!(cli.booking.location.is_none());
	assert!(cli.booking.phone.is_none());
}

#[test]
fn verbosity_accumulates() {
	let cli = Cli::try_parse_from(["matinee", "-vv"]).unwrap();
	assert_eq!(cli.verbose, 2);
}

#[test]
fn config_and_artifacts_paths_parse() {
	let cli = Cli::try_parse_from([
		"matinee",
		"--config",
		"/tmp/custom.json",
		"--artifacts-dir",
		"/tmp/shots",
		"--headless",
	])
	.unwrap();
	assert_eq!(cli.config.unwrap().to_str(), Some("/tmp/custom.json"));
	assert_eq!(cli.artifacts_dir.unwrap().to_str(), Some("/tmp/shots"));
	assert!(cli.headless);
}

#[test]
fn seats_must_be_numeric() {
	assert!(Cli::try_parse_from(["matinee", "--seats", "two"]).is_err());
}
