use std::path::PathBuf;

use clap::Parser;

use crate::params::BookingArgs;

/// Root CLI.
#[derive(Parser, Debug)]
#[command(name = "matinee")]
#[command(about = "Automated movie-ticket booking over WebDriver")]
#[command(version)]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Config file path (default: the platform config dir)
	#[arg(long, value_name = "FILE")]
	pub config: Option<PathBuf>,

	/// Directory for failure screenshots
	#[arg(long, value_name = "DIR")]
	pub artifacts_dir: Option<PathBuf>,

	/// Run the browser headless (the site is more likely to challenge this)
	#[arg(long)]
	pub headless: bool,

	#[command(flatten)]
	pub booking: BookingArgs,
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn cli_definition_is_consistent() {
		Cli::command().debug_assert();
	}
}
