use std::time::Duration;

use chrono::Local;
use clap::Parser;
use matinee::{Browser, LaunchOptions};
use matinee_cli::{cli::Cli, config::Config, error::BotError, flow, logging, ui};

#[tokio::main]
async fn main() {
	let cli = Cli::parse();
	logging::init_logging(cli.verbose);

	if let Err(err) = run(cli).await {
		ui::failure(&err.to_string());
		if let Some(hint) = err.hint() {
			ui::hint(hint);
		}
		std::process::exit(1);
	}
}

async fn run(cli: Cli) -> Result<(), BotError> {
	let mut config = Config::load(cli.config.as_deref())?;
	if cli.artifacts_dir.is_some() {
		config.artifacts_dir = cli.artifacts_dir.clone();
	}

	let mut booking = cli.booking;
	booking.fill_missing_interactive()?;
	let request = booking.resolve(Local::now().date_naive())?;

	ui::note(&format!(
		"Booking {} seat(s) for movie {} in {} on {}, paying as {}",
		request.seats,
		request.movie,
		request.location,
		request.date_display,
		request.upi_id()
	));

	let browser = launch_browser(&config, cli.headless).await?;

	let outcome = tokio::select! {
		result = flow::run(browser.page(), &request, &config) => result,
		_ = tokio::signal::ctrl_c() => Err(BotError::Interrupted),
	};

	if outcome.is_ok() {
		ui::success("Payment initiated over UPI.");
		ui::note("Approve the collect request in your UPI app to finish the booking.");
		ui::note("Keeping the browser open for observation...");
		tokio::time::sleep(Duration::from_secs(config.observation_hold_secs)).await;
	}

	browser.close().await;
	outcome
}

async fn launch_browser(config: &Config, headless: bool) -> Result<Browser, BotError> {
	ui::stage("Browser setup");
	let profile_dir = config.resolve_profile_dir()?;
	ui::note(&format!("Profile directory: {}", profile_dir.display()));

	let mut options = LaunchOptions::new()
		.profile_dir(profile_dir)
		.headless(headless);
	if let Some(binary) = &config.chrome_binary {
		options = options.binary(binary);
	}
	if let Some(driver) = &config.chromedriver {
		options = options.driver(driver);
	}

	let browser = Browser::launch(options).await?;
	ui::note("WebDriver session established.");
	Ok(browser)
}
