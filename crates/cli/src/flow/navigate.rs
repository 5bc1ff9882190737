//! Open the movie page and recognize the ways the site refuses us.

use std::fmt;

use matinee::Page;
use tracing::info;
use url::Url;

use crate::config::Config;
use crate::error::{BotError, Result};
use crate::flow::NAV_SETTLE;
use crate::params::BookingRequest;
use crate::ui;

/// The block pages worth telling apart; they need different user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
	/// Anti-bot interstitial (Cloudflare "just a moment").
	Challenge,
	/// Plain 403.
	Forbidden,
	/// Wrong location slug or movie code.
	NotFound,
}

impl fmt::Display for Block {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Block::Challenge => write!(f, "anti-bot challenge page"),
			Block::Forbidden => write!(f, "403 forbidden"),
			Block::NotFound => write!(f, "page not found"),
		}
	}
}

/// Classify a freshly loaded page from its title and URL.
pub fn detect_block(title: &str, url: &str) -> Option<Block> {
	let title = title.to_lowercase();
	let url = url.to_lowercase();

	if url.contains("challenge") || title.contains("cloudflare") || title.contains("just a moment")
	{
		Some(Block::Challenge)
	} else if title.contains("403 forbidden") {
		Some(Block::Forbidden)
	} else if title.contains("page not found") || title.contains("oops") {
		Some(Block::NotFound)
	} else {
		None
	}
}

/// Build the movie-page URL from the configured base.
pub fn movie_url(base: &str, location: &str, movie: &str) -> Result<Url> {
	let raw = format!("{}/{}/{}", base.trim_end_matches('/'), location, movie);
	Url::parse(&raw).map_err(|err| BotError::InvalidInput(format!("bad target URL '{raw}': {err}")))
}

pub async fn to_movie(page: &Page, config: &Config, request: &BookingRequest) -> Result<()> {
	ui::stage("Navigation");
	let target = movie_url(&config.base_url, &request.location, &request.movie)?;
	ui::note(&format!("Opening {target}"));
	info!(target = "matinee", url = %target, "navigate");

	page.goto(target.as_str()).await?;
	tokio::time::sleep(NAV_SETTLE).await;

	ensure_not_blocked(page).await?;
	ui::note("Page loaded without signs of blocking.");
	Ok(())
}

/// Re-check after any load or refresh; a block can appear at either point.
pub async fn ensure_not_blocked(page: &Page) -> Result<()> {
	let title = page.title().await?;
	let url = page.current_url().await?;
	info!(target = "matinee", %title, "page settled");

	match detect_block(&title, &url) {
		Some(block) => Err(BotError::Blocked(block)),
		None => Ok(()),
	}
}
