use thiserror::Error;

use crate::flow::navigate::Block;

pub type Result<T> = std::result::Result<T, BotError>;

#[derive(Debug, Error)]
pub enum BotError {
	#[error("invalid input: {0}")]
	InvalidInput(String),

	#[error("page blocked: {0}")]
	Blocked(Block),

	#[error("theatre not found: '{0}' (name must match the listing exactly)")]
	TheatreNotFound(String),

	#[error("no showtime between {earliest} and {latest} at '{theatre}'")]
	NoShowtimeInRange {
		theatre: String,
		earliest: String,
		latest: String,
	},

	#[error("could not lock seats after trying {attempts} of them")]
	SeatsNotSelectable { attempts: usize },

	#[error("interrupted")]
	Interrupted,

	#[error("config file {path}: {message}")]
	Config { path: String, message: String },

	#[error(transparent)]
	Client(#[from] matinee::Error),

	#[error(transparent)]
	Io(#[from] std::io::Error),

	#[error(transparent)]
	Other(#[from] anyhow::Error),
}

impl BotError {
	pub fn hint(&self) -> Option<&'static str> {
		match self {
			BotError::Client(err) => err.hint(),
			BotError::Blocked(Block::Challenge) => Some(
				"The site served an anti-bot challenge. Open the profile browser manually, \
				 pass the challenge once, and re-run; the profile keeps the clearance cookie.",
			),
			BotError::Blocked(Block::NotFound) => {
				Some("Check the location slug and movie code against the page URL.")
			}
			BotError::TheatreNotFound(_) => {
				Some("Copy the theatre name exactly as the listing shows it, including punctuation.")
			}
			_ => None,
		}
	}
}
