//! User-facing progress lines.
//!
//! Tracing goes to stderr for diagnostics; these go to stdout and are the
//! run's narrative of stages, findings, and failures.

use colored::Colorize;

pub fn stage(title: &str) {
	println!("\n{}", format!("--- {title} ---").cyan().bold());
}

pub fn note(message: &str) {
	println!("{message}");
}

pub fn success(message: &str) {
	println!("{}", message.green().bold());
}

pub fn warn(message: &str) {
	println!("{}", format!("warning: {message}").yellow());
}

pub fn failure(message: &str) {
	eprintln!("{}", format!("error: {message}").red().bold());
}

pub fn hint(message: &str) {
	eprintln!("{}", format!("hint: {message}").yellow());
}
