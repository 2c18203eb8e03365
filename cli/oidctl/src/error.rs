//! Error handling and display for the CLI.

use colored::Colorize;
use oidgen_id::ObjectIdError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{count} of {total} IDs are invalid")]
    InvalidIds { count: usize, total: usize },

    #[error(transparent)]
    ObjectId(#[from] ObjectIdError),

    #[error("invalid --at timestamp '{0}': expected RFC 3339 (e.g. 2024-01-31T12:00:00Z)")]
    InvalidTimestamp(String),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(hint) = err.downcast_ref::<CliError>().and_then(hint) {
        eprintln!("\n{}", hint.as_str().yellow());
    }
}

fn hint(err: &CliError) -> Option<String> {
    match err {
        CliError::ObjectId(e) if e.is_length_error() => Some(format!(
            "Hint: ObjectIds are exactly 24 characters; got {}.",
            e.input().chars().count()
        )),
        CliError::ObjectId(_) => Some("Hint: only 0-9, a-f and A-F are allowed.".to_string()),
        _ => None,
    }
}
