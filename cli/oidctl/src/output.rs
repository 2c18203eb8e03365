//! Output formatting for CLI commands.

use colored::Colorize;
use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable format.
    #[default]
    Table,
    /// JSON format.
    Json,
}

/// Print rows as a table.
pub fn print_table<T: Tabled>(data: &[T]) {
    println!("{}", render_table(data));
}

fn render_table<T: Tabled>(data: &[T]) -> String {
    Table::new(data).to_string()
}

/// Print a single item as pretty JSON.
pub fn print_single<T: Serialize + ?Sized>(data: &T) {
    println!("{}", format_json(data, "{}"));
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "Success:".green().bold(), message);
}

/// Print a failure line without aborting.
pub fn print_failure(message: &str) {
    println!("{} {}", "Invalid:".red().bold(), message);
}

fn format_json<T: Serialize + ?Sized>(data: &T, fallback: &str) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| fallback.to_string())
}
