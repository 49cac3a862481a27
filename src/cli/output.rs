//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.
//! Data goes to stdout, diagnostics to stderr.

use colored::Colorize;
use serde::Serialize;

use crate::application::ApplicationError;

/// Print error (red bold "Error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Error".red().bold(), msg);
}

/// Print warning (yellow "IMPORTANT:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "IMPORTANT".yellow().bold(), msg);
}

/// Print success status (green checkmark)
pub fn success(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}

/// Render a value as pretty JSON (two-space indent).
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ApplicationError> {
    serde_json::to_string_pretty(value).map_err(|source| ApplicationError::Decode {
        context: "output".into(),
        source,
    })
}

/// Print a value as pretty JSON to stdout.
pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<(), ApplicationError> {
    println!("{}", to_json(value)?);
    Ok(())
}
