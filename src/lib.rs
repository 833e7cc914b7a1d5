//! Dinero Voucher CLI Library
//!
//! This library verifies access to a Dinero organization and creates and
//! books a single manual voucher. It includes modules for API communication,
//! the voucher workflow, configuration management and input validation.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementation
//! - `config` - Configuration management and environment variables
//! - `dinero` - Dinero API client implementation
//! - `error` - Error kinds of the workflow
//! - `types` - Data structures and wire formats
//! - `utils` - Input parsing and helpers
//! - `workflow` - The typed token → organization → voucher pipeline

pub mod cli;
pub mod config;
pub mod dinero;
pub mod error;
pub mod types;
pub mod utils;
pub mod workflow;

pub use error::{Error, Result};

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Requesting access token...");
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Booked voucher {}", guid);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark to standard error and
/// exits the program with status 1.
///
/// Only use this for fatal errors; code after the macro does not run.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", name);
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark to standard error.
///
/// # Example
///
/// ```
/// warning!("Voucher {} was created but not booked", guid);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
