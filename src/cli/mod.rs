//! CLI module for keydoc
//!
//! ## Usage
//!
//! `keydoc [OPTIONS] <DIR>` - print the shortcut table for the commands in `DIR`
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::config::{DEFAULT_CONVERTER, DEFAULT_MISSING_NAME, DocConfig};
use crate::version::KEYDOC_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Generate an HTML table of the keyboard shortcuts in a command bundle
#[derive(Parser, Debug)]
#[command(name = "keydoc")]
#[command(version = KEYDOC_VERSION)]
#[command(about = "Generate an HTML table of the keyboard shortcuts in a command bundle", long_about = None)]
pub struct Cli {
    /// Command directory, or a bundle root containing `Commands/`
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Write HTML to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Plist to JSON converter executable
    #[arg(long, value_name = "PROGRAM", env = "KEYDOC_CONVERTER", default_value = DEFAULT_CONVERTER)]
    pub converter: PathBuf,

    /// Command files are already JSON (no converter process)
    #[arg(long)]
    pub json: bool,

    /// Do not HTML-escape cell contents
    #[arg(long = "no-escape")]
    pub no_escape: bool,

    /// Append a table explaining the modifier glyphs
    #[arg(long)]
    pub legend: bool,

    /// Name shown for commands without one
    #[arg(long, value_name = "NAME", default_value = DEFAULT_MISSING_NAME)]
    pub placeholder: String,
}

impl Cli {
    /// Generation settings selected by the flags.
    pub fn doc_config(&self) -> DocConfig {
        DocConfig::new()
            .with_converter_program(&self.converter)
            .with_missing_name(&self.placeholder)
            .with_escape_html(!self.no_escape)
            .with_legend(self.legend)
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match commands::generate(&cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
