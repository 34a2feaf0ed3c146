//! CLI module for the Quill front end
//!
//! ## Commands
//!
//! - `quill <file>` - Parse a source file and pretty-print the AST
//! - `quill --lex <file>` - Tokenize only and print the token stream
//! - `quill --json <file>` - Parse and emit the AST as tagged JSON
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

/// The Quill language front end
#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(version)]
#[command(about = "Front end for the Quill scripting language", long_about = None)]
pub struct Cli {
    /// Source file to parse (the AST is pretty-printed)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Tokenize only and print the token stream (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with = "file")]
    pub lex_file: Option<PathBuf>,

    /// Parse and emit the AST as JSON
    #[arg(long = "json", value_name = "FILE", conflicts_with_all = ["file", "lex_file"])]
    pub json_file: Option<PathBuf>,
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

    match execute(cli) {
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

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    if let Some(file) = cli.lex_file {
        return commands::lex_file(&file);
    }
    if let Some(file) = cli.json_file {
        return commands::parse_file_json(&file);
    }

    match cli.file {
        Some(file) => commands::parse_file(&file),
        None => Err(CliError::failure(
            "error: a source file is required (see --help)",
        )),
    }
}

// ============================================================================
// Tests
// ============================================================================
