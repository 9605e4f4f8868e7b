//! CLI module for the offside lexer
//!
//! ## Commands
//!
//! - `tokens <file>` - Lex a file and print its token stream (`--json` for JSON)
//! - `check <file>` - Lex a file into the block-structure checker
//! - `<file>` - Same as `check`
//!
//! `-` reads the source from stdin.
//!
//! ## Errors and exit status
//!
//! Commands hand back `CliResult`; nothing below [`run`] prints an error or exits. Status `1` means the input was
//! read but rejected (lexical, indentation or parser error, unreadable file); status `2` means there was no input
//! to work on.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use thiserror::Error;

// ============================================================================
// Exit status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
    pub const USAGE: ExitCode = ExitCode(2);
}

/// A command failure: the rendered diagnostic plus the status to exit with.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    pub message: String,
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::USAGE,
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Indentation-aware lexer for the offside scripting language
#[derive(Parser, Debug)]
#[command(name = "offside")]
#[command(version)]
#[command(about = "Indentation-aware lexer for the offside scripting language", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to check (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the token stream of a file
    Tokens {
        /// Source file (`-` for stdin)
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Print tokens as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Check the block structure of a file
    Check {
        /// Source file (`-` for stdin)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Parse arguments, run the command, and exit with its status.
pub fn run() {
    let code = match execute(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err}");
            err.exit_code
        }
    };
    if code != ExitCode::SUCCESS {
        process::exit(code.0);
    }
}

fn execute(cli: Cli) -> CliResult<ExitCode> {
    match (cli.command, cli.file) {
        (Some(Command::Tokens { file, json }), _) => commands::print_tokens(&file, json),
        (Some(Command::Check { file }), _) | (None, Some(file)) => commands::check_file(&file),
        (None, None) => Err(CliError::usage("no input file (try `offside --help`)")),
    }
}

// ============================================================================
// Tests
// ============================================================================
