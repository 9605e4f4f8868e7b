//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use miette::{NamedSource, Report};
use serde_json::json;
use thiserror::Error;

use offside_syntax::diagnostics::SessionError;
use offside_syntax::lexer::{self, Token};
use offside_syntax::parser::BlockChecker;

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB)
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

// ============================================================================
// Input
// ============================================================================

/// Failure to obtain the source text.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Cannot access file '{path}': {source}")]
    Access { path: String, source: io::Error },

    #[error("Source file '{path}' is too large ({size} bytes, max {max} bytes)")]
    TooLarge { path: String, size: u64, max: u64 },

    #[error("Error reading '{path}': {source}")]
    Read { path: String, source: io::Error },
}

impl From<InputError> for CliError {
    fn from(e: InputError) -> Self {
        CliError::failure(e.to_string())
    }
}

/// Source text plus the name diagnostics refer to it by.
#[derive(Debug)]
pub struct Input {
    pub name: String,
    pub source: String,
}

/// Read a source file, or stdin when the path is `-`.
pub fn read_input(path: &Path) -> Result<Input, InputError> {
    let name = path.to_string_lossy().into_owned();

    if name == "-" {
        let source = read_capped("<stdin>", io::stdin().lock(), MAX_SOURCE_SIZE)?;
        return Ok(Input {
            name: "<stdin>".to_string(),
            source,
        });
    }

    let metadata = fs::metadata(path).map_err(|source| InputError::Access {
        path: name.clone(),
        source,
    })?;
    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(InputError::TooLarge {
            path: name,
            size: metadata.len(),
            max: MAX_SOURCE_SIZE,
        });
    }

    let source = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: name.clone(),
        source,
    })?;
    tracing::debug!(file = %name, bytes = source.len(), "read source");
    Ok(Input { name, source })
}

/// Read all of `reader`, failing once it goes past `max` bytes.
pub fn read_capped(name: &str, reader: impl Read, max: u64) -> Result<String, InputError> {
    let read_error = |source| InputError::Read {
        path: name.to_string(),
        source,
    };

    let mut bytes = Vec::new();
    reader.take(max + 1).read_to_end(&mut bytes).map_err(read_error)?;
    let size = bytes.len() as u64;
    if size > max {
        return Err(InputError::TooLarge {
            path: name.to_string(),
            size,
            max,
        });
    }
    String::from_utf8(bytes).map_err(|e| read_error(io::Error::new(io::ErrorKind::InvalidData, e)))
}

// ============================================================================
// Commands
// ============================================================================

/// Lex a file and print its tokens.
pub fn print_tokens(path: &Path, json: bool) -> CliResult<ExitCode> {
    let input = read_input(path)?;
    let report = tokens_report(&input.name, &input.source, json)?;
    println!("{report}");
    Ok(ExitCode::SUCCESS)
}

/// Lex a file into the block-structure checker.
pub fn check_file(path: &Path) -> CliResult<ExitCode> {
    let input = read_input(path)?;
    let report = check_report(&input.name, &input.source)?;
    println!("{report}");
    Ok(ExitCode::SUCCESS)
}

/// Render the token stream of `source`, one `LINE KIND "lexeme"` per line or as a JSON array.
pub fn tokens_report(name: &str, source: &str, json: bool) -> CliResult<String> {
    let tokens = lexer::lex(source).map_err(|err| session_failure(name, source, err))?;
    if json {
        tokens_json(&tokens)
    } else {
        Ok(tokens.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n"))
    }
}

/// Run `source` through the block-structure checker and summarize the result.
pub fn check_report(name: &str, source: &str) -> CliResult<String> {
    let summary = lexer::run(source, BlockChecker::new()).map_err(|err| session_failure(name, source, err))?;
    Ok(format!(
        "{name}: ok ({} statements, max depth {})",
        summary.statements, summary.max_depth
    ))
}

// ============================================================================
// Rendering
// ============================================================================

fn tokens_json(tokens: &[Token<'_>]) -> CliResult<String> {
    let items: Vec<_> = tokens
        .iter()
        .map(|token| {
            json!({
                "kind": token.kind.name(),
                "text": token.text(),
                "line": token.line(),
                "start": token.span().start,
                "end": token.span().end,
            })
        })
        .collect();
    serde_json::to_string_pretty(&items).map_err(|e| CliError::failure(format!("Error encoding tokens: {e}")))
}

/// Render a session error against its source with miette.
pub fn render_session_error(name: &str, source: &str, err: SessionError) -> String {
    let report = Report::new(err).with_source_code(NamedSource::new(name, source.to_string()));
    format!("{report:?}")
}

fn session_failure(name: &str, source: &str, err: SessionError) -> CliError {
    tracing::debug!(file = name, category = err.category(), line = err.line(), "session failed");
    CliError::failure(render_session_error(name, source, err))
}
