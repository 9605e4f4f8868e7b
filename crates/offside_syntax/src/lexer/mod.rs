//! Lexer for the offside scripting language
//!
//! Handles tokenization including:
//! - Keywords (`if`, `elif`, `def`, `while`, `True`, ...) and identifiers
//! - Integer and floating-point literals
//! - Operators and punctuation (`==`, `<=`, `(`, `:`, ...)
//! - Indentation-based blocks (INDENT/DEDENT tokens)
//!
//! Tokens are not collected: each one is pushed to an [`IncrementalParser`] as soon as it is recognized, and the
//! parser's answer decides whether the session goes on.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token, Lexeme, Span)
//! - `rules` - Longest-match scanner rule table
//! - `indent` - Indentation stack and INDENT/DEDENT decisions
//! - `driver` - Token delivery to the parser

mod driver;
pub mod indent;
mod rules;
pub mod tokens;

pub use indent::{IndentChange, IndentMismatch, IndentStack};
pub use tokens::{Lexeme, Span, Token, TokenKind};

use crate::diagnostics::{SessionError, open_levels_hint};
use crate::parser::{IncrementalParser, TokenRecorder};
use driver::Driver;
use rules::{Scan, Scanner};

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// Per-line processing (two phases):
//
// [Start of line] → measure leading whitespace W
//        ↓ blank / comment-only?  → skip the whole line, stay at line start
//        ↓ otherwise
//   resolve W against the indent stack → INDENT / DEDENT* / nothing
//        ↓
//   [Inside line] → tokens, inter-token blanks, trailing comment
//        ↓ line terminator → NEWLINE → [Start of line]
//
// [End of input] → DEDENT per open block → EOF
// ============================================================================

/// One lexing session over one source text.
///
/// The session owns the indentation stack and the parser handle; nothing is shared between sessions, so independent
/// sessions can run side by side.
pub struct Lexer<'src, P> {
    source: &'src str,
    pos: usize,
    /// 1-based line of `pos`.
    line: usize,
    scanner: Scanner,
    indents: IndentStack,
    driver: Driver<P>,
}

impl<'src, P: IncrementalParser<'src>> Lexer<'src, P> {
    /// Create a session that will feed `parser`.
    pub fn new(source: &'src str, parser: P) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            scanner: Scanner::new(),
            indents: IndentStack::new(),
            driver: Driver::new(parser),
        }
    }

    /// Run the session to completion or to the first fatal error.
    ///
    /// The parser is released exactly once, whichever way the session ends. Its output is returned only when it
    /// accepted the whole input.
    pub fn run(mut self) -> Result<P::Output, SessionError> {
        let outcome = self.drive();
        let delivered = self.driver.delivered();
        let output = self.driver.release();

        match outcome {
            Ok(()) => {
                tracing::debug!(tokens = delivered, lines = self.line, "session complete");
                Ok(output)
            }
            Err(err) => {
                tracing::debug!(category = err.category(), line = err.line(), tokens = delivered, "session aborted");
                Err(err)
            }
        }
    }

    fn drive(&mut self) -> Result<(), SessionError> {
        while !self.rest().is_empty() {
            self.lex_line()?;
        }
        self.finalize()
    }

    // ========================================================================
    // Position helpers
    // ========================================================================

    fn rest(&self) -> &'src str {
        &self.source[self.pos..]
    }

    fn lexeme(&self, len: usize) -> Lexeme<'src> {
        let span = Span::new(self.pos, self.pos + len);
        Lexeme::new(&self.source[span.start..span.end], self.line, span)
    }

    // ========================================================================
    // Line processing
    // ========================================================================

    fn lex_line(&mut self) -> Result<(), SessionError> {
        let rest = self.rest();
        let width = rules::whitespace_run(rest);
        if rules::is_blank_line(&rest[width..]) {
            self.skip_line();
            return Ok(());
        }

        let indent = self.lexeme(width);
        self.pos += width;
        self.resolve_indentation(width, indent)?;
        self.lex_statement()
    }

    /// Skip a whitespace-only or comment-only line, terminator included.
    fn skip_line(&mut self) {
        match self.rest().find('\n') {
            Some(nl) => {
                self.pos += nl + 1;
                self.line += 1;
            }
            None => self.pos = self.source.len(),
        }
    }

    fn resolve_indentation(&mut self, width: usize, indent: Lexeme<'src>) -> Result<(), SessionError> {
        let change = self
            .indents
            .resolve(width)
            .map_err(|mismatch| SessionError::Indentation {
                line: indent.line,
                width,
                span: indent.span.into(),
                hint: open_levels_hint(&mismatch.open),
            })?;

        match change {
            IndentChange::Unchanged => {}
            IndentChange::Indent => {
                tracing::debug!(line = indent.line, width, "indent");
                self.driver.deliver(&Token::new(TokenKind::Indent, indent))?;
            }
            IndentChange::Dedent(closed) => {
                tracing::debug!(line = indent.line, width, closed, "dedent");
                for _ in 0..closed {
                    self.driver.deliver(&Token::new(TokenKind::Dedent, indent))?;
                }
            }
        }
        Ok(())
    }

    /// Tokenize the rest of a line whose indentation is already resolved.
    fn lex_statement(&mut self) -> Result<(), SessionError> {
        loop {
            match self.scanner.scan(self.rest()) {
                Scan::Token(kind, len) => {
                    self.driver.deliver(&Token::new(kind, self.lexeme(len)))?;
                    self.pos += len;
                }
                Scan::Blank(len) | Scan::Comment(len) => self.pos += len,
                Scan::LineEnd(len) => {
                    self.driver.deliver(&Token::new(TokenKind::Newline, self.lexeme(len)))?;
                    self.pos += len;
                    self.line += 1;
                    return Ok(());
                }
                Scan::End => return Ok(()),
                Scan::NoMatch(ch) => {
                    return Err(SessionError::Lexical {
                        ch,
                        line: self.line,
                        span: self.lexeme(ch.len_utf8()).span.into(),
                    });
                }
            }
        }
    }

    // ========================================================================
    // End of input
    // ========================================================================

    fn finalize(&mut self) -> Result<(), SessionError> {
        let end = self.lexeme(0);
        let closed = self.indents.drain();
        if closed > 0 {
            tracing::debug!(line = end.line, closed, "closing open blocks at end of input");
        }
        for _ in 0..closed {
            self.driver.deliver(&Token::new(TokenKind::Dedent, end))?;
        }
        self.driver.finish(&Token::new(TokenKind::Eof, end))
    }
}

/// Lex `source` into `parser`, one token at a time.
///
/// This is a shorthand for `Lexer::new(source, parser).run()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn run<'src, P: IncrementalParser<'src>>(source: &'src str, parser: P) -> Result<P::Output, SessionError> {
    Lexer::new(source, parser).run()
}

/// Convenience function to lex a source string into a token list.
///
/// The list always ends with an `Eof` token.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token<'_>>, SessionError> {
    Lexer::new(source, TokenRecorder::new()).run()
}

// ============================================================================
// TESTS
// ============================================================================
