//! Token types for the offside lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words (including `and`/`or`/`not`)
//! - `Operator(OperatorId)` for symbolic operators
//! - `Punctuation(PunctuationId)` for `(`, `)`, `,` and `:`
//!
//! ## Notes
//! - Tokens borrow their lexeme from the source; they are handed to the parser one at a time and never buffered by
//!   the lexer.
//! - Structural tokens (`Indent`, `Dedent`, `Newline`, `Eof`) have no fixed spelling. Their lexeme is the text that
//!   triggered them (the leading whitespace run, the line terminator, or the empty string at end of input).

use std::fmt;

use offside_core::lang::keywords::{self, KeywordId};
use offside_core::lang::operators::{self, OperatorId};
use offside_core::lang::punctuation::{self, PunctuationId};

// ============================================================================
// SPANS
// ============================================================================

/// Byte range into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Identifier,
    Number,
    Float,

    // ========== Indentation ==========
    Newline,
    Indent,
    Dedent,

    // ========== Special ==========
    Eof,
}

impl TokenKind {
    /// Upper-case kind name, as printed in token dumps (`IF`, `ASSIGN`, `INDENT`, ...).
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Keyword(id) => keywords::token_name(*id),
            TokenKind::Operator(id) => operators::token_name(*id),
            TokenKind::Punctuation(id) => punctuation::token_name(*id),
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::Float => "FLOAT",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Indent => "INDENT",
            TokenKind::Dedent => "DEDENT",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A raw slice of the source plus where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme<'src> {
    pub text: &'src str,
    /// 1-based source line.
    pub line: usize,
    pub span: Span,
}

impl<'src> Lexeme<'src> {
    pub fn new(text: &'src str, line: usize, span: Span) -> Self {
        Self { text, line, span }
    }
}

/// A token with its kind and payload lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub lexeme: Lexeme<'src>,
}

impl<'src> Token<'src> {
    /// Construct a new token.
    pub fn new(kind: TokenKind, lexeme: Lexeme<'src>) -> Self {
        Self { kind, lexeme }
    }

    pub fn text(&self) -> &'src str {
        self.lexeme.text
    }

    pub fn line(&self) -> usize {
        self.lexeme.line
    }

    pub fn span(&self) -> Span {
        self.lexeme.span
    }
}

impl fmt::Display for Token<'_> {
    /// Render as `LINE KIND "lexeme"`, the format of `offside tokens`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:?}", self.lexeme.line, self.kind, self.lexeme.text)
    }
}
