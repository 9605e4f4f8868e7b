//! Push protocol between the lexer and an incremental parser.
//!
//! The lexer owns the scan/indent loop and hands tokens over one at a time. The parser owns grammar and semantics
//! and is treated as an opaque capability with exactly two operations: accept one token ([`IncrementalParser::push`])
//! and release its resources ([`IncrementalParser::release`]).
//!
//! ## Notes
//! - `release` consumes the parser, so it can only ever run once. The lexer calls it on every way a session ends.
//! - Two reference implementations live here: [`TokenRecorder`] (accepts everything, keeps the stream) and
//!   [`BlockChecker`] (a small block-structure recognizer).

mod blocks;
mod recorder;

pub use blocks::{BlockChecker, BlockSummary};
pub use recorder::TokenRecorder;

use crate::lexer::Token;

/// Parser's answer to one pushed token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseStatus {
    /// Keep going; the parser wants the next token.
    NeedMore,
    /// The input forms a complete program.
    Accepted,
    /// The input cannot be parsed.
    Rejected(Rejection),
}

/// Parser-provided diagnostic, forwarded verbatim by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub message: String,
}

impl Rejection {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// An incremental (push) parser.
pub trait IncrementalParser<'src> {
    /// What the parser hands back once released (e.g. a tree, a summary, or `()`).
    type Output;

    /// Accept one token, in source order.
    fn push(&mut self, token: &Token<'src>) -> ParseStatus;

    /// Release the parser. Called exactly once per session, on success and failure alike.
    fn release(self) -> Self::Output;
}
