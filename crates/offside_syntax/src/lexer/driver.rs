//! Token delivery to the incremental parser
//!
//! The driver is the lexer's only contact with the parser. Each token's fate (continue or stop) is settled here
//! before the scanner moves past it.

use crate::diagnostics::SessionError;
use crate::parser::{IncrementalParser, ParseStatus};

use super::tokens::{Token, TokenKind};

pub(super) struct Driver<P> {
    parser: P,
    delivered: usize,
}

impl<'src, P: IncrementalParser<'src>> Driver<P> {
    pub(super) fn new(parser: P) -> Self {
        Self { parser, delivered: 0 }
    }

    pub(super) fn delivered(&self) -> usize {
        self.delivered
    }

    /// Deliver a token from the middle of the stream. Only `NeedMore` lets the session continue.
    pub(super) fn deliver(&mut self, token: &Token<'src>) -> Result<(), SessionError> {
        match self.push(token) {
            ParseStatus::NeedMore => Ok(()),
            ParseStatus::Accepted => Err(protocol_error(token, "parser accepted before end of input")),
            ParseStatus::Rejected(rejection) => Err(protocol_error(token, rejection.message)),
        }
    }

    /// Deliver the end-of-stream token. Only `Accepted` completes the session.
    pub(super) fn finish(&mut self, eof: &Token<'src>) -> Result<(), SessionError> {
        debug_assert_eq!(eof.kind, TokenKind::Eof);
        match self.push(eof) {
            ParseStatus::Accepted => Ok(()),
            ParseStatus::NeedMore => Err(protocol_error(eof, "unexpected end of input")),
            ParseStatus::Rejected(rejection) => Err(protocol_error(eof, rejection.message)),
        }
    }

    /// Hand the parser its one and only release.
    pub(super) fn release(self) -> P::Output {
        self.parser.release()
    }

    fn push(&mut self, token: &Token<'src>) -> ParseStatus {
        tracing::trace!(line = token.line(), kind = token.kind.name(), text = token.text(), "deliver");
        self.delivered += 1;
        self.parser.push(token)
    }
}

fn protocol_error(token: &Token<'_>, message: impl Into<String>) -> SessionError {
    SessionError::Parser {
        line: token.line(),
        token: token.kind.name(),
        message: message.into(),
        span: token.span().into(),
    }
}
