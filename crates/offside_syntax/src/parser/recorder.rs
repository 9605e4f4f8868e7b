use crate::lexer::{Token, TokenKind};

use super::{IncrementalParser, ParseStatus};

/// Parser that accepts any token stream and keeps it.
///
/// Used by [`crate::lexer::lex`] and `offside tokens`. It answers `NeedMore` to everything but `EOF`, which it
/// accepts. The `EOF` token itself is recorded as the last entry.
#[derive(Debug, Default)]
pub struct TokenRecorder<'src> {
    tokens: Vec<Token<'src>>,
}

impl TokenRecorder<'_> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'src> IncrementalParser<'src> for TokenRecorder<'src> {
    type Output = Vec<Token<'src>>;

    fn push(&mut self, token: &Token<'src>) -> ParseStatus {
        self.tokens.push(*token);
        if token.kind == TokenKind::Eof {
            ParseStatus::Accepted
        } else {
            ParseStatus::NeedMore
        }
    }

    fn release(self) -> Self::Output {
        self.tokens
    }
}
