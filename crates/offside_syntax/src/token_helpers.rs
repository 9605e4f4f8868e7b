//! Token classification shared by the reference parsers and tests.
//!
//! Parsers care about a handful of shapes (block headers, bracket depth, layout); naming them here keeps
//! `matches!` on registry ids out of parser code.

use crate::lexer::{Token, TokenKind};
use offside_core::lang::keywords::KeywordId;
use offside_core::lang::operators::OperatorId;
use offside_core::lang::punctuation::{self, PunctuationId, PunctuationRole};

/// Effect of a token on bracket nesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nesting {
    Open,
    Close,
    Neutral,
}

impl TokenKind {
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        *self == TokenKind::Keyword(id)
    }

    pub fn is_operator(&self, id: OperatorId) -> bool {
        *self == TokenKind::Operator(id)
    }

    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        *self == TokenKind::Punctuation(id)
    }

    fn punctuation_role(&self) -> Option<PunctuationRole> {
        match self {
            TokenKind::Punctuation(id) => Some(punctuation::role(*id)),
            _ => None,
        }
    }

    /// Opens a block when it ends a line (`:`).
    pub fn is_block_opener(&self) -> bool {
        self.punctuation_role() == Some(PunctuationRole::BlockHeader)
    }

    pub fn nesting(&self) -> Nesting {
        match self.punctuation_role() {
            Some(PunctuationRole::OpenGroup) => Nesting::Open,
            Some(PunctuationRole::CloseGroup) => Nesting::Close,
            _ => Nesting::Neutral,
        }
    }

    /// Synthesized from layout rather than spelled in the source.
    ///
    /// NEWLINE counts as layout even though its payload is the terminator text.
    pub fn is_layout(&self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::Indent | TokenKind::Dedent | TokenKind::Eof)
    }
}

impl Token<'_> {
    /// Shorthand for `self.kind.is_layout()`.
    pub fn is_layout(&self) -> bool {
        self.kind.is_layout()
    }
}
