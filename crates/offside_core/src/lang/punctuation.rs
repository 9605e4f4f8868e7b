//! Punctuation vocabulary.
//!
//! `(`, `)`, `,` and `:`. Each mark carries a [`PunctuationRole`] so parsers can ask what a mark does to the
//! line structure without matching on individual ids.
//!
//! ## Examples
//! ```rust
//! use offside_core::lang::punctuation::{self, PunctuationId, PunctuationRole};
//!
//! assert_eq!(punctuation::from_str(":"), Some(PunctuationId::Colon));
//! assert_eq!(punctuation::token_name(PunctuationId::LParen), "LPAREN");
//! assert_eq!(punctuation::role(PunctuationId::Colon), PunctuationRole::BlockHeader);
//! ```

/// What a punctuation mark does to the surrounding line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationRole {
    OpenGroup,
    CloseGroup,
    Separator,
    /// Ends a block header when it is the last token on a line.
    BlockHeader,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    Comma,
    Colon,
    LParen,
    RParen,
}

#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub token_name: &'static str,
    pub role: PunctuationRole,
}

pub const PUNCTUATION: &[PunctuationInfo] = &[
    PunctuationInfo {
        id: PunctuationId::Comma,
        canonical: ",",
        token_name: "COMMA",
        role: PunctuationRole::Separator,
    },
    PunctuationInfo {
        id: PunctuationId::Colon,
        canonical: ":",
        token_name: "COLON",
        role: PunctuationRole::BlockHeader,
    },
    PunctuationInfo {
        id: PunctuationId::LParen,
        canonical: "(",
        token_name: "LPAREN",
        role: PunctuationRole::OpenGroup,
    },
    PunctuationInfo {
        id: PunctuationId::RParen,
        canonical: ")",
        token_name: "RPAREN",
        role: PunctuationRole::CloseGroup,
    },
];

pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

pub fn token_name(id: PunctuationId) -> &'static str {
    info_for(id).token_name
}

pub fn role(id: PunctuationId) -> PunctuationRole {
    info_for(id).role
}

/// Registry entry for `id`.
///
/// ## Panics
/// - If `PUNCTUATION` has no row for `id`; the registry guardrail tests rule this out.
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .expect("every PunctuationId has a registry row")
}

pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}
