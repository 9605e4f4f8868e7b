//! Define the reserved keyword vocabulary.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings, token names and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**: `True` is a keyword, `true` is an identifier.
//! - The boolean operators `and`, `or` and `not` are reserved words and live here, not in
//!   [`crate::lang::operators`].
//! - The order of [`KEYWORDS`] is the order in which the scanner tries the keyword rules. It is grouped for
//!   readability; it carries no precedence among keywords because no two keywords share a spelling.
//!
//! ## Examples
//! ```rust
//! use offside_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("while"), Some(KeywordId::While));
//! assert_eq!(keywords::token_name(KeywordId::While), "WHILE");
//! assert_eq!(keywords::from_str("While"), None);
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Control flow / statements
    If,
    Elif,
    Else,
    While,
    Break,
    Return,

    // Definitions
    Def,

    // Literals
    True,
    False,

    // Word operators
    And,
    Or,
    Not,
}

/// High-level grouping for documentation and tooling.
///
/// ## Notes
/// - Categories are metadata only; they do not enforce parsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    ControlFlow,
    Definition,
    Literal,
    Operator,
}

/// Metadata for a keyword.
///
/// ## Notes
/// - `canonical` is the only accepted spelling; the language has no keyword aliases.
/// - `token_name` is the upper-case kind name used in token dumps and parser diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub token_name: &'static str,
    pub category: KeywordCategory,
}

/// Registry of all keywords.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Control flow / statements
    info(KeywordId::If, "if", "IF", KeywordCategory::ControlFlow),
    info(KeywordId::Elif, "elif", "ELIF", KeywordCategory::ControlFlow),
    info(KeywordId::Else, "else", "ELSE", KeywordCategory::ControlFlow),
    info(KeywordId::While, "while", "WHILE", KeywordCategory::ControlFlow),
    info(KeywordId::Break, "break", "BREAK", KeywordCategory::ControlFlow),
    info(KeywordId::Return, "return", "RETURN", KeywordCategory::ControlFlow),
    // Definitions
    info(KeywordId::Def, "def", "DEF", KeywordCategory::Definition),
    // Literals
    info(KeywordId::True, "True", "TRUE", KeywordCategory::Literal),
    info(KeywordId::False, "False", "FALSE", KeywordCategory::Literal),
    // Word operators
    info(KeywordId::And, "and", "AND", KeywordCategory::Operator),
    info(KeywordId::Or, "or", "OR", KeywordCategory::Operator),
    info(KeywordId::Not, "not", "NOT", KeywordCategory::Operator),
];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Upper-case token name (e.g. `"ELIF"`).
pub fn token_name(id: KeywordId) -> &'static str {
    info_for(id).token_name
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by exact spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling is reserved.
/// - `None` otherwise.
///
/// ## Notes
/// - This is a registry query for tooling. The scanner does **not** call it to reclassify identifiers; keyword
///   rules are tried before the identifier rule instead.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, token_name: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        token_name,
        category,
    }
}
