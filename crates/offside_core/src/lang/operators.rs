//! Operator vocabulary.
//!
//! This module defines the symbolic operator set (`+`, `==`, `=`, ...) with the token name each spelling produces.
//! Word operators (`and`, `or`, `not`) are reserved words and live in [`crate::lang::keywords`].
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and exact.
//! - Every operator has exactly one spelling; the scanner picks the longest one that matches (`==` over `=`).
//!
//! ## Examples
//! ```rust
//! use offside_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str(">="), Some(OperatorId::GtEq));
//! assert_eq!(operators::token_name(OperatorId::Eq), "ASSIGN");
//! ```

/// Broad grouping for operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    Arithmetic,
    Comparison,
    Assignment,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,

    // Comparison
    EqEq,
    NotEq,
    Gt,
    GtEq,
    Lt,
    LtEq,

    // Assignment
    Eq,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub token_name: &'static str,
    pub category: OperatorCategory,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Arithmetic
    op(OperatorId::Plus, "+", "PLUS", OperatorCategory::Arithmetic),
    op(OperatorId::Minus, "-", "MINUS", OperatorCategory::Arithmetic),
    op(OperatorId::Star, "*", "STAR", OperatorCategory::Arithmetic),
    op(OperatorId::Slash, "/", "SLASH", OperatorCategory::Arithmetic),
    // Comparison
    op(OperatorId::EqEq, "==", "EQ", OperatorCategory::Comparison),
    op(OperatorId::NotEq, "!=", "NE", OperatorCategory::Comparison),
    op(OperatorId::Gt, ">", "GT", OperatorCategory::Comparison),
    op(OperatorId::GtEq, ">=", "GE", OperatorCategory::Comparison),
    op(OperatorId::Lt, "<", "LT", OperatorCategory::Comparison),
    op(OperatorId::LtEq, "<=", "LE", OperatorCategory::Comparison),
    // Assignment
    op(OperatorId::Eq, "=", "ASSIGN", OperatorCategory::Assignment),
];

/// Return the spelling for an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Return the upper-case token name for an operator.
pub fn token_name(id: OperatorId) -> &'static str {
    info_for(id).token_name
}

/// Return the category for an operator.
pub fn category(id: OperatorId) -> OperatorCategory {
    info_for(id).category
}

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Resolve an operator spelling to its identifier.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(id: OperatorId, spelling: &'static str, token_name: &'static str, category: OperatorCategory) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        token_name,
        category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids_in(wanted: OperatorCategory) -> Vec<OperatorId> {
        OPERATORS.iter().map(|o| o.id).filter(|id| category(*id) == wanted).collect()
    }

    #[test]
    fn assignment_is_only_single_equals() {
        assert_eq!(ids_in(OperatorCategory::Assignment), [OperatorId::Eq]);
        assert_eq!(category(OperatorId::EqEq), OperatorCategory::Comparison);
    }

    #[test]
    fn categories_partition_the_registry() {
        assert_eq!(ids_in(OperatorCategory::Arithmetic).len(), 4);
        assert_eq!(ids_in(OperatorCategory::Comparison).len(), 6);
        assert_eq!(ids_in(OperatorCategory::Assignment).len(), 1);
        assert_eq!(OPERATORS.len(), 11);
    }
}
