//! Canonical language vocabulary for the offside lexer.
//!
//! This crate is intentionally tiny and dependency-free. It holds the reserved words, operators and punctuation of the
//! scripting language as stable ids plus `const` metadata tables, so the scanner, the reference parsers and any
//! tooling agree on spellings and token names without stringly-typed checks.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global state, and no lexer types.
//! - The scanner builds its rule table from these registries; the registries themselves never tokenize text.

pub mod lang;
