//! Language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: reserved keywords, operators and punctuation.
//!
//! Callers work with **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up spellings/metadata via the registry
//! tables instead of comparing strings.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no token types, no IO, no side effects.
//! - The lexer enforces syntax; registries provide spellings and token names for shared use (diagnostics, token dumps,
//!   parser messages).
//!
//! ## Examples
//! ```rust
//! use offside_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("elif"), Some(KeywordId::Elif));
//! assert_eq!(keywords::as_str(KeywordId::Elif), "elif");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
