//! Indentation-aware lexical front end for the offside scripting language.
//!
//! The lexer turns source text into typed tokens, synthesizes INDENT/DEDENT tokens from changes in leading
//! whitespace, and pushes every token, one at a time, into an incremental parser.
//!
//! ## Notes
//! - This crate is intentionally “lexer-only”: grammar and semantics belong to the parser behind
//!   [`parser::IncrementalParser`]. The two parsers shipped here exist for tooling and tests.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `offside_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use offside_syntax::lexer::{self, TokenKind};
//!
//! let tokens = lexer::lex("if x:\n    y = 1\n").unwrap();
//! let names: Vec<_> = tokens.iter().map(|t| t.kind.name()).collect();
//! assert_eq!(names, ["IF", "IDENTIFIER", "COLON", "NEWLINE", "INDENT", "IDENTIFIER", "ASSIGN", "NUMBER",
//!                    "NEWLINE", "DEDENT", "EOF"]);
//! assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
//! ```

pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
