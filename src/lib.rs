#![forbid(unsafe_code)]
//! offside: an indentation-aware lexical front end
//!
//! The lexer itself lives in `offside_syntax`; this crate adds the command-line tool around it.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: Registry lookups in `offside_core` use `.expect(...)`; a missing entry is a programming
//!   error caught by the registry guardrail tests.

pub mod cli;

pub use offside_syntax::diagnostics;
pub use offside_syntax::lexer;
pub use offside_syntax::parser;
