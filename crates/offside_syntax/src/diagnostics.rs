//! Session diagnostics.
//!
//! Every failure is terminal for the session: the lexer stops at the first lexical error, indentation error or
//! parser rejection and reports it as a [`SessionError`]. Each variant carries the 1-based line and a source span, so
//! the CLI can render it with `miette` against the original text.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Fatal outcome of a lexing session.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SessionError {
    /// No scanning rule matches the current character.
    #[error("lexical error on line {line}: unexpected character {ch:?}")]
    #[diagnostic(code(offside::lexical), help("tokens are keywords, identifiers, numbers, operators, `(`, `)`, `,` and `:`"))]
    Lexical {
        ch: char,
        line: usize,
        #[label("no token starts with this character")]
        span: SourceSpan,
    },

    /// A line's indentation closes blocks but lands on a width that was never opened.
    #[error("indentation error on line {line}: unindent to width {width} does not match any outer block")]
    #[diagnostic(code(offside::indentation))]
    Indentation {
        line: usize,
        width: usize,
        #[label("indentation ends here")]
        span: SourceSpan,
        #[help]
        hint: String,
    },

    /// The parser rejected a token (or broke the push protocol).
    #[error("parser error on line {line}: {message}")]
    #[diagnostic(code(offside::parser))]
    Parser {
        line: usize,
        /// Kind name of the token being delivered.
        token: &'static str,
        message: String,
        #[label("rejected here")]
        span: SourceSpan,
    },
}

impl SessionError {
    /// 1-based line the error is reported on.
    pub fn line(&self) -> usize {
        match self {
            SessionError::Lexical { line, .. }
            | SessionError::Indentation { line, .. }
            | SessionError::Parser { line, .. } => *line,
        }
    }

    /// Short category name, as used in log fields.
    pub fn category(&self) -> &'static str {
        match self {
            SessionError::Lexical { .. } => "lexical",
            SessionError::Indentation { .. } => "indentation",
            SessionError::Parser { .. } => "parser",
        }
    }
}

/// Format the open widths for an indentation hint: `open blocks are indented 0, 4 or 8`.
pub(crate) fn open_levels_hint(open: &[usize]) -> String {
    let widths: Vec<String> = open.iter().map(|w| w.to_string()).collect();
    match widths.split_last() {
        Some((last, rest)) if !rest.is_empty() => {
            format!("open blocks are indented {} or {}", rest.join(", "), last)
        }
        Some((only, _)) => format!("the only open block is indented {only}"),
        None => "no blocks are open".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_lists_open_widths() {
        assert_eq!(open_levels_hint(&[0, 4, 8]), "open blocks are indented 0, 4 or 8");
        assert_eq!(open_levels_hint(&[0, 4]), "open blocks are indented 0 or 4");
        assert_eq!(open_levels_hint(&[0]), "the only open block is indented 0");
    }

    #[test]
    fn display_names_category_and_line() {
        let err = SessionError::Lexical {
            ch: '@',
            line: 3,
            span: (10, 1).into(),
        };
        assert_eq!(err.to_string(), "lexical error on line 3: unexpected character '@'");
        assert_eq!(err.line(), 3);
        assert_eq!(err.category(), "lexical");
    }
}
