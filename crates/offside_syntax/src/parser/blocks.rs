//! Block-structure recognizer.
//!
//! A deliberately small parser used by `offside check`. It knows nothing about expressions; it only checks the shape
//! the lexer's layout tokens must have:
//!
//! - an INDENT only follows a line ending in `:`, and a line ending in `:` is always followed by an INDENT
//! - parentheses balance within a logical line
//! - every logical line has at least one token before its NEWLINE
//! - `EOF` arrives with no block still open

use crate::lexer::{Token, TokenKind};
use crate::token_helpers::Nesting;

use super::{IncrementalParser, ParseStatus, Rejection};

/// What [`BlockChecker`] reports after accepting a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockSummary {
    /// Logical lines (statements and block headers).
    pub statements: usize,
    /// Deepest block nesting seen.
    pub max_depth: usize,
}

#[derive(Debug, Default)]
pub struct BlockChecker {
    depth: usize,
    paren_depth: usize,
    /// Tokens on the current logical line.
    line_tokens: usize,
    last_kind: Option<TokenKind>,
    /// The previous logical line ended in `:`.
    expect_indent: bool,
    summary: BlockSummary,
}

impl BlockChecker {
    pub fn new() -> Self {
        Self::default()
    }

    fn ends_with_colon(&self) -> bool {
        self.last_kind.is_some_and(|kind| kind.is_block_opener())
    }

    fn end_of_line(&mut self, token: &Token<'_>) -> Result<(), Rejection> {
        if self.paren_depth > 0 {
            return Err(Rejection::new(format!(
                "unclosed '(' at end of line {}",
                token.line()
            )));
        }
        self.expect_indent = self.ends_with_colon();
        self.summary.statements += 1;
        self.line_tokens = 0;
        self.last_kind = None;
        Ok(())
    }

    fn step(&mut self, token: &Token<'_>) -> Result<ParseStatus, Rejection> {
        match token.kind {
            TokenKind::Indent => {
                if !self.expect_indent {
                    return Err(Rejection::new("unexpected indent"));
                }
                self.expect_indent = false;
                self.depth += 1;
                self.summary.max_depth = self.summary.max_depth.max(self.depth);
            }
            TokenKind::Dedent => {
                if self.expect_indent {
                    return Err(Rejection::new("expected an indented block after ':'"));
                }
                self.depth = self
                    .depth
                    .checked_sub(1)
                    .ok_or_else(|| Rejection::new("dedent without an open block"))?;
            }
            TokenKind::Newline => {
                if self.line_tokens == 0 {
                    return Err(Rejection::new("empty statement"));
                }
                self.end_of_line(token)?;
            }
            TokenKind::Eof => {
                // The last line may lack a terminator.
                if self.line_tokens > 0 {
                    self.end_of_line(token)?;
                }
                if self.expect_indent {
                    return Err(Rejection::new("expected an indented block after ':'"));
                }
                if self.depth > 0 {
                    return Err(Rejection::new(format!("{} block(s) still open at end of input", self.depth)));
                }
                return Ok(ParseStatus::Accepted);
            }
            kind => {
                if self.expect_indent {
                    return Err(Rejection::new(format!(
                        "expected an indented block after ':', found {kind}"
                    )));
                }
                match kind.nesting() {
                    Nesting::Open => self.paren_depth += 1,
                    Nesting::Close => {
                        self.paren_depth = self
                            .paren_depth
                            .checked_sub(1)
                            .ok_or_else(|| Rejection::new("unmatched ')'"))?;
                    }
                    Nesting::Neutral => {}
                }
                self.line_tokens += 1;
                self.last_kind = Some(kind);
            }
        }
        Ok(ParseStatus::NeedMore)
    }
}

impl<'src> IncrementalParser<'src> for BlockChecker {
    type Output = BlockSummary;

    fn push(&mut self, token: &Token<'src>) -> ParseStatus {
        match self.step(token) {
            Ok(status) => status,
            Err(rejection) => ParseStatus::Rejected(rejection),
        }
    }

    fn release(self) -> Self::Output {
        self.summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::SessionError;
    use crate::lexer;

    fn check(source: &str) -> Result<BlockSummary, SessionError> {
        lexer::run(source, BlockChecker::new())
    }

    fn rejection(source: &str) -> (usize, String) {
        match check(source) {
            Err(SessionError::Parser { line, message, .. }) => (line, message),
            other => panic!("expected a parser error for {source:?}, got {other:?}"),
        }
    }

    #[test]
    fn accepts_nested_blocks() {
        let source = "def f(a, b):\n    if a > b:\n        return a\n    return b\nx = f(1, 2)\n";
        let summary = check(source).unwrap();
        assert_eq!(summary.statements, 5);
        assert_eq!(summary.max_depth, 2);
    }

    #[test]
    fn accepts_missing_final_newline() {
        let summary = check("while True:\n    break").unwrap();
        assert_eq!(summary.statements, 2);
    }

    #[test]
    fn accepts_empty_input() {
        assert_eq!(check("").unwrap(), BlockSummary::default());
        assert_eq!(check("\n\n# only comments\n").unwrap(), BlockSummary::default());
    }

    #[test]
    fn rejects_indent_without_header() {
        let (line, message) = rejection("x = 1\n    y = 2\n");
        assert_eq!(line, 2);
        assert_eq!(message, "unexpected indent");
    }

    #[test]
    fn rejects_header_without_block() {
        let (line, message) = rejection("if x:\ny = 2\n");
        assert_eq!(line, 2);
        assert_eq!(message, "expected an indented block after ':', found IDENTIFIER");
    }

    #[test]
    fn rejects_header_at_end_of_input() {
        let (_, message) = rejection("if x:\n");
        assert_eq!(message, "expected an indented block after ':'");
    }

    #[test]
    fn rejects_unbalanced_parentheses() {
        assert_eq!(rejection("f(1, 2\n").1, "unclosed '(' at end of line 1");
        assert_eq!(rejection("x = 1)\n").1, "unmatched ')'");
    }
}
