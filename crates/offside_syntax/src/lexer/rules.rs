//! Scanner rule table for the offside lexer
//!
//! Every token category is a [`Rule`]: a kind plus a pattern. At each position the scanner runs all rules and keeps
//! the longest match; on equal length the rule listed first wins. Keyword rules are listed before the identifier
//! rule, which is what makes `if` a keyword while `iffy` stays an identifier.

use offside_core::lang::{keywords, operators, punctuation};

use super::tokens::TokenKind;

/// How a rule recognizes its text.
#[derive(Clone, Copy)]
enum Pattern {
    /// Exact spelling.
    Literal(&'static str),
    /// Character-class matcher returning the matched byte length (0 for no match).
    Class(fn(&str) -> usize),
}

impl Pattern {
    fn match_len(&self, rest: &str) -> usize {
        match self {
            Pattern::Literal(spelling) => {
                if rest.starts_with(spelling) {
                    spelling.len()
                } else {
                    0
                }
            }
            Pattern::Class(matcher) => matcher(rest),
        }
    }
}

#[derive(Clone, Copy)]
struct Rule {
    kind: TokenKind,
    pattern: Pattern,
}

/// What sits at the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Scan {
    /// A real token of `len` bytes.
    Token(TokenKind, usize),
    /// Spaces/tabs between tokens.
    Blank(usize),
    /// `#` up to (not including) the line terminator.
    Comment(usize),
    /// `\n` or `\r\n`.
    LineEnd(usize),
    End,
    /// No rule matches this character.
    NoMatch(char),
}

/// Longest-match scanner over the language's token rules.
pub(super) struct Scanner {
    rules: Vec<Rule>,
}

impl Scanner {
    pub(super) fn new() -> Self {
        let keyword_rules = keywords::KEYWORDS.iter().map(|k| Rule {
            kind: TokenKind::Keyword(k.id),
            pattern: Pattern::Literal(k.canonical),
        });
        let literal_rules = [
            Rule {
                kind: TokenKind::Identifier,
                pattern: Pattern::Class(identifier),
            },
            Rule {
                kind: TokenKind::Float,
                pattern: Pattern::Class(float),
            },
            Rule {
                kind: TokenKind::Number,
                pattern: Pattern::Class(digits),
            },
        ];
        let operator_rules = operators::OPERATORS.iter().map(|o| Rule {
            kind: TokenKind::Operator(o.id),
            pattern: Pattern::Literal(o.spelling),
        });
        let punctuation_rules = punctuation::PUNCTUATION.iter().map(|p| Rule {
            kind: TokenKind::Punctuation(p.id),
            pattern: Pattern::Literal(p.canonical),
        });

        Self {
            rules: keyword_rules
                .chain(literal_rules)
                .chain(operator_rules)
                .chain(punctuation_rules)
                .collect(),
        }
    }

    /// Classify the text at the start of `rest`, which is never at the start of a line.
    pub(super) fn scan(&self, rest: &str) -> Scan {
        let Some(c) = rest.chars().next() else {
            return Scan::End;
        };

        match c {
            ' ' | '\t' => return Scan::Blank(whitespace_run(rest)),
            '#' => return Scan::Comment(comment(rest)),
            _ => {}
        }
        if let Some(len) = line_terminator(rest) {
            return Scan::LineEnd(len);
        }

        match self.longest_match(rest) {
            Some((kind, len)) => Scan::Token(kind, len),
            None => Scan::NoMatch(c),
        }
    }

    fn longest_match(&self, rest: &str) -> Option<(TokenKind, usize)> {
        let mut best: Option<(TokenKind, usize)> = None;
        for rule in &self.rules {
            let len = rule.pattern.match_len(rest);
            // Strictly longer only: ties stay with the earlier rule.
            if len > best.map_or(0, |(_, l)| l) {
                best = Some((rule.kind, len));
            }
        }
        best
    }
}

// ============================================================================
// Line-level helpers
// ============================================================================

/// Width of the leading space/tab run. Tabs and spaces both count as one.
pub(super) fn whitespace_run(rest: &str) -> usize {
    rest.bytes().take_while(|b| *b == b' ' || *b == b'\t').count()
}

/// Length of a `\n` or `\r\n` terminator at the start of `rest`.
pub(super) fn line_terminator(rest: &str) -> Option<usize> {
    if rest.starts_with('\n') {
        Some(1)
    } else if rest.starts_with("\r\n") {
        Some(2)
    } else {
        None
    }
}

/// Length of a comment starting at `rest`, stopping before the line terminator.
pub(super) fn comment(rest: &str) -> usize {
    match rest.find('\n') {
        Some(nl) if rest[..nl].ends_with('\r') => nl - 1,
        Some(nl) => nl,
        None => rest.len(),
    }
}

/// True when the line holds nothing to tokenize: it ends here, or only a comment follows.
pub(super) fn is_blank_line(after_indent: &str) -> bool {
    after_indent.is_empty() || after_indent.starts_with('#') || line_terminator(after_indent).is_some()
}

// ============================================================================
// Character-class matchers
// ============================================================================

fn digits(rest: &str) -> usize {
    rest.bytes().take_while(u8::is_ascii_digit).count()
}

/// `[A-Za-z_][A-Za-z0-9_]*` (ASCII-only).
fn identifier(rest: &str) -> usize {
    let bytes = rest.as_bytes();
    match bytes.first() {
        Some(b) if b.is_ascii_alphabetic() || *b == b'_' => {
            1 + bytes[1..]
                .iter()
                .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_')
                .count()
        }
        _ => 0,
    }
}

/// `[0-9]*\.[0-9]+`
fn float(rest: &str) -> usize {
    let int_part = digits(rest);
    if rest.as_bytes().get(int_part) != Some(&b'.') {
        return 0;
    }
    let frac_part = digits(&rest[int_part + 1..]);
    if frac_part == 0 { 0 } else { int_part + 1 + frac_part }
}
