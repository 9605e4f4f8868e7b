//! Push-protocol tests: what the lexer does with each parser answer, and that the parser is always released once.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use offside_syntax::diagnostics::SessionError;
use offside_syntax::lexer::{self, Token, TokenKind};
use offside_syntax::parser::{IncrementalParser, ParseStatus, Rejection};

/// Scripted parser: answers `NeedMore` until `stop_at` tokens have been seen, then gives `answer`.
struct Scripted {
    stop_at: Option<usize>,
    answer: ParseStatus,
    seen: Rc<RefCell<Vec<String>>>,
    releases: Rc<Cell<usize>>,
}

impl Scripted {
    fn new(stop_at: Option<usize>, answer: ParseStatus) -> Self {
        Self {
            stop_at,
            answer,
            seen: Rc::default(),
            releases: Rc::default(),
        }
    }
}

impl<'src> IncrementalParser<'src> for Scripted {
    type Output = usize;

    fn push(&mut self, token: &Token<'src>) -> ParseStatus {
        self.seen.borrow_mut().push(token.kind.name().to_string());
        let count = self.seen.borrow().len();
        if Some(count) == self.stop_at {
            return self.answer.clone();
        }
        if token.kind == TokenKind::Eof {
            ParseStatus::Accepted
        } else {
            ParseStatus::NeedMore
        }
    }

    fn release(self) -> Self::Output {
        self.releases.set(self.releases.get() + 1);
        self.seen.borrow().len()
    }
}

fn run(source: &str, parser: Scripted) -> (Result<usize, SessionError>, Vec<String>, usize) {
    let seen = Rc::clone(&parser.seen);
    let releases = Rc::clone(&parser.releases);
    let result = lexer::run(source, parser);
    let seen = seen.borrow().clone();
    (result, seen, releases.get())
}

#[test]
fn success_releases_once_and_returns_output() {
    let (result, seen, releases) = run("x = 1\n", Scripted::new(None, ParseStatus::NeedMore));
    assert_eq!(result.unwrap(), 5);
    assert_eq!(seen, ["IDENTIFIER", "ASSIGN", "NUMBER", "NEWLINE", "EOF"]);
    assert_eq!(releases, 1);
}

#[test]
fn rejection_is_forwarded_verbatim() {
    let answer = ParseStatus::Rejected(Rejection::new("syntax error, unexpected NUMBER"));
    let (result, seen, releases) = run("x = 1\ny = 2\n", Scripted::new(Some(3), answer));

    match result {
        Err(SessionError::Parser { line, token, message, .. }) => {
            assert_eq!(line, 1);
            assert_eq!(token, "NUMBER");
            assert_eq!(message, "syntax error, unexpected NUMBER");
        }
        other => panic!("expected a parser error, got {other:?}"),
    }
    // Nothing is delivered after the rejected token.
    assert_eq!(seen.len(), 3);
    assert_eq!(releases, 1);
}

#[test]
fn acceptance_before_end_of_input_is_an_error() {
    let (result, seen, releases) = run("x = 1\ny = 2\n", Scripted::new(Some(4), ParseStatus::Accepted));
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "parser error on line 1: parser accepted before end of input");
    assert_eq!(seen.len(), 4);
    assert_eq!(releases, 1);
}

#[test]
fn need_more_at_end_of_input_is_an_error() {
    let (result, seen, releases) = run("x\n", Scripted::new(Some(3), ParseStatus::NeedMore));
    let err = result.unwrap_err();
    assert!(matches!(err, SessionError::Parser { token: "EOF", .. }), "{err:?}");
    assert_eq!(err.to_string(), "parser error on line 2: unexpected end of input");
    assert_eq!(seen, ["IDENTIFIER", "NEWLINE", "EOF"]);
    assert_eq!(releases, 1);
}

#[test]
fn lexical_error_releases_once_and_stops_delivery() {
    let (result, seen, releases) = run("x = 1\ny = @ + 2\n", Scripted::new(None, ParseStatus::NeedMore));
    assert!(matches!(result, Err(SessionError::Lexical { ch: '@', line: 2, .. })));
    assert_eq!(seen, ["IDENTIFIER", "ASSIGN", "NUMBER", "NEWLINE", "IDENTIFIER", "ASSIGN"]);
    assert_eq!(releases, 1);
}

#[test]
fn indentation_error_delivers_nothing_for_the_line() {
    let source = "if x:\n    y = 1\n  z = 2\n";
    let (result, seen, releases) = run(source, Scripted::new(None, ParseStatus::NeedMore));
    assert!(matches!(result, Err(SessionError::Indentation { line: 3, width: 2, .. })));
    // The stream stops right after line 2's NEWLINE: no DEDENT, no `z`.
    assert_eq!(seen.last().map(String::as_str), Some("NEWLINE"));
    assert_eq!(seen.len(), 9);
    assert_eq!(releases, 1);
}

#[test]
fn rejection_of_a_synthesized_dedent() {
    let answer = ParseStatus::Rejected(Rejection::new("no dedent allowed here"));
    // IF IDENT COLON NEWLINE INDENT IDENT NEWLINE DEDENT
    let (result, _, releases) = run("if a:\n  b\nc\n", Scripted::new(Some(8), answer));
    match result {
        Err(SessionError::Parser { line, token, .. }) => {
            assert_eq!(line, 3);
            assert_eq!(token, "DEDENT");
        }
        other => panic!("expected a parser error, got {other:?}"),
    }
    assert_eq!(releases, 1);
}

#[test]
fn final_dedents_precede_eof_without_newline() {
    let (result, seen, _) = run("if a:\n  if b:\n    c", Scripted::new(None, ParseStatus::NeedMore));
    assert!(result.is_ok());
    assert_eq!(seen[seen.len() - 4..], ["IDENTIFIER", "DEDENT", "DEDENT", "EOF"]);
}
