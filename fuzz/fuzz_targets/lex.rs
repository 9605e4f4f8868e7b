#![no_main]

use libfuzzer_sys::fuzz_target;
use offside_syntax::lexer::{self, TokenKind};
use offside_syntax::parser::BlockChecker;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Fuzz the lexer
        if let Ok(tokens) = lexer::lex(s) {
            let indents = tokens.iter().filter(|t| t.kind == TokenKind::Indent).count();
            let dedents = tokens.iter().filter(|t| t.kind == TokenKind::Dedent).count();
            assert_eq!(indents, dedents);
            // Only layout tokens may have an empty payload
            assert!(tokens.iter().all(|t| t.is_layout() || !t.text().is_empty()));
        }
        // And the same input through the block checker
        let _ = lexer::run(s, BlockChecker::new());
    }
});
