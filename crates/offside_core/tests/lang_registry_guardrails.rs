use std::collections::HashMap;

use offside_core::lang::keywords;
use offside_core::lang::operators;
use offside_core::lang::punctuation;

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, keywords::KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::as_str(info.id),
            info.canonical,
            "keyword as_str mismatch for {:?}",
            info.id
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn keyword_set_is_exactly_the_reserved_words() {
    let mut spellings: Vec<&str> = keywords::KEYWORDS.iter().map(|k| k.canonical).collect();
    spellings.sort_unstable();
    assert_eq!(
        spellings,
        vec!["False", "True", "and", "break", "def", "elif", "else", "if", "not", "or", "return", "while"]
    );
}

#[test]
fn keywords_look_like_identifiers() {
    // The scanner relies on keyword rules shadowing the identifier rule on equal-length matches.
    for info in keywords::KEYWORDS {
        let mut chars = info.canonical.chars();
        let first = chars.next().unwrap();
        assert!(first.is_ascii_alphabetic() || first == '_', "{}", info.canonical);
        assert!(chars.all(|c| c.is_ascii_alphanumeric() || c == '_'), "{}", info.canonical);
    }
}

#[test]
fn operators_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, operators::OperatorId> = HashMap::new();

    for info in operators::OPERATORS {
        assert_eq!(operators::from_str(info.spelling), Some(info.id));
        assert_eq!(operators::as_str(info.id), info.spelling);
        if let Some(prev) = seen.insert(info.spelling, info.id) {
            panic!("duplicate operator spelling {:?}: {:?} and {:?}", info.spelling, prev, info.id);
        }
    }
}

#[test]
fn punctuation_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, punctuation::PunctuationId> = HashMap::new();

    for info in punctuation::PUNCTUATION {
        assert_eq!(punctuation::from_str(info.canonical), Some(info.id));
        assert_eq!(punctuation::as_str(info.id), info.canonical);
        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!("duplicate punctuation spelling {:?}: {:?} and {:?}", info.canonical, prev, info.id);
        }
    }
}

#[test]
fn token_names_are_unique_across_registries() {
    let mut seen: HashMap<&'static str, &'static str> = HashMap::new();
    let names = keywords::KEYWORDS
        .iter()
        .map(|k| (k.token_name, k.canonical))
        .chain(operators::OPERATORS.iter().map(|o| (o.token_name, o.spelling)))
        .chain(punctuation::PUNCTUATION.iter().map(|p| (p.token_name, p.canonical)));

    for (name, spelling) in names {
        for reserved in ["INDENT", "DEDENT", "NEWLINE", "IDENTIFIER", "NUMBER", "FLOAT", "EOF"] {
            assert_ne!(name, reserved, "{spelling:?} reuses a structural token name");
        }
        if let Some(prev) = seen.insert(name, spelling) {
            panic!("token name {name} used by both {prev:?} and {spelling:?}");
        }
    }
}
