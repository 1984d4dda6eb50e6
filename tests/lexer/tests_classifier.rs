//! Classifier tests against policy-language snippets.

use rstest::rstest;

use crate::helpers::source_fixtures::*;
use crate::helpers::token_assertions::{assert_covers, styled_texts};
use playground::lexer::tokenize_line;
use playground::{LexerMachine, LexerState, Position, TokenClass, tokenize};

use TokenClass::*;

// =============================================================================
// RULE PRIORITY
// =============================================================================

#[test]
fn test_check_if_is_single_keyword() {
    let result = tokenize("check if");

    assert_eq!(result.tokens.len(), 1);
    assert_eq!(result.tokens[0].class, Some(Keyword));
    assert_eq!(result.tokens[0].start, Position::new(0, 0));
    assert_eq!(result.tokens[0].end, Position::new(0, 8));
}

#[test]
fn test_predicate_application_walks_through_terms() {
    let text = r#"foo("a", $x, #sym, true, 42, 2023-01-01T00:00:00Z)"#;
    let result = tokenize(text);

    assert_eq!(
        result.classes(),
        vec![PredicateName, String, Variable, Symbol, Atom, Number, DateTime, Punctuation]
    );
    assert_eq!(result.final_state, LexerState::Start);
    assert_eq!(result.final_depth, 0);
    assert_covers(text, &result);
}

#[rstest]
#[case("// a comment", vec![Comment])]
#[case("deny if true", vec![Keyword, Atom])]
#[case("allow if", vec![Keyword])]
#[case(
    "can_read($file) <- right(#authority, $file, #read)",
    vec![
        PredicateName,
        Variable,
        Punctuation,
        Keyword,
        PredicateName,
        Symbol,
        Variable,
        Symbol,
        Punctuation,
    ]
)]
#[case("$x > 2", vec![Variable, Operator, Number])]
#[case("$a && $b || false", vec![Variable, Operator, Variable, Operator, Atom])]
#[case("/* a */ b(1)", vec![Comment, Comment, PredicateName, Number, Punctuation])]
#[case("op(-12)", vec![PredicateName, Number, Punctuation])]
#[case(
    "time($t), $t < 2021-12-20T00:00:00Z",
    vec![PredicateName, Variable, Punctuation, Variable, Operator, DateTime]
)]
#[case(
    r#"$file.starts_with("/folder1/")"#,
    vec![Variable, Punctuation, PredicateName, String, Punctuation]
)]
#[case(
    "order(#a) or other(#b)",
    vec![PredicateName, Symbol, Punctuation, Keyword, PredicateName, Symbol, Punctuation]
)]
fn test_snippet_classes(#[case] text: &str, #[case] expected: Vec<TokenClass>) {
    let result = tokenize(text);
    assert_eq!(result.classes(), expected, "classes for {text:?}");
    assert_covers(text, &result);
}

#[test]
fn test_styled_token_texts() {
    let text = r#"right(#authority, "/folder1/file1", #read)"#;
    let result = tokenize(text);

    assert_eq!(
        styled_texts(text, &result),
        vec![
            ("right", PredicateName),
            ("#authority", Symbol),
            ("\"/folder1/file1\"", String),
            ("#read", Symbol),
            (")", Punctuation),
        ]
    );
}

// =============================================================================
// STATES
// =============================================================================

#[test]
fn test_block_comment_returns_to_start() {
    let text = "/* first\n   second */ deny if true";
    let result = tokenize(text);

    assert_eq!(result.classes(), vec![Comment, Comment, Comment, Keyword, Atom]);
    assert_eq!(result.final_state, LexerState::Start);
}

#[test]
fn test_unclosed_block_comment_ends_in_comment_state() {
    let result = tokenize("/* never closed\nstill comment");
    assert_eq!(result.final_state, LexerState::Comment);
    assert!(result.styled().all(|t| t.class == Some(Comment)));
}

#[test]
fn test_comments_inside_argument_list() {
    let text = "right(\n  #authority, // owner\n  \"file\" /* x */\n)";
    let result = tokenize(text);

    assert_eq!(
        styled_texts(text, &result),
        vec![
            ("right", PredicateName),
            ("#authority", Symbol),
            ("// owner", Comment),
            ("\"file\"", String),
            ("/*", Comment),
            (" x */", Comment),
            (")", Punctuation),
        ]
    );
    assert_eq!(result.final_state, LexerState::Start);
    assert_eq!(result.final_depth, 0);
    assert_covers(text, &result);
}

#[test]
fn test_multiline_comment_inside_argument_list_resumes_terms() {
    let text = "op(#a, /* one\ntwo */ #b)";
    let result = tokenize(text);

    assert_eq!(
        result.classes(),
        vec![PredicateName, Symbol, Comment, Comment, Comment, Symbol, Punctuation]
    );
    assert_eq!(result.final_state, LexerState::Start);
    assert_eq!(playground::lexer::indentation_hint(text, 1, 2), None);
}

#[test]
fn test_unterminated_string_stops_at_line_end() {
    let text = "op(\"abc\ndef)";
    let result = tokenize(text);

    assert_eq!(
        styled_texts(text, &result),
        vec![
            ("op", PredicateName),
            ("\"abc", String),
            ("d", Punctuation),
            ("e", Punctuation),
            ("f", Punctuation),
            (")", Punctuation),
        ]
    );
}

#[test]
fn test_tokenize_from_terms_state() {
    let result = playground::lexer::tokenize_from("#read)", LexerState::Terms);
    assert_eq!(result.classes(), vec![Symbol, Punctuation]);
    assert_eq!(result.final_state, LexerState::Start);
}

#[test]
fn test_line_by_line_matches_whole_document() {
    let whole = tokenize(VERIFIER_BLOCK);

    let mut state = LexerState::Start;
    let mut depth = 0;
    let mut classes = Vec::new();
    for line in VERIFIER_BLOCK.lines() {
        let scanned = tokenize_line(line, state, depth);
        classes.extend(scanned.tokens.iter().filter_map(|t| t.class));
        state = scanned.state;
        depth = scanned.depth;
    }

    assert_eq!(classes, whole.classes());
    assert_eq!(state, whole.final_state);
    assert_eq!(depth, whole.final_depth);
}

// =============================================================================
// COORDINATES
// =============================================================================

#[test]
fn test_columns_are_utf16_units() {
    let text = "op(\"é😀\")";
    let result = tokenize(text);

    let string = result.tokens.iter().find(|t| t.class == Some(String)).unwrap();
    assert_eq!(string.start, Position::new(0, 3));
    assert_eq!(string.end, Position::new(0, 8));

    let close = result.tokens.last().unwrap();
    assert_eq!(close.class, Some(Punctuation));
    assert_eq!(close.start, Position::new(0, 8));
    assert_eq!(close.end, Position::new(0, 9));
}

#[test]
fn test_tokens_on_later_lines() {
    let result = tokenize(RESTRICTION_BLOCK);
    let string = result.tokens.iter().find(|t| t.class == Some(String)).unwrap();

    assert_eq!(string.text(RESTRICTION_BLOCK), "\"/folder1/\"");
    assert_eq!(string.start, Position::new(3, 20));
}

// =============================================================================
// FIXTURES
// =============================================================================

#[rstest]
#[case(AUTHORITY_BLOCK)]
#[case(RESTRICTION_BLOCK)]
#[case(VERIFIER_BLOCK)]
fn test_fixtures_cover_and_settle(#[case] text: &str) {
    let result = LexerMachine::new().tokenize(text);
    assert_covers(text, &result);
    assert_eq!(result.final_state, LexerState::Start);
    assert_eq!(result.final_depth, 0);
}

#[test]
fn test_broken_inputs_never_fail() {
    for text in BROKEN_INPUTS {
        let result = tokenize(text);
        assert_covers(text, &result);
    }
}

#[test]
fn test_retokenizing_is_identical() {
    let machine = LexerMachine::new();
    assert_eq!(machine.tokenize(VERIFIER_BLOCK), machine.tokenize(VERIFIER_BLOCK));
}
