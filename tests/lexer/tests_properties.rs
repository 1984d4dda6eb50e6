//! Property tests: the classifier terminates, covers its input and is
//! deterministic on any text.

use proptest::prelude::*;

use crate::helpers::token_assertions::assert_covers;
use playground::lexer::tokenize_from;
use playground::{LexerState, tokenize};

/// Text drawn mostly from characters the rule table cares about.
fn policy_like() -> impl Strategy<Value = String> {
    proptest::string::string_regex(
        r#"[a-z_$#"\\/*(),\[\]{}<>=!&|+\-0-9TZ:. \t\r\né😀]{0,120}"#,
    )
    .unwrap()
}

proptest! {
    #[test]
    fn prop_tokens_cover_arbitrary_text(text in "\\PC{0,100}") {
        let result = tokenize(&text);
        assert_covers(&text, &result);
    }

    #[test]
    fn prop_tokens_cover_policy_like_text(text in policy_like()) {
        let result = tokenize(&text);
        assert_covers(&text, &result);
    }

    #[test]
    fn prop_tokenize_is_deterministic(text in policy_like()) {
        prop_assert_eq!(tokenize(&text), tokenize(&text));
    }

    #[test]
    fn prop_any_start_state_covers(text in policy_like(), state in 0..LexerState::ALL.len()) {
        let state = LexerState::ALL[state];
        let result = tokenize_from(&text, state);
        assert_covers(&text, &result);
    }
}
