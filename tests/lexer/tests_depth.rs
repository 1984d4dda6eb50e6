//! Nesting depth and indentation hint tests.

use rstest::rstest;

use crate::helpers::source_fixtures::VERIFIER_BLOCK;
use playground::lexer::indentation_hint;
use playground::{TokenClass, tokenize};

#[test]
fn test_unmatched_closers_clamp_at_zero() {
    let result = tokenize(")))");

    assert_eq!(result.tokens.len(), 3);
    for token in &result.tokens {
        assert_eq!(token.class, Some(TokenClass::Punctuation));
        assert_eq!(token.depth, 0);
    }
    assert_eq!(result.final_depth, 0);
}

#[test]
fn test_depth_after_each_bracket() {
    let result = tokenize("a([#x, [1]])");
    let depths: Vec<u32> = result.tokens.iter().map(|t| t.depth).collect();

    // a ( [ #x ,_ [ 1 ] ] )
    assert_eq!(depths, vec![0, 1, 2, 2, 2, 3, 3, 2, 1, 0]);
    assert_eq!(result.final_depth, 0);
}

#[test]
fn test_depth_recovers_after_stray_closer() {
    let result = tokenize(") op(");
    assert_eq!(result.final_depth, 1);
}

#[rstest]
#[case(0, Some(0))] // comment line
#[case(5, None)] // second line of a block comment
#[case(6, Some(0))] // allow if
#[case(7, Some(0))] // resource(...) follows a keyword, not a bracket
#[case(8, Some(0))]
fn test_verifier_indentation(#[case] line: usize, #[case] expected: Option<usize>) {
    assert_eq!(indentation_hint(VERIFIER_BLOCK, line, 2), expected);
}

#[test]
fn test_indentation_inside_open_argument_list() {
    let text = "right(\n#authority,\n\"file\",\n)";

    assert_eq!(indentation_hint(text, 1, 4), Some(4));
    assert_eq!(indentation_hint(text, 2, 4), Some(4));
    // a line opening with the closer sits one level out
    assert_eq!(indentation_hint(text, 3, 4), Some(0));
}

#[test]
fn test_no_indentation_inside_block_comment() {
    let text = "/* a long\ncomment\n*/";
    assert_eq!(indentation_hint(text, 1, 2), None);
    assert_eq!(indentation_hint(text, 2, 2), None);
}
