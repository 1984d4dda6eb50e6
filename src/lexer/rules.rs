//! Rule table for the policy language.
//!
//! Each lexer state owns an ordered list of rules. Rules are tried in
//! declaration order and the first non-empty match wins, so the order below
//! is load-bearing: keywords precede the bare identifier rule, timestamps
//! precede integers, line comments precede operators.
//!
//! # States
//!
//! - `Start` - top level of a fact, rule, check or policy
//! - `Comment` - inside a `/* ... */` block comment opened at the top level
//! - `Terms` - inside a predicate's argument list, entered after a predicate name
//! - `TermsComment` - inside a block comment opened in an argument list; `*/`
//!   returns to `Terms`

use once_cell::sync::Lazy;
use regex::Regex;

use super::token::TokenClass;

/// One node of the lexer state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LexerState {
    #[default]
    Start,
    Comment,
    Terms,
    TermsComment,
}

impl LexerState {
    pub const ALL: [LexerState; 4] = [
        LexerState::Start,
        LexerState::Comment,
        LexerState::Terms,
        LexerState::TermsComment,
    ];

    /// Whether automatic indentation applies while in this state.
    pub fn indents(self) -> bool {
        !LANGUAGE_META.dont_indent_states.contains(&self)
    }
}

/// Table-level metadata for the language.
#[derive(Debug, Clone, Copy)]
pub struct LanguageMeta {
    pub line_comment: &'static str,
    pub dont_indent_states: &'static [LexerState],
}

pub const LANGUAGE_META: LanguageMeta = LanguageMeta {
    line_comment: "//",
    dont_indent_states: &[LexerState::Comment, LexerState::TermsComment],
};

/// A compiled rule.
#[derive(Debug)]
pub struct Rule {
    /// Anchored at the start of the remaining line
    pub pattern: Regex,
    pub class: Option<TokenClass>,
    /// State to switch to after a match; `None` stays
    pub next: Option<LexerState>,
    pub indent: bool,
    pub dedent: bool,
}

impl Rule {
    /// Length in bytes of a non-empty match at the start of `rest`.
    pub fn match_len(&self, rest: &str) -> Option<usize> {
        self.pattern
            .find(rest)
            .map(|m| m.end())
            .filter(|&len| len > 0)
    }
}

/// Source form of a rule, kept as plain data.
#[derive(Debug, Clone, Copy)]
struct RuleDef {
    pattern: &'static str,
    class: Option<TokenClass>,
    next: Option<LexerState>,
    indent: bool,
    dedent: bool,
}

impl RuleDef {
    const fn token(pattern: &'static str, class: TokenClass) -> Self {
        Self {
            pattern,
            class: Some(class),
            next: None,
            indent: false,
            dedent: false,
        }
    }

    const fn plain(pattern: &'static str) -> Self {
        Self {
            pattern,
            class: None,
            next: None,
            indent: false,
            dedent: false,
        }
    }

    const fn then(mut self, next: LexerState) -> Self {
        self.next = Some(next);
        self
    }

    const fn indent(mut self) -> Self {
        self.indent = true;
        self
    }

    const fn dedent(mut self) -> Self {
        self.dedent = true;
        self
    }

    fn compile(&self) -> Rule {
        let anchored = format!("^(?:{})", self.pattern);
        let pattern = Regex::new(&anchored)
            .unwrap_or_else(|err| panic!("invalid lexer rule `{}`: {err}", self.pattern));
        Rule {
            pattern,
            class: self.class,
            next: self.next,
            indent: self.indent,
            dedent: self.dedent,
        }
    }
}

// ============================================================================
// PATTERNS
// ============================================================================

const WHITESPACE: &str = r"\s+";
const KEYWORD: &str = r"(?:allow if|deny if|check if|or|and)\b|<-";
const LINE_COMMENT: &str = r"//.*";
const BLOCK_COMMENT_OPEN: &str = r"/\*";
const BLOCK_COMMENT_CLOSE: &str = r".*?\*/";
const BLOCK_COMMENT_BODY: &str = r".*";
const IDENTIFIER: &str = r"[A-Za-z_][A-Za-z0-9_]*";
const SEPARATOR: &str = r",\s*";
const STRING: &str = r#""(?:[^"\\]|\\.)*(?:"|$)"#;
const VARIABLE: &str = r"\$[A-Za-z_][A-Za-z0-9_]*";
const SYMBOL: &str = r"#[A-Za-z_][A-Za-z0-9_]*";
const BOOLEAN: &str = r"(?:true|false)\b";
/// RFC 3339 timestamp
const DATE_TIME: &str = concat!(
    r"[0-9]+-(?:0[1-9]|1[012])-(?:0[1-9]|[12][0-9]|3[01])",
    r"T(?:[01][0-9]|2[0-3]):[0-5][0-9]:(?:[0-5][0-9]|60)(?:\.[0-9]+)?",
    r"(?:[Zz]|[+-](?:[01][0-9]|2[0-3]):[0-5][0-9])",
);
const INTEGER: &str = r"[-+]?[0-9]+";
const OPERATOR: &str = r"[-+/*=<>!]+";
const BOOLEAN_OPERATOR: &str = r"&&|\|\|";
const OPEN_BRACKET: &str = r"[{\[(]\s*";
const CLOSE_BRACKET: &str = r"[}\])]";
const CLOSE_INNER_BRACKET: &str = r"[}\]]";
const CLOSE_PAREN: &str = r"\)";

// ============================================================================
// STATE TABLE
// ============================================================================

const START_RULES: &[RuleDef] = &[
    RuleDef::plain(WHITESPACE),
    RuleDef::token(KEYWORD, TokenClass::Keyword),
    RuleDef::token(LINE_COMMENT, TokenClass::Comment),
    RuleDef::token(BLOCK_COMMENT_OPEN, TokenClass::Comment).then(LexerState::Comment),
    RuleDef::token(BOOLEAN, TokenClass::Atom),
    // a bare identifier at the top level is always a predicate application
    RuleDef::token(IDENTIFIER, TokenClass::PredicateName).then(LexerState::Terms),
    RuleDef::plain(SEPARATOR),
    RuleDef::token(STRING, TokenClass::String),
    RuleDef::token(VARIABLE, TokenClass::Variable),
    RuleDef::token(SYMBOL, TokenClass::Symbol),
    RuleDef::token(DATE_TIME, TokenClass::DateTime),
    RuleDef::token(INTEGER, TokenClass::Number),
    RuleDef::token(OPERATOR, TokenClass::Operator),
    RuleDef::token(BOOLEAN_OPERATOR, TokenClass::Operator),
    RuleDef::plain(OPEN_BRACKET).indent(),
    RuleDef::token(CLOSE_BRACKET, TokenClass::Punctuation).dedent(),
];

const COMMENT_RULES: &[RuleDef] = &[
    RuleDef::token(BLOCK_COMMENT_CLOSE, TokenClass::Comment).then(LexerState::Start),
    RuleDef::token(BLOCK_COMMENT_BODY, TokenClass::Comment),
];

const TERMS_RULES: &[RuleDef] = &[
    RuleDef::plain(WHITESPACE),
    RuleDef::token(LINE_COMMENT, TokenClass::Comment),
    RuleDef::token(BLOCK_COMMENT_OPEN, TokenClass::Comment).then(LexerState::TermsComment),
    RuleDef::plain(SEPARATOR),
    RuleDef::token(STRING, TokenClass::String),
    RuleDef::token(VARIABLE, TokenClass::Variable),
    RuleDef::token(SYMBOL, TokenClass::Symbol),
    RuleDef::token(BOOLEAN, TokenClass::Atom),
    RuleDef::token(DATE_TIME, TokenClass::DateTime),
    RuleDef::token(INTEGER, TokenClass::Number),
    RuleDef::token(OPERATOR, TokenClass::Operator),
    RuleDef::token(BOOLEAN_OPERATOR, TokenClass::Operator),
    RuleDef::plain(OPEN_BRACKET).indent(),
    RuleDef::token(CLOSE_PAREN, TokenClass::Punctuation)
        .dedent()
        .then(LexerState::Start),
    RuleDef::token(CLOSE_INNER_BRACKET, TokenClass::Punctuation).dedent(),
];

const TERMS_COMMENT_RULES: &[RuleDef] = &[
    RuleDef::token(BLOCK_COMMENT_CLOSE, TokenClass::Comment).then(LexerState::Terms),
    RuleDef::token(BLOCK_COMMENT_BODY, TokenClass::Comment),
];

/// Compiled rules for every state.
#[derive(Debug)]
pub struct RuleTable {
    start: Vec<Rule>,
    comment: Vec<Rule>,
    terms: Vec<Rule>,
    terms_comment: Vec<Rule>,
}

static RULE_TABLE: Lazy<RuleTable> = Lazy::new(|| RuleTable {
    start: START_RULES.iter().map(RuleDef::compile).collect(),
    comment: COMMENT_RULES.iter().map(RuleDef::compile).collect(),
    terms: TERMS_RULES.iter().map(RuleDef::compile).collect(),
    terms_comment: TERMS_COMMENT_RULES.iter().map(RuleDef::compile).collect(),
});

impl RuleTable {
    /// The process-wide table, compiled on first use.
    pub fn get() -> &'static RuleTable {
        &RULE_TABLE
    }

    /// Rules for `state`, in priority order.
    pub fn rules(&self, state: LexerState) -> &[Rule] {
        match state {
            LexerState::Start => &self.start,
            LexerState::Comment => &self.comment,
            LexerState::Terms => &self.terms,
            LexerState::TermsComment => &self.terms_comment,
        }
    }

    /// First rule of `state` that matches a non-empty prefix of `rest`.
    pub fn first_match(&self, state: LexerState, rest: &str) -> Option<(&Rule, usize)> {
        self.rules(state)
            .iter()
            .find_map(|rule| rule.match_len(rest).map(|len| (rule, len)))
    }
}
