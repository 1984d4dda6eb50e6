//! Token types produced by the classifier.

use text_size::TextRange;

use crate::base::{Position, Range};

/// Highlighting class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenClass {
    Keyword,
    Comment,
    PredicateName,
    Operator,
    String,
    Variable,
    Symbol,
    Atom,
    Number,
    DateTime,
    Punctuation,
}

impl TokenClass {
    /// Style name handed to the renderer.
    pub fn style_name(self) -> &'static str {
        match self {
            TokenClass::Keyword => "keyword",
            TokenClass::Comment => "comment",
            TokenClass::PredicateName => "predicate",
            TokenClass::Operator => "operator",
            TokenClass::String => "string",
            TokenClass::Variable => "variable",
            TokenClass::Symbol => "symbol",
            TokenClass::Atom => "atom",
            TokenClass::Number => "number",
            TokenClass::DateTime => "datetime",
            TokenClass::Punctuation => "punctuation",
        }
    }
}

/// One classified span of source text.
///
/// Tokens are produced fresh on every tokenization pass and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// `None` for unstyled spans (whitespace, separators, line breaks,
    /// class-less bracket rules). They still occupy their span.
    pub class: Option<TokenClass>,
    pub start: Position,
    pub end: Position,
    /// Byte range within the tokenized text
    pub offset: TextRange,
    /// Nesting depth after this token
    pub depth: u32,
}

impl Token {
    pub fn range(&self) -> Range {
        Range::new(self.start, self.end)
    }

    /// The token's text within the source it was produced from.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.offset]
    }

    pub fn is_styled(&self) -> bool {
        self.class.is_some()
    }
}
