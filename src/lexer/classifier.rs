//! Token classifier: drives the rule table over source text.
//!
//! Text is scanned line by line, the way the host editing surface feeds its
//! highlighter. State and nesting depth carry over from one line to the
//! next. Every byte of the input ends up in exactly one token:
//!
//! - a rule match becomes a token with the rule's class (possibly `None`)
//! - a character no rule matches becomes a one-character `Punctuation` token
//! - a line break becomes an unstyled token spanning into the next line
//!
//! The classifier never fails.

use text_size::{TextRange, TextSize};

use super::rules::{LexerState, RuleTable};
use super::token::{Token, TokenClass};
use crate::base::Position;

/// Result of tokenizing a whole text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenized {
    pub tokens: Vec<Token>,
    pub final_state: LexerState,
    pub final_depth: u32,
}

impl Tokenized {
    /// Classes of the styled tokens, in order.
    pub fn classes(&self) -> Vec<TokenClass> {
        self.tokens.iter().filter_map(|t| t.class).collect()
    }

    /// Styled tokens only.
    pub fn styled(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| t.is_styled())
    }
}

/// Result of tokenizing a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTokens {
    pub tokens: Vec<Token>,
    pub state: LexerState,
    pub depth: u32,
}

/// Scanner position within the text being tokenized.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    line: usize,
    /// UTF-16 column
    column: usize,
    /// Byte offset from the start of the text
    offset: usize,
}

impl Cursor {
    fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

struct Scanner<'t> {
    table: &'t RuleTable,
    state: LexerState,
    depth: u32,
    cursor: Cursor,
    tokens: Vec<Token>,
}

impl<'t> Scanner<'t> {
    fn new(table: &'t RuleTable, state: LexerState, depth: u32) -> Self {
        Self {
            table,
            state,
            depth,
            cursor: Cursor {
                line: 0,
                column: 0,
                offset: 0,
            },
            tokens: Vec::new(),
        }
    }

    fn emit(&mut self, class: Option<TokenClass>, len: usize, end: Position) {
        let start = self.cursor.position();
        let range = TextRange::new(
            text_offset(self.cursor.offset),
            text_offset(self.cursor.offset + len),
        );
        self.tokens.push(Token {
            class,
            start,
            end,
            offset: range,
            depth: self.depth,
        });
    }

    /// Scan one line (without its terminator).
    fn scan_line(&mut self, line: &str) {
        let table = self.table;
        let mut pos = 0;
        while pos < line.len() {
            let rest = &line[pos..];
            let (class, len) = match table.first_match(self.state, rest) {
                Some((rule, len)) => {
                    if rule.indent {
                        self.depth += 1;
                    }
                    if rule.dedent {
                        self.depth = self.depth.saturating_sub(1);
                    }
                    if let Some(next) = rule.next {
                        self.state = next;
                    }
                    (rule.class, len)
                }
                None => {
                    // rest is non-empty, so there is a next char
                    let len = rest.chars().next().map_or(1, char::len_utf8);
                    (Some(TokenClass::Punctuation), len)
                }
            };

            let width = rest[..len].encode_utf16().count();
            let end = Position::new(self.cursor.line, self.cursor.column + width);
            self.emit(class, len, end);
            self.cursor.column += width;
            self.cursor.offset += len;
            pos += len;
        }
    }

    /// Emit the line terminator and move to the next line.
    fn break_line(&mut self, terminator_len: usize) {
        let end = Position::new(self.cursor.line + 1, 0);
        self.emit(None, terminator_len, end);
        self.cursor = Cursor {
            line: self.cursor.line + 1,
            column: 0,
            offset: self.cursor.offset + terminator_len,
        };
    }
}

fn text_offset(offset: usize) -> TextSize {
    TextSize::try_from(offset).unwrap_or(TextSize::from(u32::MAX))
}

/// Split off the line terminator (`\n` or `\r\n`) of a line produced by
/// `split_inclusive('\n')`.
fn split_terminator(chunk: &str) -> (&str, usize) {
    if let Some(body) = chunk.strip_suffix("\r\n") {
        (body, 2)
    } else if let Some(body) = chunk.strip_suffix('\n') {
        (body, 1)
    } else {
        (chunk, 0)
    }
}

/// Tokenize `text` starting in `state` at nesting depth zero.
pub fn tokenize_from(text: &str, state: LexerState) -> Tokenized {
    let mut scanner = Scanner::new(RuleTable::get(), state, 0);

    for chunk in text.split_inclusive('\n') {
        let (line, terminator_len) = split_terminator(chunk);
        scanner.scan_line(line);
        if terminator_len > 0 {
            scanner.break_line(terminator_len);
        }
    }

    tracing::trace!(
        bytes = text.len(),
        tokens = scanner.tokens.len(),
        final_state = ?scanner.state,
        "tokenized text"
    );

    Tokenized {
        tokens: scanner.tokens,
        final_state: scanner.state,
        final_depth: scanner.depth,
    }
}

/// Tokenize a whole document from the `Start` state.
pub fn tokenize(text: &str) -> Tokenized {
    tokenize_from(text, LexerState::Start)
}

/// Tokenize one line, resuming from `state` and `depth`.
///
/// Positions are relative to the line (line 0) and byte offsets to its
/// first byte. A trailing terminator, if present, is not scanned.
pub fn tokenize_line(line: &str, state: LexerState, depth: u32) -> LineTokens {
    let (line, _) = split_terminator(line);
    let mut scanner = Scanner::new(RuleTable::get(), state, depth);
    scanner.scan_line(line);
    LineTokens {
        tokens: scanner.tokens,
        state: scanner.state,
        depth: scanner.depth,
    }
}

/// Indentation in columns for `line` of `text`.
///
/// Derived from the nesting depth reached at the end of the previous line.
/// A line that itself starts with a closing bracket sits one level out.
/// Returns `None` when the previous line ends in a state that does not
/// indent (inside a block comment), leaving the line as typed.
pub fn indentation_hint(text: &str, line: usize, indent_unit: usize) -> Option<usize> {
    let mut state = LexerState::Start;
    let mut depth = 0;
    let mut target = "";

    for (index, chunk) in text.split_inclusive('\n').enumerate() {
        if index == line {
            target = split_terminator(chunk).0;
            break;
        }
        let scanned = tokenize_line(chunk, state, depth);
        state = scanned.state;
        depth = scanned.depth;
    }

    if !state.indents() {
        return None;
    }

    let leading = target.trim_start();
    let closes = RuleTable::get()
        .first_match(state, leading)
        .is_some_and(|(rule, _)| rule.dedent);
    if closes {
        depth = depth.saturating_sub(1);
    }

    Some(depth as usize * indent_unit)
}
