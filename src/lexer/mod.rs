//! Lexer for the policy language: a data-driven state machine.
//!
//! ```text
//! RuleTable (rules.rs)        ← immutable, compiled once per process
//!     │
//!     ▼
//! Scanner (classifier.rs)     ← first-match-wins driver, line by line
//!     │
//!     ▼
//! Tokenized                   ← contiguous tokens + final state/depth
//! ```
//!
//! [`LexerMachine`] is the handle the rest of the crate holds. It carries no
//! mutable state, so one machine can serve any number of editors at once.

mod classifier;
mod rules;
mod token;

pub use classifier::{
    LineTokens, Tokenized, indentation_hint, tokenize, tokenize_from, tokenize_line,
};
pub use rules::{LANGUAGE_META, LanguageMeta, LexerState, Rule, RuleTable};
pub use token::{Token, TokenClass};

/// Owner of the rule table.
#[derive(Debug, Clone, Copy)]
pub struct LexerMachine {
    table: &'static RuleTable,
}

impl Default for LexerMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl LexerMachine {
    pub fn new() -> Self {
        Self {
            table: RuleTable::get(),
        }
    }

    pub fn table(&self) -> &'static RuleTable {
        self.table
    }

    pub fn meta(&self) -> LanguageMeta {
        LANGUAGE_META
    }

    /// Re-tokenize a whole document from the `Start` state.
    pub fn tokenize(&self, text: &str) -> Tokenized {
        tokenize(text)
    }
}
