//! # playground-base
//!
//! Core library for the policy playground: the lexer behind live syntax
//! highlighting and the overlay state (diagnostics and marks) that the
//! external evaluator fills on every revalidation.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! session   → EditorHost, session registry, diagnostic store, mark registry
//!   ↓
//! lexer     → Rule table, first-match-wins classifier, indentation hints
//!   ↓
//! base      → Primitives (Position, Range, LineIndex, EditorId)
//! ```

// ============================================================================
// MODULES (dependency order: base → lexer → session)
// ============================================================================

/// Foundation types: Position, Range, LineIndex, EditorId
pub mod base;

/// Lexer: regex rule table and the classifier that drives it
pub mod lexer;

/// Sessions: editor lifecycle, diagnostics and marks
pub mod session;

// Re-export foundation types
pub use base::{EditorId, LineIndex, Position, Range, TextRange, TextSize};

// Re-export the main entry points
pub use lexer::{LexerMachine, LexerState, Token, TokenClass, Tokenized, tokenize};
pub use session::{
    Diagnostic, DiagnosticStore, EditorHost, EditorSessionRegistry, EvaluationContext, Evaluator,
    HostOptions, Mark, MarkHandle, MarkRegistry, MarkStyle, SessionError, SessionResult, Severity,
    SharedEditorHost,
};
