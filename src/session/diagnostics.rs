//! Diagnostics: per-editor validation messages.
//!
//! The store holds one list per live editor. Lists are written whole:
//! a revalidation pass clears every list, then the evaluator replaces the
//! lists of the editors it has findings for. Entries exist only for
//! editors the registry opened, so writes against a destroyed editor are
//! rejected instead of resurrecting its state.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::error::{SessionError, SessionResult};
use crate::base::{EditorId, Range};

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Name used by the host editor's lint gutter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

/// A diagnostic message with location.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostic {
    pub message: Arc<str>,
    pub severity: Severity,
    pub range: Range,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(message: impl Into<Arc<str>>, range: Range) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
            range,
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(message: impl Into<Arc<str>>, range: Range) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Warning,
            range,
        }
    }
}

// ============================================================================
// DIAGNOSTIC STORE
// ============================================================================

#[derive(Clone, Debug, Default)]
pub struct DiagnosticStore {
    entries: FxHashMap<EditorId, Vec<Diagnostic>>,
}

impl DiagnosticStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a newly created editor.
    pub(crate) fn open(&mut self, id: EditorId) {
        self.entries.entry(id).or_default();
    }

    /// Drop everything for a destroyed editor.
    pub(crate) fn purge(&mut self, id: &EditorId) -> bool {
        self.entries.remove(id).is_some()
    }

    /// Empty every editor's list. Run before each revalidation pass.
    pub fn clear_all(&mut self) {
        for list in self.entries.values_mut() {
            list.clear();
        }
    }

    /// Set the full list for `id`, discarding the previous one.
    pub fn replace(&mut self, id: &EditorId, diagnostics: Vec<Diagnostic>) -> SessionResult<()> {
        let list = self
            .entries
            .get_mut(id)
            .ok_or_else(|| SessionError::UnknownIdentity(id.clone()))?;
        *list = diagnostics;
        Ok(())
    }

    /// Add one diagnostic to the current pass for `id`.
    pub fn append(&mut self, id: &EditorId, diagnostic: Diagnostic) -> SessionResult<()> {
        self.entries
            .get_mut(id)
            .ok_or_else(|| SessionError::UnknownIdentity(id.clone()))?
            .push(diagnostic);
        Ok(())
    }

    /// Diagnostics for `id`; empty for unknown editors.
    pub fn get(&self, id: &EditorId) -> &[Diagnostic] {
        self.entries.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of diagnostics across all editors.
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn tracks(&self, id: &EditorId) -> bool {
        self.entries.contains_key(id)
    }
}
