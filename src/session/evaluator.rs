//! The seam to the external policy evaluator.
//!
//! The evaluator is invoked once per revalidation with the identity of the
//! root editor. It reads editor texts through [`EvaluationContext`] and
//! reports findings back through the same context. What it evaluates and
//! how is none of this crate's business.

use indexmap::IndexMap;

use super::diagnostics::{Diagnostic, DiagnosticStore};
use super::error::SessionResult;
use super::marks::{MarkHandle, MarkRegistry, MarkStyle};
use super::registry::EditorSession;
use crate::base::{EditorId, Range};

pub trait Evaluator {
    fn evaluate(&mut self, root: &EditorId, cx: &mut EvaluationContext<'_>);
}

impl<F> Evaluator for F
where
    F: FnMut(&EditorId, &mut EvaluationContext<'_>),
{
    fn evaluate(&mut self, root: &EditorId, cx: &mut EvaluationContext<'_>) {
        (self)(root, cx)
    }
}

/// Access an evaluator gets during one revalidation pass.
pub struct EvaluationContext<'a> {
    sessions: &'a IndexMap<EditorId, EditorSession>,
    diagnostics: &'a mut DiagnosticStore,
    marks: &'a mut MarkRegistry,
    rejected: usize,
}

impl<'a> EvaluationContext<'a> {
    pub(crate) fn new(
        sessions: &'a IndexMap<EditorId, EditorSession>,
        diagnostics: &'a mut DiagnosticStore,
        marks: &'a mut MarkRegistry,
    ) -> Self {
        Self {
            sessions,
            diagnostics,
            marks,
            rejected: 0,
        }
    }

    /// Every live editor with its text, in creation order.
    pub fn sources(&self) -> impl Iterator<Item = (&EditorId, &str)> {
        self.sessions
            .iter()
            .map(|(id, session)| (id, session.text.as_str()))
    }

    pub fn source(&self, id: &EditorId) -> Option<&str> {
        self.sessions.get(id).map(|session| session.text.as_str())
    }

    pub fn replace_diagnostics(
        &mut self,
        id: &EditorId,
        diagnostics: Vec<Diagnostic>,
    ) -> SessionResult<()> {
        let result = self.diagnostics.replace(id, diagnostics);
        self.note(id, result)
    }

    pub fn push_diagnostic(&mut self, id: &EditorId, diagnostic: Diagnostic) -> SessionResult<()> {
        let result = self.diagnostics.append(id, diagnostic);
        self.note(id, result)
    }

    pub fn mark(
        &mut self,
        id: &EditorId,
        range: Range,
        style: MarkStyle,
    ) -> SessionResult<MarkHandle> {
        let result = self.marks.add(id, range, style);
        self.note(id, result)
    }

    /// Writes rejected so far because their editor no longer exists.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    fn note<T>(&mut self, id: &EditorId, result: SessionResult<T>) -> SessionResult<T> {
        if result.is_err() {
            self.rejected += 1;
            tracing::warn!(editor = %id, "evaluator wrote to an editor that does not exist");
        }
        result
    }
}
