//! EditorHost: the explicitly owned session object.
//!
//! The host owns the session registry (and through it the diagnostic store
//! and the mark registry) together with the lexer. The application creates
//! one host at setup and drops it at teardown; nothing here is global.
//!
//! ## Usage
//!
//! ```ignore
//! let mut host = EditorHost::new(HostOptions::default());
//! let block = host.add_editor()?;
//! host.set_text(&block, "check if operation(#ambient, #read)")?;
//!
//! // on every content change
//! host.revalidate(&block, &mut evaluator)?;
//! let lints = host.diagnostics(&block);
//! ```

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};
use rayon::prelude::*;

use super::diagnostics::Diagnostic;
use super::error::{SessionError, SessionResult};
use super::evaluator::{EvaluationContext, Evaluator};
use super::marks::Mark;
use super::options::HostOptions;
use super::registry::EditorSessionRegistry;
use crate::base::EditorId;
use crate::lexer::{LexerMachine, Tokenized, indentation_hint};

/// Outcome of one revalidation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Revalidation {
    pub diagnostics: usize,
    pub marks: usize,
    /// Evaluator writes rejected because their editor was gone
    pub rejected: usize,
}

#[derive(Debug, Default)]
pub struct EditorHost {
    registry: EditorSessionRegistry,
    lexer: LexerMachine,
    options: HostOptions,
}

impl EditorHost {
    pub fn new(options: HostOptions) -> Self {
        Self {
            registry: EditorSessionRegistry::new(),
            lexer: LexerMachine::new(),
            options,
        }
    }

    pub fn options(&self) -> &HostOptions {
        &self.options
    }

    pub fn registry(&self) -> &EditorSessionRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut EditorSessionRegistry {
        &mut self.registry
    }

    // ------------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------------

    pub fn create(&mut self, id: EditorId) -> SessionResult<()> {
        self.registry.create(id)
    }

    /// Create an editor under a freshly minted identity.
    pub fn add_editor(&mut self) -> SessionResult<EditorId> {
        let id = self.registry.allocate(&self.options.id_prefix);
        self.registry.create(id.clone())?;
        Ok(id)
    }

    pub fn destroy(&mut self, id: &EditorId) -> SessionResult<()> {
        self.registry.destroy(id).map(|_| ())
    }

    pub fn exists(&self, id: &EditorId) -> bool {
        self.registry.exists(id)
    }

    // ------------------------------------------------------------------------
    // Text and tokens
    // ------------------------------------------------------------------------

    /// Replace the text of editor `id` and return its fresh tokens.
    pub fn set_text(&mut self, id: &EditorId, text: impl Into<String>) -> SessionResult<Tokenized> {
        let session = self.registry.get_mut(id)?;
        session.text = text.into();
        session.version += 1;
        Ok(self.lexer.tokenize(&session.text))
    }

    pub fn text(&self, id: &EditorId) -> SessionResult<&str> {
        self.registry.get(id).map(|session| session.text.as_str())
    }

    pub fn version(&self, id: &EditorId) -> SessionResult<u64> {
        self.registry.get(id).map(|session| session.version)
    }

    pub fn tokens(&self, id: &EditorId) -> SessionResult<Tokenized> {
        let text = self.text(id)?;
        Ok(self.lexer.tokenize(text))
    }

    /// Tokenize every live editor in parallel, in creation order.
    pub fn tokenize_all(&self) -> Vec<(EditorId, Tokenized)> {
        let lexer = self.lexer;
        let sources: Vec<(&EditorId, &str)> = self
            .registry
            .sessions()
            .map(|(id, session)| (id, session.text.as_str()))
            .collect();

        sources
            .into_par_iter()
            .map(|(id, text)| (id.clone(), lexer.tokenize(text)))
            .collect()
    }

    /// Indentation in columns for `line` of editor `id`.
    pub fn indentation(&self, id: &EditorId, line: usize) -> SessionResult<Option<usize>> {
        let text = self.text(id)?;
        Ok(indentation_hint(text, line, self.options.indent_unit))
    }

    // ------------------------------------------------------------------------
    // Overlays
    // ------------------------------------------------------------------------

    pub fn diagnostics(&self, id: &EditorId) -> &[Diagnostic] {
        self.registry.diagnostics().get(id)
    }

    pub fn marks(&self, id: &EditorId) -> &[Mark] {
        self.registry.marks().get(id)
    }

    /// Run one revalidation pass rooted at editor `root`.
    ///
    /// Every diagnostic list and every mark is cleared before the evaluator
    /// runs, so the stores never mix results of two passes.
    pub fn revalidate<E>(
        &mut self,
        root: &EditorId,
        evaluator: &mut E,
    ) -> SessionResult<Revalidation>
    where
        E: Evaluator + ?Sized,
    {
        if !self.registry.exists(root) {
            return Err(SessionError::UnknownIdentity(root.clone()));
        }

        let (sessions, diagnostics, marks) = self.registry.split_mut();
        diagnostics.clear_all();
        marks.clear_everything();

        let mut cx = EvaluationContext::new(sessions, diagnostics, marks);
        evaluator.evaluate(root, &mut cx);
        let rejected = cx.rejected();

        let outcome = Revalidation {
            diagnostics: self.registry.diagnostics().len(),
            marks: self.registry.marks().len(),
            rejected,
        };
        tracing::debug!(
            root = %root,
            diagnostics = outcome.diagnostics,
            marks = outcome.marks,
            rejected = outcome.rejected,
            "revalidated"
        );
        Ok(outcome)
    }
}

/// Shared handle to one host, for the block UI and the evaluator callback.
#[derive(Debug, Clone, Default)]
pub struct SharedEditorHost(Arc<Mutex<EditorHost>>);

impl SharedEditorHost {
    pub fn new(host: EditorHost) -> Self {
        Self(Arc::new(Mutex::new(host)))
    }

    pub fn lock(&self) -> MutexGuard<'_, EditorHost> {
        self.0.lock()
    }
}
