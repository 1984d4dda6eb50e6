//! Editor session registry: which editors currently exist.
//!
//! The registry owns the diagnostic store and the mark registry. Creating
//! an editor opens its entries in both; destroying it purges them before
//! returning. Since the stores only accept writes for entries the registry
//! opened, neither can hold state for an editor that is gone.

use indexmap::IndexMap;

use super::diagnostics::DiagnosticStore;
use super::error::{SessionError, SessionResult};
use super::marks::MarkRegistry;
use crate::base::EditorId;

/// One live editor.
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    pub text: String,
    /// Bumped on every text change
    pub version: u64,
}

#[derive(Debug, Default)]
pub struct EditorSessionRegistry {
    /// Live editors in creation order
    sessions: IndexMap<EditorId, EditorSession>,
    diagnostics: DiagnosticStore,
    marks: MarkRegistry,
    /// Counter behind `allocate`, never decremented
    minted: u64,
}

impl EditorSessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new editor with empty text, diagnostics and marks.
    pub fn create(&mut self, id: EditorId) -> SessionResult<()> {
        if self.sessions.contains_key(&id) {
            return Err(SessionError::DuplicateIdentity(id));
        }

        self.diagnostics.open(id.clone());
        self.marks.open(id.clone());
        self.sessions.insert(id.clone(), EditorSession::default());
        tracing::debug!(editor = %id, "created editor session");
        Ok(())
    }

    /// Remove an editor and purge its diagnostics and marks.
    pub fn destroy(&mut self, id: &EditorId) -> SessionResult<EditorSession> {
        let session = self
            .sessions
            .shift_remove(id)
            .ok_or_else(|| SessionError::UnknownIdentity(id.clone()))?;

        self.diagnostics.purge(id);
        self.marks.purge(id);
        debug_assert!(!self.diagnostics.tracks(id) && !self.marks.tracks(id));
        tracing::debug!(editor = %id, "destroyed editor session");
        Ok(session)
    }

    pub fn exists(&self, id: &EditorId) -> bool {
        self.sessions.contains_key(id)
    }

    /// Mint an identity `"{prefix}{n}"` that has never been handed out
    /// before and is not currently live.
    pub fn allocate(&mut self, prefix: &str) -> EditorId {
        loop {
            let id = EditorId::from(format!("{prefix}{}", self.minted));
            self.minted += 1;
            if !self.exists(&id) {
                return id;
            }
        }
    }

    /// Live identities in creation order.
    pub fn ids(&self) -> impl Iterator<Item = &EditorId> {
        self.sessions.keys()
    }

    pub fn sessions(&self) -> impl Iterator<Item = (&EditorId, &EditorSession)> {
        self.sessions.iter()
    }

    pub fn get(&self, id: &EditorId) -> SessionResult<&EditorSession> {
        self.sessions
            .get(id)
            .ok_or_else(|| SessionError::UnknownIdentity(id.clone()))
    }

    /// Text changes go through `EditorHost::set_text`, which bumps the version.
    pub(crate) fn get_mut(&mut self, id: &EditorId) -> SessionResult<&mut EditorSession> {
        self.sessions
            .get_mut(id)
            .ok_or_else(|| SessionError::UnknownIdentity(id.clone()))
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn diagnostics(&self) -> &DiagnosticStore {
        &self.diagnostics
    }

    pub fn diagnostics_mut(&mut self) -> &mut DiagnosticStore {
        &mut self.diagnostics
    }

    pub fn marks(&self) -> &MarkRegistry {
        &self.marks
    }

    pub fn marks_mut(&mut self) -> &mut MarkRegistry {
        &mut self.marks
    }

    /// Sessions plus both stores, borrowed at once.
    pub(crate) fn split_mut(
        &mut self,
    ) -> (
        &IndexMap<EditorId, EditorSession>,
        &mut DiagnosticStore,
        &mut MarkRegistry,
    ) {
        (&self.sessions, &mut self.diagnostics, &mut self.marks)
    }
}
