//! Range marks: purely visual highlights over source ranges.
//!
//! Marks correlate evaluation results back onto the source ("this check
//! matched"). They carry no validation meaning. Like diagnostics, marks are
//! keyed by editor identity and only accepted for live editors.

use std::fmt;

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::error::{SessionError, SessionResult};
use crate::base::{EditorId, Range};

/// Opaque styling descriptor, handed to the renderer untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarkStyle(SmolStr);

impl MarkStyle {
    pub fn new(style: impl Into<SmolStr>) -> Self {
        Self(style.into())
    }

    /// A check or policy that matched.
    pub fn check_success() -> Self {
        Self::new("background: #c1f1c1;")
    }

    /// A check that failed.
    pub fn check_failure() -> Self {
        Self::new("background: #ffa2a2;")
    }

    /// A block that did not parse.
    pub fn parse_error() -> Self {
        Self::new("text-decoration: underline wavy red;")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MarkStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Handle to one mark. Ids are never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarkHandle {
    pub editor: EditorId,
    pub id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mark {
    pub id: u64,
    pub range: Range,
    pub style: MarkStyle,
}

#[derive(Debug, Clone, Default)]
pub struct MarkRegistry {
    entries: FxHashMap<EditorId, Vec<Mark>>,
    next_id: u64,
}

impl MarkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn open(&mut self, id: EditorId) {
        self.entries.entry(id).or_default();
    }

    pub(crate) fn purge(&mut self, id: &EditorId) -> bool {
        self.entries.remove(id).is_some()
    }

    /// Highlight `range` in editor `id`.
    pub fn add(
        &mut self,
        id: &EditorId,
        range: Range,
        style: MarkStyle,
    ) -> SessionResult<MarkHandle> {
        let marks = self
            .entries
            .get_mut(id)
            .ok_or_else(|| SessionError::UnknownIdentity(id.clone()))?;

        let mark_id = self.next_id;
        self.next_id += 1;
        marks.push(Mark {
            id: mark_id,
            range,
            style,
        });
        tracing::trace!(editor = %id, mark = mark_id, ?range, "added mark");

        Ok(MarkHandle {
            editor: id.clone(),
            id: mark_id,
        })
    }

    /// Remove a single mark. Returns `false` if it is already gone.
    pub fn remove(&mut self, handle: &MarkHandle) -> bool {
        let Some(marks) = self.entries.get_mut(&handle.editor) else {
            return false;
        };
        let before = marks.len();
        marks.retain(|mark| mark.id != handle.id);
        marks.len() != before
    }

    /// Remove every mark of editor `id`. Returns how many were removed.
    pub fn clear_all(&mut self, id: &EditorId) -> usize {
        self.entries.get_mut(id).map_or(0, |marks| {
            let removed = marks.len();
            marks.clear();
            removed
        })
    }

    /// Remove every mark of every editor.
    pub fn clear_everything(&mut self) {
        for marks in self.entries.values_mut() {
            marks.clear();
        }
    }

    /// Live marks of editor `id`, in creation order; empty for unknown editors.
    pub fn get(&self, id: &EditorId) -> &[Mark] {
        self.entries.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of live marks.
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
