//! Shared editor handle
//!
//! For callers that drive one script from several places at once (e.g.
//! multiple panels). Each caller tracks its own candidate; the overlap
//! check and the insert of a bind happen under one lock, so two binds of
//! overlapping candidates cannot both succeed.

use super::annotation::{Annotation, AnnotationId};
use super::editor_state::{BindOutcome, ScriptEditor, ScriptSnapshot, TextChange};
use super::media::MediaDescriptor;
use crate::errors::{BindError, NotFoundError, SelectionError};
use crate::text::SelectionCandidate;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Default)]
pub struct SharedScriptEditor {
    inner: Arc<Mutex<ScriptEditor>>,
}

impl SharedScriptEditor {
    pub fn new(editor: ScriptEditor) -> Self {
        Self {
            inner: Arc::new(Mutex::new(editor)),
        }
    }

    /// Lock the editor. Mutations are all-or-nothing, so a guard recovered
    /// from a poisoned lock still holds a consistent state.
    pub fn lock(&self) -> MutexGuard<'_, ScriptEditor> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn track(&self, raw_start: usize, raw_end: usize) -> Result<SelectionCandidate, SelectionError> {
        self.lock().track(raw_start, raw_end)
    }

    pub fn bind(
        &self,
        candidate: &SelectionCandidate,
        media: MediaDescriptor,
    ) -> Result<BindOutcome, BindError> {
        self.lock().bind_candidate(candidate, media)
    }

    pub fn unbind(&self, id: AnnotationId) -> Result<Vec<Annotation>, NotFoundError> {
        self.lock().unbind(id)
    }

    pub fn set_text(&self, text: impl Into<String>) -> TextChange {
        self.lock().set_text(text)
    }

    pub fn annotations(&self) -> Vec<Annotation> {
        self.lock().annotations().to_vec()
    }

    pub fn snapshot(&self) -> ScriptSnapshot {
        self.lock().snapshot()
    }
}
