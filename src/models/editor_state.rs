//! Editor state management
//!
//! `ScriptEditor` is the explicit engine state: the interval store (text
//! plus annotations), the candidate held between "user selected" and
//! "user picked media", and which annotation is selected for highlighting.
//! Every operation runs to completion synchronously and either commits
//! fully or leaves the state untouched.

use super::annotation::{Annotation, AnnotationId};
use super::media::MediaDescriptor;
use crate::annotations::{IntervalStore, MediaBinder};
use crate::config::{AnnotatorConfig, DanglingPolicy};
use crate::errors::{BindError, InitError, NotFoundError, SelectionError};
use crate::highlight::{Highlight, HighlightProjector, HighlightSegment};
use crate::text::{SelectionCandidate, SelectionTracker};
use serde::{Deserialize, Serialize};

/// Where the current selection interaction stands
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// No candidate held
    Idle,
    /// A validated candidate is waiting for a media choice
    CandidateReady,
}

/// Persistable text plus annotations
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ScriptSnapshot {
    pub text: String,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

/// Emitted after a successful bind
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BindOutcome {
    pub annotation: Annotation,
    /// Full ordered list after the bind
    pub annotations: Vec<Annotation>,
}

/// Emitted after the text is replaced
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TextChange {
    pub text: String,
    /// Annotations still in the set whose range passes the new end
    pub dangling: Vec<AnnotationId>,
    /// Annotations removed under `DanglingPolicy::Drop`
    pub dropped: Vec<Annotation>,
}

#[derive(Debug, Clone, Default)]
pub struct ScriptEditor {
    store: IntervalStore,
    candidate: Option<SelectionCandidate>,
    selected: Option<AnnotationId>,
    config: AnnotatorConfig,
    tracker: SelectionTracker,
    binder: MediaBinder,
}

impl ScriptEditor {
    /// Create an editor over `text` with no annotations
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_config(text, AnnotatorConfig::default())
    }

    pub fn with_config(text: impl Into<String>, config: AnnotatorConfig) -> Self {
        Self::from_store(IntervalStore::new(text), config)
    }

    /// Load persisted text and annotations; overlapping sets are rejected whole
    pub fn load(
        text: impl Into<String>,
        annotations: Vec<Annotation>,
        config: AnnotatorConfig,
    ) -> Result<Self, InitError> {
        let store = IntervalStore::from_parts(text, annotations)?;
        Ok(Self::from_store(store, config))
    }

    pub fn from_snapshot(snapshot: ScriptSnapshot, config: AnnotatorConfig) -> Result<Self, InitError> {
        Self::load(snapshot.text, snapshot.annotations, config)
    }

    pub fn from_json(json: &str, config: AnnotatorConfig) -> Result<Self, InitError> {
        let snapshot: ScriptSnapshot = serde_json::from_str(json)?;
        Self::from_snapshot(snapshot, config)
    }

    fn from_store(store: IntervalStore, config: AnnotatorConfig) -> Self {
        Self {
            store,
            candidate: None,
            selected: None,
            binder: MediaBinder::with_limit(config.max_annotations),
            tracker: SelectionTracker::new(),
            config,
        }
    }

    pub fn snapshot(&self) -> ScriptSnapshot {
        ScriptSnapshot {
            text: self.store.text().to_string(),
            annotations: self.store.list().to_vec(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.snapshot())
    }

    pub fn text(&self) -> &str {
        self.store.text()
    }

    pub fn store(&self) -> &IntervalStore {
        &self.store
    }

    /// Annotations ordered by range start
    pub fn annotations(&self) -> &[Annotation] {
        self.store.list()
    }

    pub fn config(&self) -> &AnnotatorConfig {
        &self.config
    }

    pub fn candidate(&self) -> Option<&SelectionCandidate> {
        self.candidate.as_ref()
    }

    pub fn phase(&self) -> Phase {
        match self.candidate {
            Some(_) => Phase::CandidateReady,
            None => Phase::Idle,
        }
    }

    pub fn selected(&self) -> Option<AnnotationId> {
        self.selected
    }

    /// Replace the text wholesale; ranges are not remapped
    pub fn set_text(&mut self, text: impl Into<String>) -> TextChange {
        self.store.set_text(text);

        let dropped = match self.config.dangling_policy {
            DanglingPolicy::Drop => self.store.drop_dangling(),
            DanglingPolicy::Keep | DanglingPolicy::Hide => Vec::new(),
        };

        if let Some(selected) = self.selected {
            if self.store.get(selected).is_none() {
                self.selected = None;
            }
        }

        // A held candidate survives only if its range still tracks in the new text
        if let Some(held) = self.candidate.take() {
            self.candidate = self.track(held.range.start, held.range.end).ok();
        }

        let dangling: Vec<AnnotationId> = self.store.dangling().map(|a| a.id()).collect();
        if !dangling.is_empty() {
            log::warn!("{} annotation(s) now reach past the end of the text", dangling.len());
        }

        TextChange {
            text: self.store.text().to_string(),
            dangling,
            dropped,
        }
    }

    /// Validate a selection without touching the held candidate
    pub fn track(&self, raw_start: usize, raw_end: usize) -> Result<SelectionCandidate, SelectionError> {
        self.tracker.track(raw_start, raw_end, &self.store)
    }

    /// Idle -> CandidateReady on a valid selection; any rejection returns to Idle
    pub fn select(&mut self, raw_start: usize, raw_end: usize) -> Result<&SelectionCandidate, SelectionError> {
        self.candidate = None;
        let candidate = self.track(raw_start, raw_end)?;
        Ok(self.candidate.insert(candidate))
    }

    /// Drop the held candidate
    pub fn cancel(&mut self) {
        self.candidate = None;
    }

    /// Bind the held candidate to `media`. The candidate is consumed
    /// whether or not the bind succeeds.
    pub fn bind(&mut self, media: MediaDescriptor) -> Result<BindOutcome, BindError> {
        let candidate = self.candidate.take();
        self.commit(candidate.as_ref(), media)
    }

    /// Bind a candidate held by the caller rather than by the editor
    pub fn bind_candidate(
        &mut self,
        candidate: &SelectionCandidate,
        media: MediaDescriptor,
    ) -> Result<BindOutcome, BindError> {
        self.commit(Some(candidate), media)
    }

    fn commit(
        &mut self,
        candidate: Option<&SelectionCandidate>,
        media: MediaDescriptor,
    ) -> Result<BindOutcome, BindError> {
        let annotation = self.binder.bind(candidate, media, &mut self.store)?;
        Ok(BindOutcome {
            annotation,
            annotations: self.store.list().to_vec(),
        })
    }

    /// Remove an annotation; returns the full ordered list afterwards
    pub fn unbind(&mut self, id: AnnotationId) -> Result<Vec<Annotation>, NotFoundError> {
        self.binder.unbind(id, &mut self.store)?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        Ok(self.store.list().to_vec())
    }

    /// Choose which annotation is highlighted as selected.
    /// Returns false (and clears the selection) for an unknown id.
    pub fn select_annotation(&mut self, id: Option<AnnotationId>) -> bool {
        match id {
            Some(id) if self.store.get(id).is_some() => {
                self.selected = Some(id);
                true
            }
            Some(_) => {
                self.selected = None;
                false
            }
            None => {
                self.selected = None;
                true
            }
        }
    }

    fn projector(&self) -> HighlightProjector {
        HighlightProjector::new(self.config.dangling_policy)
    }

    pub fn highlights(&self) -> Vec<Highlight> {
        self.projector()
            .project(self.store.list(), self.selected, self.store.buffer().len())
    }

    pub fn segments(&self) -> Vec<HighlightSegment> {
        self.projector()
            .segments(self.store.buffer(), self.store.list(), self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MediaKind, SlideMetadata};
    use crate::text::TextRange;

    fn slide(title: &str) -> MediaDescriptor {
        MediaDescriptor::slide(title, SlideMetadata::default())
    }

    #[test]
    fn test_editor_starts_idle() {
        let editor = ScriptEditor::new("The cat sat on the mat");
        assert_eq!(editor.phase(), Phase::Idle);
        assert!(editor.annotations().is_empty());
        assert!(editor.selected().is_none());
    }

    #[test]
    fn test_select_then_bind_returns_to_idle() {
        let mut editor = ScriptEditor::new("The cat sat on the mat");

        editor.select(4, 7).unwrap();
        assert_eq!(editor.phase(), Phase::CandidateReady);

        let outcome = editor.bind(slide("Slide 1")).unwrap();
        assert_eq!(editor.phase(), Phase::Idle);
        assert_eq!(outcome.annotations, vec![outcome.annotation.clone()]);
        assert_eq!(outcome.annotation.media_kind(), MediaKind::Slide);
    }

    #[test]
    fn test_rejected_selection_clears_candidate() {
        let mut editor = ScriptEditor::new("The cat sat on the mat");
        editor.select(4, 7).unwrap();
        editor.bind(slide("Slide 1")).unwrap();

        editor.select(8, 11).unwrap();
        assert_eq!(editor.phase(), Phase::CandidateReady);

        assert!(editor.select(5, 8).is_err());
        assert_eq!(editor.phase(), Phase::Idle);
        assert!(editor.select(2, 2).is_err());
        assert_eq!(editor.phase(), Phase::Idle);
    }

    #[test]
    fn test_bind_without_candidate() {
        let mut editor = ScriptEditor::new("The cat sat on the mat");
        assert_eq!(editor.bind(slide("Slide 1")), Err(BindError::InvalidSelection));

        editor.select(4, 7).unwrap();
        editor.cancel();
        assert_eq!(editor.phase(), Phase::Idle);
        assert_eq!(editor.bind(slide("Slide 1")), Err(BindError::InvalidSelection));
    }

    #[test]
    fn test_failed_bind_consumes_candidate() {
        let mut editor = ScriptEditor::new("The cat sat on the mat");
        editor.select(4, 7).unwrap();

        let other = editor.track(5, 9).unwrap();
        editor.bind_candidate(&other, slide("Slide 0")).unwrap();

        assert!(matches!(editor.bind(slide("Slide 1")), Err(BindError::Overlap(_))));
        assert_eq!(editor.phase(), Phase::Idle);
        assert_eq!(editor.annotations().len(), 1);
    }

    #[test]
    fn test_unbind_clears_selected_annotation() {
        let mut editor = ScriptEditor::new("The cat sat on the mat");
        editor.select(4, 7).unwrap();
        let id = editor.bind(slide("Slide 1")).unwrap().annotation.id();

        assert!(editor.select_annotation(Some(id)));
        assert!(editor.highlights()[0].is_selected);

        assert_eq!(editor.unbind(id).unwrap(), Vec::new());
        assert_eq!(editor.selected(), None);
        assert_eq!(editor.unbind(id), Err(NotFoundError(id)));
    }

    #[test]
    fn test_select_unknown_annotation() {
        let mut editor = ScriptEditor::new("The cat sat on the mat");
        assert!(!editor.select_annotation(Some(AnnotationId::new())));
        assert!(editor.select_annotation(None));
    }

    #[test]
    fn test_set_text_keep_policy() {
        let mut editor = ScriptEditor::new("The cat sat on the mat");
        editor.select(4, 7).unwrap();
        let id = editor.bind(slide("Slide 1")).unwrap().annotation.id();

        let change = editor.set_text("short");
        assert_eq!(change.text, "short");
        assert_eq!(change.dangling, vec![id]);
        assert!(change.dropped.is_empty());
        assert_eq!(editor.annotations()[0].range(), TextRange::new(4, 7));
        assert_eq!(editor.highlights()[0].range, TextRange::new(4, 5));
    }

    #[test]
    fn test_set_text_drop_policy() {
        let config = AnnotatorConfig::default().with_dangling_policy(DanglingPolicy::Drop);
        let mut editor = ScriptEditor::with_config("The cat sat on the mat", config);
        editor.select(4, 7).unwrap();
        let id = editor.bind(slide("Slide 1")).unwrap().annotation.id();
        editor.select_annotation(Some(id));

        let change = editor.set_text("short");
        assert!(change.dangling.is_empty());
        assert_eq!(change.dropped.len(), 1);
        assert!(editor.annotations().is_empty());
        assert_eq!(editor.selected(), None);
        assert_eq!(editor.config().dangling_policy, DanglingPolicy::Drop);
    }

    #[test]
    fn test_set_text_discards_candidate_past_end() {
        let mut editor = ScriptEditor::new("The cat sat on the mat");
        editor.select(4, 7).unwrap();

        editor.set_text("A dog");
        assert_eq!(editor.phase(), Phase::Idle);
        assert!(editor.candidate().is_none());
        assert!(matches!(editor.bind(slide("Slide 1")), Err(BindError::InvalidSelection)));
    }

    #[test]
    fn test_set_text_refreshes_candidate_text() {
        let mut editor = ScriptEditor::new("The cat sat on the mat");
        editor.select(4, 7).unwrap();

        editor.set_text("The dog sat on the mat");
        assert_eq!(editor.phase(), Phase::CandidateReady);
        let candidate = editor.candidate().unwrap();
        assert_eq!(candidate.range, TextRange::new(4, 7));
        assert_eq!(candidate.text, "dog");

        let outcome = editor.bind(slide("Slide 1")).unwrap();
        assert_eq!(outcome.annotation.source_text(), "dog");
    }

    #[test]
    fn test_snapshot_reload() {
        let mut editor = ScriptEditor::new("The cat sat on the mat");
        editor.select(8, 11).unwrap();
        editor.bind(slide("Slide 2")).unwrap();
        editor.select(4, 7).unwrap();
        editor.bind(slide("Slide 1")).unwrap();

        let json = editor.to_json().unwrap();
        let reloaded = ScriptEditor::from_json(&json, AnnotatorConfig::default()).unwrap();

        assert_eq!(reloaded.snapshot(), editor.snapshot());
        assert_eq!(reloaded.annotations()[0].media_content(), "Slide 1");
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let result = ScriptEditor::from_json("{not json", AnnotatorConfig::default());
        assert!(matches!(result, Err(InitError::Snapshot(_))));
    }
}
