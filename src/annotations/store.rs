//! Interval store
//!
//! Owns the script text and the annotation set, kept sorted by range
//! start. `insert` is the only way into the set and refuses anything that
//! overlaps an existing annotation, so no two stored ranges ever share an
//! offset.

use crate::errors::{InitError, NotFoundError, OverlapError};
use crate::models::{Annotation, AnnotationId};
use crate::text::{TextBuffer, TextRange};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntervalStore {
    buffer: TextBuffer,
    /// Sorted by `range.start`; ties keep insertion order
    annotations: Vec<Annotation>,
}

impl IntervalStore {
    /// Create a store over `text` with no annotations
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            buffer: TextBuffer::from_text(text),
            annotations: Vec::new(),
        }
    }

    /// Load persisted text and annotations.
    ///
    /// The whole set is rejected if any entry is empty, duplicated, or
    /// overlaps another. Conflicting entries are never silently dropped.
    pub fn from_parts(
        text: impl Into<String>,
        annotations: Vec<Annotation>,
    ) -> Result<Self, InitError> {
        let mut seen = HashSet::with_capacity(annotations.len());
        for annotation in &annotations {
            if annotation.range().is_empty() {
                return Err(InitError::EmptyRange(annotation.id()));
            }
            if !seen.insert(annotation.id()) {
                return Err(InitError::DuplicateId(annotation.id()));
            }
        }

        let mut annotations = annotations;
        annotations.sort_by_key(|a| a.range().start);

        // With starts sorted, any overlap shows up between neighbours
        for pair in annotations.windows(2) {
            if pair[0].range().overlaps(&pair[1].range()) {
                return Err(InitError::Conflict {
                    first: pair[0].id(),
                    second: pair[1].id(),
                });
            }
        }

        let store = Self {
            buffer: TextBuffer::from_text(text),
            annotations,
        };

        let dangling = store.dangling().count();
        if dangling > 0 {
            log::warn!("loaded {} annotation(s) past the end of the text", dangling);
        }

        Ok(store)
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn text(&self) -> &str {
        self.buffer.as_str()
    }

    /// Replace the text wholesale.
    ///
    /// Existing ranges are not remapped onto the new text; ranges past the
    /// new end are left in place (see `dangling`).
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.buffer = TextBuffer::from_text(text);
    }

    /// First annotation whose range shares an offset with `range`
    pub fn find_overlap(&self, range: TextRange) -> Option<&Annotation> {
        self.annotations
            .iter()
            .find(|a| a.range().overlaps(&range))
    }

    /// True iff `range` intersects an existing annotation (abutting is fine)
    pub fn overlaps(&self, range: TextRange) -> bool {
        self.find_overlap(range).is_some()
    }

    /// Like `overlaps`, but reports which annotation is in the way
    pub fn check_overlap(&self, range: TextRange) -> Result<(), OverlapError> {
        match self.find_overlap(range) {
            Some(existing) => Err(OverlapError {
                candidate: range,
                conflicting_id: existing.id(),
                conflicting_range: existing.range(),
            }),
            None => Ok(()),
        }
    }

    /// Add an annotation, keeping the set sorted.
    ///
    /// All-or-nothing: on error the set is untouched.
    pub fn insert(&mut self, annotation: Annotation) -> Result<(), OverlapError> {
        let range = annotation.range();
        debug_assert!(!range.is_empty(), "annotations must cover at least one offset");

        if let Err(err) = self.check_overlap(range) {
            log::warn!("{}", err);
            return Err(err);
        }

        let at = self
            .annotations
            .partition_point(|a| a.range().start <= range.start);
        log::debug!("bound {} to {} ({})", range, annotation.media_kind(), annotation.id());
        self.annotations.insert(at, annotation);
        Ok(())
    }

    /// Remove an annotation by id
    pub fn remove(&mut self, id: AnnotationId) -> Result<Annotation, NotFoundError> {
        let index = self
            .annotations
            .iter()
            .position(|a| a.id() == id)
            .ok_or(NotFoundError(id))?;

        let removed = self.annotations.remove(index);
        log::debug!("unbound {} ({})", removed.range(), id);
        Ok(removed)
    }

    /// Annotations ordered by `range.start` ascending
    pub fn list(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn get(&self, id: AnnotationId) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.id() == id)
    }

    /// The annotation covering `pos`, if any
    pub fn annotation_at(&self, pos: usize) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.range().contains(pos))
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// Annotations whose range reaches past the end of the current text
    pub fn dangling(&self) -> impl Iterator<Item = &Annotation> {
        let len = self.buffer.len();
        self.annotations.iter().filter(move |a| a.range().exceeds(len))
    }

    /// Remove and return every dangling annotation
    pub fn drop_dangling(&mut self) -> Vec<Annotation> {
        let len = self.buffer.len();
        let (dropped, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.annotations)
            .into_iter()
            .partition(|a| a.range().exceeds(len));
        self.annotations = kept;
        dropped
    }
}
