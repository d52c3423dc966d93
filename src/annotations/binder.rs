//! Media binder
//!
//! The only path from a selection candidate to a committed annotation,
//! and the only path by which an annotation is destroyed. Slides, stock
//! clips and uploads all bind the same way; kind-specific checks belong
//! to the caller.

use super::store::IntervalStore;
use crate::errors::{BindError, NotFoundError};
use crate::models::{Annotation, AnnotationId, MediaDescriptor};
use crate::text::SelectionCandidate;

#[derive(Debug, Clone, Copy, Default)]
pub struct MediaBinder {
    max_annotations: Option<usize>,
}

impl MediaBinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(max_annotations: Option<usize>) -> Self {
        Self { max_annotations }
    }

    /// Commit `candidate` bound to `media`.
    ///
    /// The candidate is validated again against the current text and
    /// annotations: it may have gone stale while the user was picking
    /// media. The source text is snapshotted from the current buffer.
    pub fn bind(
        &self,
        candidate: Option<&SelectionCandidate>,
        media: MediaDescriptor,
        store: &mut IntervalStore,
    ) -> Result<Annotation, BindError> {
        let candidate = candidate.ok_or(BindError::InvalidSelection)?;
        let range = candidate.range;
        if range.is_empty() {
            return Err(BindError::InvalidSelection);
        }

        if let Some(max) = self.max_annotations {
            if store.len() >= max {
                log::warn!("refusing bind at {}: limit of {} reached", range, max);
                return Err(BindError::LimitReached(max));
            }
        }

        let len = store.buffer().len();
        let source_text = store
            .buffer()
            .slice(range)
            .ok_or(BindError::OutOfBounds { end: range.end, len })?;

        let annotation = Annotation::new(range, source_text, media);
        store.insert(annotation.clone())?;
        Ok(annotation)
    }

    /// Remove a bound annotation. Unknown ids are a logged no-op.
    pub fn unbind(
        &self,
        id: AnnotationId,
        store: &mut IntervalStore,
    ) -> Result<Annotation, NotFoundError> {
        store.remove(id).map_err(|err| {
            log::warn!("unbind ignored: {}", err);
            err
        })
    }
}
