//! Selection tracking
//!
//! Turns a raw user selection (two offsets in either order) into a
//! validated candidate span. Runs on every selection-change event, so it
//! has no side effects and stays a linear scan over the annotations.

use super::range::TextRange;
use crate::annotations::IntervalStore;
use crate::errors::SelectionError;
use serde::{Deserialize, Serialize};

/// A selection that passed validation and is waiting for a media choice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionCandidate {
    pub range: TextRange,
    pub text: String,
}

/// Validating projection from raw selection offsets to a candidate
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionTracker;

impl SelectionTracker {
    pub fn new() -> Self {
        Self
    }

    /// Normalize and validate a raw selection against the store.
    ///
    /// The overlap check here is a pre-check so the UI can reject the
    /// selection before the user goes looking for media. Binding checks again.
    pub fn track(
        &self,
        raw_start: usize,
        raw_end: usize,
        store: &IntervalStore,
    ) -> Result<SelectionCandidate, SelectionError> {
        let range = TextRange::normalized(raw_start, raw_end);

        if range.is_empty() {
            return Err(SelectionError::EmptySelection);
        }

        let len = store.buffer().len();
        let text = store
            .buffer()
            .slice(range)
            .ok_or(SelectionError::OutOfBounds { end: range.end, len })?;

        store.check_overlap(range)?;

        Ok(SelectionCandidate { range, text })
    }
}
