//! Error types for the annotation engine
//!
//! Every per-operation error is local and recoverable: nothing here is
//! raised across the engine boundary, and a failed operation leaves the
//! state exactly as it was. `InitError` is the one fatal case, reported
//! when persisted state is corrupted.

use crate::models::AnnotationId;
use crate::text::TextRange;
use thiserror::Error;

/// A range intersects an annotation that is already bound
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("selection {candidate} overlaps annotation {conflicting_id} at {conflicting_range}")]
pub struct OverlapError {
    pub candidate: TextRange,
    pub conflicting_id: AnnotationId,
    pub conflicting_range: TextRange,
}

/// Removal of an id that is not in the annotation set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("annotation {0} not found")]
pub struct NotFoundError(pub AnnotationId);

/// Rejection of a raw user selection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("empty selection")]
    EmptySelection,

    #[error("selection ends at {end}, past the end of the text ({len})")]
    OutOfBounds { end: usize, len: usize },

    #[error(transparent)]
    Overlap(#[from] OverlapError),
}

/// Rejection of a bind request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("no active selection to bind")]
    InvalidSelection,

    #[error("selection ends at {end}, past the end of the text ({len})")]
    OutOfBounds { end: usize, len: usize },

    #[error("annotation limit of {0} reached")]
    LimitReached(usize),

    #[error(transparent)]
    Overlap(#[from] OverlapError),
}

/// Fatal error loading persisted text and annotations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InitError {
    #[error("annotation {0} has an empty range")]
    EmptyRange(AnnotationId),

    #[error("annotation id {0} appears more than once")]
    DuplicateId(AnnotationId),

    #[error("annotations {first} and {second} overlap")]
    Conflict {
        first: AnnotationId,
        second: AnnotationId,
    },

    /// Parser message only: `serde_json::Error` is neither `Clone` nor
    /// `PartialEq`, and load errors are compared and handed to JS by value.
    #[error("invalid snapshot: {0}")]
    Snapshot(String),
}

impl From<serde_json::Error> for InitError {
    fn from(err: serde_json::Error) -> Self {
        InitError::Snapshot(err.to_string())
    }
}
