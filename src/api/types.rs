//! Shared types for the WASM API
//!
//! Engine errors are flattened into `ErrorPayload` so the presentation
//! layer can switch on `kind` and show `message` inline.

use crate::errors::{BindError, InitError, NotFoundError, OverlapError, SelectionError};
use crate::text::TextRange;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    /// Stable identifier: "emptySelection", "overlap", "outOfBounds",
    /// "invalidSelection", "limitReached", "notFound", "init"
    pub kind: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflicting_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflicting_range: Option<TextRange>,
}

impl ErrorPayload {
    fn new(kind: &str, message: impl Into<String>) -> Self {
        Self {
            kind: kind.to_string(),
            message: message.into(),
            conflicting_id: None,
            conflicting_range: None,
        }
    }
}

impl From<OverlapError> for ErrorPayload {
    fn from(err: OverlapError) -> Self {
        Self {
            conflicting_id: Some(err.conflicting_id.to_string()),
            conflicting_range: Some(err.conflicting_range),
            ..Self::new("overlap", err.to_string())
        }
    }
}

impl From<SelectionError> for ErrorPayload {
    fn from(err: SelectionError) -> Self {
        match err {
            SelectionError::EmptySelection => Self::new("emptySelection", err.to_string()),
            SelectionError::OutOfBounds { .. } => Self::new("outOfBounds", err.to_string()),
            SelectionError::Overlap(overlap) => overlap.into(),
        }
    }
}

impl From<BindError> for ErrorPayload {
    fn from(err: BindError) -> Self {
        match err {
            BindError::InvalidSelection => Self::new("invalidSelection", err.to_string()),
            BindError::OutOfBounds { .. } => Self::new("outOfBounds", err.to_string()),
            BindError::LimitReached(_) => Self::new("limitReached", err.to_string()),
            BindError::Overlap(overlap) => overlap.into(),
        }
    }
}

impl From<NotFoundError> for ErrorPayload {
    fn from(err: NotFoundError) -> Self {
        Self::new("notFound", err.to_string())
    }
}

impl From<InitError> for ErrorPayload {
    fn from(err: InitError) -> Self {
        Self::new("init", err.to_string())
    }
}
