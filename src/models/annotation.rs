//! Annotation data model
//!
//! An annotation binds one half-open text range to exactly one piece of
//! media. Annotations are never mutated in place: changing the media
//! means unbinding and binding again.

use super::media::{MediaDescriptor, MediaKind};
use crate::text::TextRange;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for an annotation
///
/// Stable for the annotation's lifetime and persisted with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnotationId(Uuid);

impl AnnotationId {
    /// Generate a fresh random id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AnnotationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AnnotationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for AnnotationId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A committed binding between a text range and a media descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    id: AnnotationId,
    range: TextRange,
    /// Substring covered at creation time; kept even if the buffer changes
    source_text: String,
    media: MediaDescriptor,
}

impl Annotation {
    /// Fresh annotation with a new id; only the media binder calls this
    pub(crate) fn new(range: TextRange, source_text: String, media: MediaDescriptor) -> Self {
        Self {
            id: AnnotationId::new(),
            range,
            source_text,
            media,
        }
    }

    /// Rebuild a previously persisted annotation with its original id
    pub fn restore(
        id: AnnotationId,
        range: TextRange,
        source_text: impl Into<String>,
        media: MediaDescriptor,
    ) -> Self {
        Self {
            id,
            range,
            source_text: source_text.into(),
            media,
        }
    }

    pub fn id(&self) -> AnnotationId {
        self.id
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn media(&self) -> &MediaDescriptor {
        &self.media
    }

    pub fn media_kind(&self) -> MediaKind {
        self.media.kind()
    }

    pub fn media_content(&self) -> &str {
        self.media.content()
    }

    pub fn media_metadata(&self) -> BTreeMap<String, String> {
        self.media.metadata()
    }
}
