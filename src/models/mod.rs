//! Models module for the script annotation engine
//!
//! This module contains the annotation and media data models, and the
//! editor state that ties the text, the annotations and the in-flight
//! selection together.

pub mod annotation;
pub mod editor_state;
pub mod media;
pub mod shared;

// Re-export commonly used types
pub use annotation::{Annotation, AnnotationId};
pub use editor_state::{BindOutcome, Phase, ScriptEditor, ScriptSnapshot, TextChange};
pub use media::{MediaDescriptor, MediaKind, SlideMetadata, StockMetadata, UploadMetadata};
pub use shared::SharedScriptEditor;
