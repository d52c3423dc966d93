//! Engine configuration
//!
//! Passed in by the caller (from JS as a plain object). Every field has a
//! default so an empty object is a valid configuration.

use serde::{Deserialize, Serialize};

/// What happens to annotations whose range reaches past the end of the
/// text after an edit shortens it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DanglingPolicy {
    /// Keep them in the set; highlights clamp them to the text length
    #[default]
    Keep,
    /// Keep them in the set but leave them out of highlights
    Hide,
    /// Remove them when the text is replaced
    Drop,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnnotatorConfig {
    pub dangling_policy: DanglingPolicy,
    /// Optional cap on the number of bound annotations
    pub max_annotations: Option<usize>,
}

impl AnnotatorConfig {
    pub fn with_dangling_policy(mut self, policy: DanglingPolicy) -> Self {
        self.dangling_policy = policy;
        self
    }

    pub fn with_max_annotations(mut self, max: usize) -> Self {
        self.max_annotations = Some(max);
        self
    }
}
