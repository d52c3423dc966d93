//! Highlight projection
//!
//! Derives what the presentation layer paints from the current
//! annotations: one highlight per annotation, in text order, plus the
//! text cut into plain and highlighted segments. Ranges are clamped to the
//! current text length so dangling annotations never index past the end.

use crate::config::DanglingPolicy;
use crate::models::{Annotation, AnnotationId, MediaKind};
use crate::text::{TextBuffer, TextRange};
use serde::{Deserialize, Serialize};

/// Render tuple for one annotation
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    pub id: AnnotationId,
    /// Display range, clamped to the text length
    pub range: TextRange,
    pub media_kind: MediaKind,
    pub is_selected: bool,
    /// The stored range reaches past the end of the text
    pub clamped: bool,
}

/// A contiguous piece of the text, either plain or under one annotation
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HighlightSegment {
    pub range: TextRange,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation_id: Option<AnnotationId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_kind: Option<MediaKind>,
    pub is_selected: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HighlightProjector {
    policy: DanglingPolicy,
}

impl HighlightProjector {
    pub fn new(policy: DanglingPolicy) -> Self {
        Self { policy }
    }

    /// One highlight per annotation, in the order given (ascending start)
    pub fn project(
        &self,
        annotations: &[Annotation],
        selected: Option<AnnotationId>,
        text_len: usize,
    ) -> Vec<Highlight> {
        annotations
            .iter()
            .filter_map(|annotation| {
                let stored = annotation.range();
                let clamped = stored.exceeds(text_len);
                if clamped && self.policy == DanglingPolicy::Hide {
                    return None;
                }

                Some(Highlight {
                    id: annotation.id(),
                    range: stored.clamp_to(text_len),
                    media_kind: annotation.media_kind(),
                    is_selected: selected == Some(annotation.id()),
                    clamped,
                })
            })
            .collect()
    }

    /// Cut the whole text into ordered segments.
    ///
    /// Segments are contiguous and cover the text exactly once; highlights
    /// clamped down to nothing produce no segment.
    pub fn segments(
        &self,
        buffer: &TextBuffer,
        annotations: &[Annotation],
        selected: Option<AnnotationId>,
    ) -> Vec<HighlightSegment> {
        let len = buffer.len();
        let mut segments = Vec::new();
        let mut cursor = 0;

        let plain = |range: TextRange| HighlightSegment {
            range,
            text: buffer.slice(range).unwrap_or_default(),
            annotation_id: None,
            media_kind: None,
            is_selected: false,
        };

        for highlight in self.project(annotations, selected, len) {
            let range = highlight.range;
            if range.is_empty() {
                continue;
            }

            if range.start > cursor {
                segments.push(plain(TextRange::new(cursor, range.start)));
            }

            segments.push(HighlightSegment {
                range,
                text: buffer.slice(range).unwrap_or_default(),
                annotation_id: Some(highlight.id),
                media_kind: Some(highlight.media_kind),
                is_selected: highlight.is_selected,
            });
            cursor = range.end;
        }

        if cursor < len {
            segments.push(plain(TextRange::new(cursor, len)));
        }

        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MediaDescriptor, SlideMetadata, StockMetadata};

    fn annotation(start: usize, end: usize, media: MediaDescriptor) -> Annotation {
        Annotation::new(TextRange::new(start, end), String::new(), media)
    }

    fn fixtures() -> Vec<Annotation> {
        vec![
            annotation(4, 7, MediaDescriptor::slide("Slide 1", SlideMetadata::default())),
            annotation(8, 11, MediaDescriptor::stock("clip", StockMetadata::default())),
        ]
    }

    #[test]
    fn test_project_marks_selection() {
        let annotations = fixtures();
        let selected = annotations[1].id();

        let highlights = HighlightProjector::default().project(&annotations, Some(selected), 22);

        assert_eq!(highlights.len(), 2);
        assert_eq!(highlights[0].range, TextRange::new(4, 7));
        assert!(!highlights[0].is_selected);
        assert_eq!(highlights[1].media_kind, MediaKind::Stock);
        assert!(highlights[1].is_selected);
        assert!(highlights.iter().all(|h| !h.clamped));
    }

    #[test]
    fn test_project_clamps_dangling() {
        let annotations = fixtures();
        let highlights = HighlightProjector::default().project(&annotations, None, 5);

        assert_eq!(highlights[0].range, TextRange::new(4, 5));
        assert!(highlights[0].clamped);
        assert_eq!(highlights[1].range, TextRange::new(5, 5));
        assert!(highlights.iter().all(|h| h.range.end <= 5));
    }

    #[test]
    fn test_hide_policy_skips_dangling() {
        let annotations = fixtures();
        let highlights = HighlightProjector::new(DanglingPolicy::Hide).project(&annotations, None, 10);

        assert_eq!(highlights.len(), 1);
        assert_eq!(highlights[0].id, annotations[0].id());
    }

    #[test]
    fn test_segments_cover_text() {
        let buffer = TextBuffer::from_text("The cat sat on the mat");
        let annotations = fixtures();

        let segments = HighlightProjector::default().segments(&buffer, &annotations, None);
        let texts: Vec<&str> = segments.iter().map(|s| s.text.as_str()).collect();

        assert_eq!(texts, vec!["The ", "cat", " ", "sat", " on the mat"]);
        assert_eq!(segments[1].annotation_id, Some(annotations[0].id()));
        assert_eq!(segments[2].annotation_id, None);

        let joined: String = texts.concat();
        assert_eq!(joined, buffer.as_str());
    }

    #[test]
    fn test_segments_after_shrink() {
        let buffer = TextBuffer::from_text("short");
        let annotations = fixtures();

        let segments = HighlightProjector::default().segments(&buffer, &annotations, None);
        let texts: Vec<&str> = segments.iter().map(|s| s.text.as_str()).collect();

        assert_eq!(texts, vec!["shor", "t"]);
        assert_eq!(segments[1].annotation_id, Some(annotations[0].id()));
    }
}
