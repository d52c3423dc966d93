//! Layer 0: Text core
//!
//! Pure text handling with no knowledge of media. Annotation ranges are
//! only meaningful relative to the buffer revision they were created on.
//!
//! ## Modules
//!
//! - `buffer`: The script text and UTF-16 offset slicing
//! - `range`: Half-open ranges and the overlap rule
//! - `selection`: Raw selection to validated candidate

pub mod buffer;
pub mod range;
pub mod selection;

pub use buffer::TextBuffer;
pub use range::TextRange;
pub use selection::{SelectionCandidate, SelectionTracker};
