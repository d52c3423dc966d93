//! Script Annotation Engine WASM Module
//!
//! Lets an author select spans of a script and bind each span to exactly
//! one piece of media (a slide, a stock clip or an uploaded file), with
//! the guarantee that bound spans never overlap.

pub mod annotations;
pub mod api;
pub mod config;
pub mod errors;
pub mod highlight;
pub mod models;
pub mod text;

// Re-export commonly used types
pub use annotations::{IntervalStore, MediaBinder};
pub use api::ScriptAnnotator;
pub use config::{AnnotatorConfig, DanglingPolicy};
pub use errors::{BindError, InitError, NotFoundError, OverlapError, SelectionError};
pub use highlight::{Highlight, HighlightProjector, HighlightSegment};
pub use models::*;
pub use text::{SelectionCandidate, SelectionTracker, TextBuffer, TextRange};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Already initialized on a second start is fine
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Script annotation WASM module initialized");
}
