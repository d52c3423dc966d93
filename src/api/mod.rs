//! Script annotation WASM API
//!
//! The JavaScript-facing surface of the engine.
//!
//! - `helpers`: console logging, serialization, error conversion
//! - `types`: error payloads returned to JS
//! - `core`: the `ScriptAnnotator` session object

pub mod helpers;
pub mod types;
pub mod core;

pub use core::ScriptAnnotator;
pub use types::ErrorPayload;
