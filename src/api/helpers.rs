//! Shared helpers for WASM API operations
//!
//! Console logging, serialization across the JS boundary, and the
//! conversion of engine errors into values the presentation layer can
//! show inline.

use super::types::ErrorPayload;
use crate::models::AnnotationId;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ============================================================================
// Console Logging Functions
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn info(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

pub fn log_debug(msg: &str) {
    log(&format!("[WASM] {}", msg));
}

pub fn log_info(msg: &str) {
    info(&format!("[WASM] {}", msg));
}

pub fn log_warn(msg: &str) {
    warn(&format!("[WASM] ⚠️ {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[WASM] ❌ {}", msg));
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        wasm_error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

/// Deserialize an optional value; `undefined`/`null` yield the default
pub fn deserialize_or_default<T: DeserializeOwned + Default>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    deserialize(value, error_context)
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    // Plain objects rather than ES Maps for the metadata maps
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value.serialize(&serializer).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        wasm_error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

// ============================================================================
// Error Conversion
// ============================================================================

/// Turn an engine error into a structured JS value, logging it as a warning
pub fn engine_error(payload: impl Into<ErrorPayload>) -> JsValue {
    let payload = payload.into();
    log_warn(&payload.message);
    serde_wasm_bindgen::to_value(&payload).unwrap_or_else(|_| JsValue::from_str(&payload.message))
}

/// Parse an annotation id handed over as a string
pub fn parse_annotation_id(id: &str) -> Result<AnnotationId, JsValue> {
    id.parse().map_err(|e| {
        let msg = format!("Invalid annotation id '{}': {}", id, e);
        wasm_error!("{}", msg);
        JsValue::from_str(&msg)
    })
}
