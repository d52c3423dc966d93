//! WASM API test
//!
//! Exercises the `ScriptAnnotator` JS surface. Runs in a browser only.

#![cfg(target_arch = "wasm32")]

use script_annotator::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn slide_js(title: &str) -> JsValue {
    serde_wasm_bindgen::to_value(&MediaDescriptor::slide(title, SlideMetadata::default())).unwrap()
}

#[wasm_bindgen_test]
fn test_annotator_creation() {
    let annotator = ScriptAnnotator::new("The cat sat on the mat", JsValue::UNDEFINED).unwrap();
    assert_eq!(annotator.text(), "The cat sat on the mat");
    assert_eq!(annotator.phase(), "idle");
}

#[wasm_bindgen_test]
fn test_track_and_bind() {
    let mut annotator = ScriptAnnotator::new("The cat sat on the mat", JsValue::UNDEFINED).unwrap();

    let candidate: SelectionCandidate =
        serde_wasm_bindgen::from_value(annotator.track_selection(7, 4).unwrap()).unwrap();
    assert_eq!(candidate.text, "cat");
    assert_eq!(annotator.phase(), "candidateReady");

    let outcome: BindOutcome =
        serde_wasm_bindgen::from_value(annotator.bind_media(slide_js("Slide 1")).unwrap()).unwrap();
    assert_eq!(outcome.annotations.len(), 1);
    assert_eq!(annotator.phase(), "idle");
}

#[wasm_bindgen_test]
fn test_overlap_error_payload() {
    let mut annotator = ScriptAnnotator::new("The cat sat on the mat", JsValue::UNDEFINED).unwrap();
    annotator.track_selection(4, 7).unwrap();
    annotator.bind_media(slide_js("Slide 1")).unwrap();

    let err = annotator.track_selection(5, 8).unwrap_err();
    let payload: ErrorPayload = serde_wasm_bindgen::from_value(err).unwrap();
    assert_eq!(payload.kind, "overlap");
    assert!(payload.conflicting_id.is_some());
}

#[wasm_bindgen_test]
fn test_unbind_unknown_id_is_noop() {
    let mut annotator = ScriptAnnotator::new("The cat sat on the mat", JsValue::UNDEFINED).unwrap();
    let list = annotator.unbind(&AnnotationId::new().to_string()).unwrap();
    let annotations: Vec<Annotation> = serde_wasm_bindgen::from_value(list).unwrap();
    assert!(annotations.is_empty());

    assert!(annotator.unbind("not-a-uuid").is_err());
}

#[wasm_bindgen_test]
fn test_json_round_trip() {
    let mut annotator = ScriptAnnotator::new("The cat sat on the mat", JsValue::UNDEFINED).unwrap();
    annotator.track_selection(8, 11).unwrap();
    annotator.bind_media(slide_js("Slide 2")).unwrap();

    let json = annotator.to_json().unwrap();
    let reloaded = ScriptAnnotator::from_json(&json, JsValue::UNDEFINED).unwrap();
    assert_eq!(reloaded.to_json().unwrap(), json);
}

#[wasm_bindgen_test]
fn test_bind_rejects_media_without_metadata() {
    let mut annotator = ScriptAnnotator::new("The cat sat on the mat", JsValue::UNDEFINED).unwrap();
    annotator.track_selection(4, 7).unwrap();

    let bare = json_object(r#"{"kind":"stock","content":"clip"}"#);
    let err = annotator.bind_media(bare).unwrap_err();
    assert!(err.as_string().unwrap().starts_with("Invalid media descriptor"));
}

fn json_object(json: &str) -> JsValue {
    use serde::Serialize;
    let value: serde_json::Value = serde_json::from_str(json).unwrap();
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible()).unwrap()
}
