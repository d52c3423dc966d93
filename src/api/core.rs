//! WASM API for the script annotation engine
//!
//! `ScriptAnnotator` owns one `ScriptEditor` for the lifetime of an
//! editing session. Every call is synchronous and runs to completion;
//! results come back as plain JS objects, errors as `ErrorPayload`
//! objects the caller can show inline.

use super::helpers::{
    deserialize, deserialize_or_default, engine_error, parse_annotation_id, serialize,
};
use crate::config::AnnotatorConfig;
use crate::models::{Annotation, MediaDescriptor, Phase, ScriptEditor};
use crate::{wasm_error, wasm_info, wasm_log, wasm_warn};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct ScriptAnnotator {
    editor: ScriptEditor,
}

#[wasm_bindgen]
impl ScriptAnnotator {
    /// Start a session over `text` with no annotations.
    /// `config` may be `undefined`.
    #[wasm_bindgen(constructor)]
    pub fn new(text: &str, config: JsValue) -> Result<ScriptAnnotator, JsValue> {
        let config: AnnotatorConfig = deserialize_or_default(config, "Invalid config")?;
        wasm_info!("ScriptAnnotator created: {} chars", text.chars().count());
        Ok(ScriptAnnotator {
            editor: ScriptEditor::with_config(text, config),
        })
    }

    /// Start a session from persisted text and annotations.
    /// An overlapping annotation set is rejected as a whole.
    #[wasm_bindgen(js_name = load)]
    pub fn load(text: &str, annotations: JsValue, config: JsValue) -> Result<ScriptAnnotator, JsValue> {
        let config: AnnotatorConfig = deserialize_or_default(config, "Invalid config")?;
        let annotations: Vec<Annotation> = deserialize_or_default(annotations, "Invalid annotations")?;
        let count = annotations.len();

        let editor = ScriptEditor::load(text, annotations, config).map_err(engine_error)?;
        wasm_info!("ScriptAnnotator loaded with {} annotations", count);
        Ok(ScriptAnnotator { editor })
    }

    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str, config: JsValue) -> Result<ScriptAnnotator, JsValue> {
        let config: AnnotatorConfig = deserialize_or_default(config, "Invalid config")?;
        let editor = ScriptEditor::from_json(json, config).map_err(engine_error)?;
        Ok(ScriptAnnotator { editor })
    }

    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<String, JsValue> {
        self.editor.to_json().map_err(|e| {
            wasm_error!("toJson failed: {}", e);
            JsValue::from_str(&format!("Serialization error: {}", e))
        })
    }

    pub fn text(&self) -> String {
        self.editor.text().to_string()
    }

    /// Replace the text. Returns `{ text, dangling, dropped }`.
    #[wasm_bindgen(js_name = setText)]
    pub fn set_text(&mut self, text: &str) -> Result<JsValue, JsValue> {
        let change = self.editor.set_text(text);
        if !change.dangling.is_empty() {
            wasm_warn!("{} annotation(s) past the end of the new text", change.dangling.len());
        }
        serialize(&change, "Failed to serialize text change")
    }

    /// Validate the user's selection and hold it as the candidate.
    /// Returns `{ range, text }`.
    #[wasm_bindgen(js_name = trackSelection)]
    pub fn track_selection(&mut self, start: usize, end: usize) -> Result<JsValue, JsValue> {
        wasm_log!("trackSelection: {}..{}", start, end);
        let candidate = self.editor.select(start, end).map_err(engine_error)?;
        serialize(candidate, "Failed to serialize candidate")
    }

    #[wasm_bindgen(js_name = cancelSelection)]
    pub fn cancel_selection(&mut self) {
        self.editor.cancel();
    }

    /// Current candidate, or `undefined` when idle
    pub fn candidate(&self) -> Result<JsValue, JsValue> {
        match self.editor.candidate() {
            Some(candidate) => serialize(candidate, "Failed to serialize candidate"),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// "idle" or "candidateReady"
    pub fn phase(&self) -> String {
        match self.editor.phase() {
            Phase::Idle => "idle".to_string(),
            Phase::CandidateReady => "candidateReady".to_string(),
        }
    }

    /// Bind the held candidate to a `{ kind, content, metadata }` media
    /// descriptor. Returns `{ annotation, annotations }`.
    #[wasm_bindgen(js_name = bindMedia)]
    pub fn bind_media(&mut self, media: JsValue) -> Result<JsValue, JsValue> {
        let media: MediaDescriptor = deserialize(media, "Invalid media descriptor")?;
        let kind = media.kind();

        let outcome = self.editor.bind(media).map_err(engine_error)?;
        wasm_info!(
            "Bound {} to {} ({} annotations)",
            outcome.annotation.range(),
            kind,
            outcome.annotations.len()
        );
        serialize(&outcome, "Failed to serialize bind result")
    }

    /// Remove an annotation and return the full ordered list.
    /// Unknown ids are a no-op with a console warning.
    pub fn unbind(&mut self, id: &str) -> Result<JsValue, JsValue> {
        let id = parse_annotation_id(id)?;
        let annotations = match self.editor.unbind(id) {
            Ok(annotations) => annotations,
            Err(err) => {
                wasm_warn!("unbind ignored: {}", err);
                self.editor.annotations().to_vec()
            }
        };
        serialize(&annotations, "Failed to serialize annotations")
    }

    pub fn annotations(&self) -> Result<JsValue, JsValue> {
        serialize(&self.editor.annotations(), "Failed to serialize annotations")
    }

    /// Annotation covering a text offset, or `undefined`
    #[wasm_bindgen(js_name = annotationAt)]
    pub fn annotation_at(&self, pos: usize) -> Result<JsValue, JsValue> {
        match self.editor.store().annotation_at(pos) {
            Some(annotation) => serialize(annotation, "Failed to serialize annotation"),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Mark an annotation as selected for highlighting; `undefined` clears
    #[wasm_bindgen(js_name = selectAnnotation)]
    pub fn select_annotation(&mut self, id: Option<String>) -> Result<bool, JsValue> {
        let id = id.as_deref().map(parse_annotation_id).transpose()?;
        Ok(self.editor.select_annotation(id))
    }

    pub fn highlights(&self) -> Result<JsValue, JsValue> {
        serialize(&self.editor.highlights(), "Failed to serialize highlights")
    }

    pub fn segments(&self) -> Result<JsValue, JsValue> {
        serialize(&self.editor.segments(), "Failed to serialize segments")
    }
}
