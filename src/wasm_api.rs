//! WASM-facing API for browser renderers.
//!
//! Exposes span detection and reminder stripping to JavaScript. Results cross
//! the boundary as plain arrays and objects via `serde-wasm-bindgen`.

use wasm_bindgen::prelude::*;

use crate::italics::ItalicsEngine;
use crate::registry::AbilityWordRegistry;
use crate::reminder_text::strip_reminder_text;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
}

/// Italic strings of `text` using the bundled ability words.
#[wasm_bindgen(js_name = generateItalics)]
pub fn generate_italics(text: &str) -> Result<JsValue, JsValue> {
    let italics = ItalicsEngine::bundled().italics(text);
    serde_wasm_bindgen::to_value(&italics)
        .map_err(|e| JsValue::from_str(&format!("italics encode failed: {e}")))
}

/// Italic strings of `text` using an explicit list of ability words.
#[wasm_bindgen(js_name = generateItalicsWith)]
pub fn generate_italics_with(text: &str, words: JsValue) -> Result<JsValue, JsValue> {
    let words: Vec<String> = serde_wasm_bindgen::from_value(words)
        .map_err(|e| JsValue::from_str(&format!("invalid ability words: {e}")))?;
    let registry = AbilityWordRegistry::try_from_words(words)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let italics = ItalicsEngine::new(&registry).italics(text);
    serde_wasm_bindgen::to_value(&italics)
        .map_err(|e| JsValue::from_str(&format!("italics encode failed: {e}")))
}

/// Tagged spans (`text`, `offset`, `reason`) using the bundled ability words.
#[wasm_bindgen(js_name = italicSpans)]
pub fn italic_spans(text: &str) -> Result<JsValue, JsValue> {
    let spans = ItalicsEngine::bundled().spans(text);
    serde_wasm_bindgen::to_value(&spans)
        .map_err(|e| JsValue::from_str(&format!("spans encode failed: {e}")))
}

#[wasm_bindgen(js_name = stripReminderText)]
pub fn strip_reminder(text: &str) -> String {
    strip_reminder_text(text)
}
