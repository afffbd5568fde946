// WebAssembly bindings for the webutil helpers
use crate::dom;
use crate::format;
use crate::manifest;
use serde_json::Value;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WebUtilWasm {}

impl Default for WebUtilWasm {
    fn default() -> Self {
        Self::new()
    }
}

/// JSON value -> pluralizer argument: numbers count, `[n, label]` pairs
/// count through their label, everything else is plain text
fn plural_arg(value: &Value) -> format::PluralArg {
    match value {
        Value::Number(n) => format::PluralArg::Count(n.as_f64().unwrap_or(f64::NAN)),
        Value::Array(pair) if pair.len() == 2 => match (pair[0].as_f64(), &pair[1]) {
            (Some(count), Value::String(label)) => format::PluralArg::Labeled {
                count,
                label: label.clone(),
            },
            (Some(count), label) => format::PluralArg::Labeled {
                count,
                label: label.to_string(),
            },
            (None, Value::String(label)) => format::PluralArg::Text(label.clone()),
            (None, label) => format::PluralArg::Text(label.to_string()),
        },
        Value::String(s) => format::PluralArg::Text(s.clone()),
        other => format::PluralArg::Text(other.to_string()),
    }
}

#[wasm_bindgen]
impl WebUtilWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {}
    }

    /// Format a magnitude with an SI prefix, e.g. 1500 -> "2k"
    #[wasm_bindgen]
    pub fn human(&self, value: f64, suffix: Option<String>, sig: Option<u32>) -> String {
        format::human(value, suffix.as_deref().unwrap_or(""), sig.unwrap_or(0))
    }

    #[wasm_bindgen]
    pub fn tagify(&self, category: Option<String>, label: &str) -> String {
        dom::tagify(
            category.as_deref().unwrap_or(dom::DEFAULT_CATEGORY),
            label,
        )
    }

    /// Flatten manifest dependencies
    /// manifest_json: package.json contents (or a registry document with `package`)
    /// includes_json: JSON array of category names
    /// Returns JSON array of {name, version, category}
    #[wasm_bindgen]
    pub fn dependency_entries(
        &self,
        manifest_json: &str,
        includes_json: &str,
        level: u32,
    ) -> Result<String, JsValue> {
        let pkg: Value = serde_json::from_str(manifest_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse manifest JSON: {}", e)))?;
        let includes: Vec<String> = serde_json::from_str(includes_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse includes JSON: {}", e)))?;

        let entries = manifest::get_dependency_entries(&pkg, &includes, level);

        serde_json::to_string(&entries)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize entries: {}", e)))
    }

    /// Split "name@version"; returns JSON {name, version}
    #[wasm_bindgen]
    pub fn entry_from_key(&self, key: &str) -> String {
        let key = manifest::entry_from_key(key);
        serde_json::json!({ "name": key.name, "version": key.version }).to_string()
    }

    /// Pluralizing template: "{}" placeholders, values as a JSON array
    #[wasm_bindgen]
    pub fn simplur(&self, template: &str, values_json: &str) -> Result<String, JsValue> {
        let values: Vec<Value> = serde_json::from_str(values_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse values JSON: {}", e)))?;
        let args: Vec<format::PluralArg> = values.iter().map(plural_arg).collect();

        Ok(format::simplur(&format::template_segments(template), &args))
    }

    /// Build a tag element in the window's document
    #[wasm_bindgen]
    pub fn create_tag(&self, category: &str, text: &str, count: u32) -> Result<web_sys::Node, JsValue> {
        let doc = dom::web::window_document()
            .ok_or_else(|| JsValue::from_str("No document available"))?;

        dom::create_tag(&doc, category, text, count)
            .ok_or_else(|| JsValue::from_str("Failed to create tag element"))
    }
}
