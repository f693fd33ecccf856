//! JSON renderer
//!
//! Serializes the model as-is. Items carry their kind as a `"kind"` tag next
//! to the common fields; navigation targets appear only on choices that have
//! one.

use crate::error::FormError;
use crate::model::FormModel;
use crate::render::Renderer;

pub fn to_json_string(form: &FormModel) -> Result<String, FormError> {
    serde_json::to_string_pretty(form)
        .map(|mut json| {
            json.push('\n');
            json
        })
        .map_err(|e| FormError::Render(format!("JSON serialization failed: {e}")))
}

/// Renderer implementation for JSON output
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "The parsed form model as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn render(&self, form: &FormModel) -> Result<String, FormError> {
        to_json_string(form)
    }
}
