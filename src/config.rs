use crate::constants::SEGMENT_DURATION_MS;
use serde::Deserialize;
use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("invalid graph options: {0}")]
    Decode(String),
    #[error("segment duration must be finite and non-negative, got {0}")]
    Duration(f64),
}

/// Per-page options; every field falls back to the stock page layout.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GraphOptions {
    pub static_canvas_id: String,
    pub dynamic_canvas_id: String,
    pub container_id: String,
    pub input_selector: String,
    pub header_selector: String,
    pub nav_selector: String,
    pub expected_output_selector: String,
    pub segment_duration_ms: f64,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            static_canvas_id: "graphStatic".into(),
            dynamic_canvas_id: "graphCanvas".into(),
            container_id: "graph-container".into(),
            input_selector: ".input-field".into(),
            header_selector: "header".into(),
            nav_selector: "nav".into(),
            expected_output_selector: ".expected-output".into(),
            segment_duration_ms: SEGMENT_DURATION_MS,
        }
    }
}

impl GraphOptions {
    pub fn validate(self) -> Result<Self, OptionsError> {
        if !self.segment_duration_ms.is_finite() || self.segment_duration_ms < 0.0 {
            return Err(OptionsError::Duration(self.segment_duration_ms));
        }
        Ok(self)
    }

    /// `undefined`/`null` yield the defaults.
    pub fn from_js(value: JsValue) -> Result<Self, OptionsError> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value::<GraphOptions>(value)
            .map_err(|e| OptionsError::Decode(e.to_string()))?
            .validate()
    }
}
