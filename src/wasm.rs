//! WASM bindings for mermaid-graph.
//!
//! Exposes `parse` and `highlight` to JavaScript via wasm-bindgen. Results
//! are JSON strings in the element-contract format.

use wasm_bindgen::prelude::*;

use crate::config::ExportConfig;

/// Parse a flowchart and return its elements, legend and cycles as JSON.
#[wasm_bindgen]
pub fn parse(src: &str) -> Result<String, JsError> {
    let config = ExportConfig {
        pretty: false,
        ..ExportConfig::default()
    };
    crate::render_json(src, config, None).map_err(|e| JsError::new(&e.to_string()))
}

/// Parse a flowchart and return its elements plus the highlight partition
/// for `node`.
#[wasm_bindgen]
pub fn highlight(src: &str, node: &str) -> Result<String, JsError> {
    let config = ExportConfig {
        pretty: false,
        ..ExportConfig::default()
    };
    crate::render_json(src, config, Some(node)).map_err(|e| JsError::new(&e.to_string()))
}
