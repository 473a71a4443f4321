//! Renderers that turn a Graph into output for the presentation layer.

pub mod elements;
pub mod summary;

pub use elements::{EdgeElement, Elements, ElementsRenderer, LegendEntry, NodeElement};
pub use summary::SummaryRenderer;

use thiserror::Error;

use crate::syntax::types::Graph;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to serialize elements: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to format summary: {0}")]
    Fmt(#[from] std::fmt::Error),
}

/// Trait for graph renderers.
pub trait Renderer {
    /// Render a parsed graph to a string.
    fn render(&self, graph: &Graph) -> Result<String, RenderError>;
}
