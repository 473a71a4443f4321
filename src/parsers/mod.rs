//! Parser entry point: classify the header, then run the flowchart parser.

pub mod base;
pub mod edges;
pub mod flowchart;
pub mod header;
pub mod shapes;

pub use base::{GraphBuilder, Parser, Scope};
pub use flowchart::FlowchartParser;
pub use header::{Header, classify};

use crate::error::UnsupportedDiagram;
use crate::syntax::types::Graph;

/// Parse a Mermaid flowchart string into a Graph.
///
/// Fails only when the header names an unsupported or unknown dialect.
pub fn parse(src: &str) -> Result<Graph, UnsupportedDiagram> {
    FlowchartParser.parse(src)
}
