//! mermaid-graph: parse Mermaid flowcharts and analyze their structure.
//!
//! Public API: [`parse`] turns `graph`/`flowchart` text into an immutable
//! [`Graph`]; the [`analysis`] module answers reachability and cycle
//! queries over it; [`renderers`] export the element contract used by the
//! visualization layer.

pub mod analysis;
pub mod config;
pub mod error;
pub mod parsers;
pub mod renderers;
pub mod syntax;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use crate::analysis::{
    CycleReport, Highlight, Reachability, all_node_names, cyclic_edges, highlight, node_subgraph,
    reachable, simple_cycles,
};
pub use crate::config::ExportConfig;
pub use crate::error::UnsupportedDiagram;
pub use crate::parsers::parse;
pub use crate::syntax::types::{ArrowStyle, Edge, Graph, Shape, SubGraph};

use crate::renderers::{ElementsRenderer, Renderer};

/// Parse a flowchart and export it as element-contract JSON.
///
/// `selected` adds the highlight partition for that node.
pub fn render_json(
    src: &str,
    config: ExportConfig,
    selected: Option<&str>,
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    let graph = parse(src)?;
    let mut renderer = ElementsRenderer::new(config);
    if let Some(node) = selected {
        renderer = renderer.with_selection(node);
    }
    Ok(renderer.render(&graph)?)
}
