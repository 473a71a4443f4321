//! Plain-text summary: counts, subgraphs, and the cycle report.

use std::fmt::Write;

use super::{RenderError, Renderer};
use crate::analysis::{CycleReport, all_node_names, highlight};
use crate::syntax::types::Graph;

/// Renders a human-readable overview of a graph.
#[derive(Debug, Clone, Default)]
pub struct SummaryRenderer {
    pub selected: Option<String>,
}

impl SummaryRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selection(mut self, node: impl Into<String>) -> Self {
        self.selected = Some(node.into());
        self
    }
}

impl Renderer for SummaryRenderer {
    fn render(&self, graph: &Graph) -> Result<String, RenderError> {
        let mut out = String::new();
        let report = CycleReport::analyze(graph);

        writeln!(out, "flowchart {}", graph.direction)?;
        writeln!(out, "nodes: {}", all_node_names(graph).len())?;
        writeln!(out, "edges: {}", graph.edges.len())?;
        writeln!(out, "subgraphs: {}", graph.subgraphs.len())?;
        for sg in &graph.subgraphs {
            writeln!(out, "  {}: {}", sg.name, sg.nodes.join(", "))?;
        }

        if report.is_acyclic() {
            writeln!(out, "cycles: none")?;
        } else {
            writeln!(out, "cycles: {}", report.cycles.len())?;
            for cycle in &report.cycles {
                writeln!(out, "  {} -> {}", cycle.join(" -> "), cycle[0])?;
            }
            writeln!(out, "cyclic edges: {}", report.cyclic_edges.len())?;
            for &i in &report.cyclic_edges {
                let edge = &graph.edges[i];
                writeln!(out, "  #{i} {} -> {}", edge.source, edge.target)?;
            }
        }

        if let Some(node) = &self.selected {
            let hl = highlight(graph, node);
            writeln!(out, "selected: {}", hl.selected)?;
            writeln!(out, "  highlighted: {}", hl.highlighted_nodes.join(", "))?;
            writeln!(out, "  dimmed: {}", hl.dimmed_nodes.join(", "))?;
        }

        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_summary.rs"]
mod tests;
