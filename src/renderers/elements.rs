//! The element-list contract consumed by the visualization layer.
//!
//! A Graph becomes a flat list of node and edge elements plus a subgraph
//! color legend. Edges carry their arrow style and whether they lie on a
//! cycle, which is all the renderer needs to draw cycle hints.

use serde::{Deserialize, Serialize};

use super::{RenderError, Renderer};
use crate::analysis::{CycleReport, Highlight, all_node_names, highlight, node_subgraph};
use crate::config::ExportConfig;
use crate::syntax::types::{ArrowStyle, Graph, Shape};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeElement {
    pub id: String,
    /// Declared label, or the id when none was declared.
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<Shape>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subgraph: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeElement {
    /// Position in `Graph::edges`.
    pub id: usize,
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub style: ArrowStyle,
    pub cyclic: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Elements {
    pub direction: String,
    pub nodes: Vec<NodeElement>,
    pub edges: Vec<EdgeElement>,
    pub legend: Vec<LegendEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycles: Option<Vec<Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<Highlight>,
}

impl Elements {
    pub fn from_graph(graph: &Graph, config: &ExportConfig) -> Self {
        let report = CycleReport::analyze(graph);

        let legend: Vec<LegendEntry> = graph
            .subgraphs
            .iter()
            .enumerate()
            .map(|(i, sg)| LegendEntry {
                name: sg.name.clone(),
                color: config.color_for(i).map(str::to_string),
            })
            .collect();

        let nodes = all_node_names(graph)
            .into_iter()
            .map(|id| {
                let position = graph.subgraphs.iter().position(|sg| sg.contains(&id));
                NodeElement {
                    label: graph.label_of(&id).to_string(),
                    shape: graph.shapes.get(&id).copied(),
                    subgraph: node_subgraph(graph, &id).map(|sg| sg.name.clone()),
                    color: position.and_then(|i| legend[i].color.clone()),
                    id,
                }
            })
            .collect();

        let edges = graph
            .edges
            .iter()
            .enumerate()
            .map(|(i, e)| EdgeElement {
                id: i,
                source: e.source.clone(),
                target: e.target.clone(),
                label: e.label.clone(),
                style: e.style,
                cyclic: report.is_cyclic_edge(i),
            })
            .collect();

        Self {
            direction: graph.direction.clone(),
            nodes,
            edges,
            legend,
            cycles: config.include_cycles.then_some(report.cycles),
            highlight: None,
        }
    }

    /// Attach the highlight partition for a selected node.
    pub fn with_selection(mut self, graph: &Graph, node: &str) -> Self {
        self.highlight = Some(highlight(graph, node));
        self
    }
}

/// Renders the element contract as JSON.
pub struct ElementsRenderer {
    pub config: ExportConfig,
    /// Node whose reachability set is exported alongside the elements.
    pub selected: Option<String>,
}

impl ElementsRenderer {
    pub fn new(config: ExportConfig) -> Self {
        Self {
            config,
            selected: None,
        }
    }

    pub fn with_selection(mut self, node: impl Into<String>) -> Self {
        self.selected = Some(node.into());
        self
    }

    pub fn elements(&self, graph: &Graph) -> Elements {
        let elements = Elements::from_graph(graph, &self.config);
        match &self.selected {
            Some(node) => elements.with_selection(graph, node),
            None => elements,
        }
    }
}

impl Renderer for ElementsRenderer {
    fn render(&self, graph: &Graph) -> Result<String, RenderError> {
        let elements = self.elements(graph);
        let json = if self.config.pretty {
            serde_json::to_string_pretty(&elements)?
        } else {
            serde_json::to_string(&elements)?
        };
        Ok(json)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_elements.rs"]
mod tests;
