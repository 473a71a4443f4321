//! Parser trait and the graph assembler shared by the flowchart parser.

use crate::error::UnsupportedDiagram;
use crate::syntax::types::{Edge, Graph, Shape, SubGraph};

// ─── Parser trait ────────────────────────────────────────────────────────────

/// Trait for diagram parsers.
pub trait Parser {
    /// Parse the input source string into a Graph.
    fn parse(&self, src: &str) -> Result<Graph, UnsupportedDiagram>;
}

// ─── Scope ───────────────────────────────────────────────────────────────────

/// Where the line parser currently is. Subgraphs do not nest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    #[default]
    TopLevel,
    /// Inside the subgraph at this index of `Graph::subgraphs`.
    InSubgraph(usize),
}

// ─── GraphBuilder ────────────────────────────────────────────────────────────

/// Accumulates parse results and hands out the finished, immutable Graph.
#[derive(Debug)]
pub struct GraphBuilder {
    graph: Graph,
    scope: Scope,
}

impl GraphBuilder {
    pub fn new(direction: impl Into<String>) -> Self {
        Self {
            graph: Graph::new(direction),
            scope: Scope::TopLevel,
        }
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Start a new subgraph and make it current. An open subgraph is closed
    /// implicitly.
    pub fn open_subgraph(&mut self, name: impl Into<String>) {
        self.graph.subgraphs.push(SubGraph::new(name));
        self.scope = Scope::InSubgraph(self.graph.subgraphs.len() - 1);
    }

    pub fn close_subgraph(&mut self) {
        self.scope = Scope::TopLevel;
    }

    /// Record `id` as a member of the current subgraph. No-op at top level.
    pub fn add_member(&mut self, id: &str) {
        if let Scope::InSubgraph(index) = self.scope {
            if let Some(subgraph) = self.graph.subgraphs.get_mut(index) {
                subgraph.add_member(id);
            }
        }
    }

    /// Last write wins.
    pub fn set_label(&mut self, id: &str, label: String, shape: Shape) {
        self.graph.labels.insert(id.to_string(), label);
        self.graph.shapes.insert(id.to_string(), shape);
    }

    /// Append an edge and register both endpoints with the current subgraph.
    pub fn push_edge(&mut self, edge: Edge) {
        self.add_member(&edge.source);
        self.add_member(&edge.target);
        self.graph.edges.push(edge);
    }

    pub fn finish(self) -> Graph {
        self.graph
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_base.rs"]
mod tests;
