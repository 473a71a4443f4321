//! Bidirectional transitive reachability for interactive highlighting.

use std::collections::BTreeSet;

use petgraph::visit::{Dfs, Reversed};
use serde::{Deserialize, Serialize};

use super::graph::{GraphIndex, all_node_names};
use crate::syntax::types::Graph;

/// The node, its ancestors and descendants, and the edges among them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Reachability {
    pub nodes: BTreeSet<String>,
    /// Indices into `Graph::edges`.
    pub edges: BTreeSet<usize>,
}

/// Compute the reachability set of `node`.
///
/// The node itself is always included, even if the graph never mentions it.
pub fn reachable(graph: &Graph, node: &str) -> Reachability {
    let index = GraphIndex::build(graph);
    let mut nodes = BTreeSet::from([node.to_string()]);

    if let Some(start) = index.node(node) {
        let mut descendants = Dfs::new(&index.digraph, start);
        while let Some(n) = descendants.next(&index.digraph) {
            nodes.insert(index.id(n).to_string());
        }
        let reversed = Reversed(&index.digraph);
        let mut ancestors = Dfs::new(reversed, start);
        while let Some(n) = ancestors.next(reversed) {
            nodes.insert(index.id(n).to_string());
        }
    }

    let edges = graph
        .edges
        .iter()
        .enumerate()
        .filter(|(_, e)| nodes.contains(&e.source) && nodes.contains(&e.target))
        .map(|(i, _)| i)
        .collect();

    Reachability { nodes, edges }
}

/// A selection split into highlighted and dimmed elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub selected: String,
    pub highlighted_nodes: Vec<String>,
    pub dimmed_nodes: Vec<String>,
    pub highlighted_edges: Vec<usize>,
    pub dimmed_edges: Vec<usize>,
}

/// Partition every node and edge by whether it is reachable from `node`.
pub fn highlight(graph: &Graph, node: &str) -> Highlight {
    let reach = reachable(graph, node);
    let dimmed_nodes: Vec<String> = all_node_names(graph)
        .into_iter()
        .filter(|name| !reach.nodes.contains(name))
        .collect();
    let (highlighted_edges, dimmed_edges): (Vec<usize>, Vec<usize>) =
        (0..graph.edges.len()).partition(|i| reach.edges.contains(i));
    let highlighted_nodes = reach.nodes.into_iter().collect();

    Highlight {
        selected: node.to_string(),
        highlighted_nodes,
        dimmed_nodes,
        highlighted_edges,
        dimmed_edges,
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_analysis_reach.rs"]
mod tests;
