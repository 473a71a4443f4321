//! Name enumeration, subgraph lookup, and a petgraph view of a Graph.

use std::collections::{BTreeSet, HashMap};

use petgraph::graph::{DiGraph, NodeIndex};

use crate::syntax::types::{Graph, SubGraph};

/// Every subgraph member and edge endpoint, sorted and deduplicated.
pub fn all_node_names(graph: &Graph) -> Vec<String> {
    let mut names: BTreeSet<&str> = BTreeSet::new();
    for subgraph in &graph.subgraphs {
        names.extend(subgraph.nodes.iter().map(String::as_str));
    }
    for edge in &graph.edges {
        names.insert(edge.source.as_str());
        names.insert(edge.target.as_str());
    }
    names.into_iter().map(str::to_string).collect()
}

/// The first-declared subgraph listing `name` as a member.
pub fn node_subgraph<'g>(graph: &'g Graph, name: &str) -> Option<&'g SubGraph> {
    graph.subgraphs.iter().find(|sg| sg.contains(name))
}

/// Directed graph over node names.
///
/// Node weights are ids; edge weights are indices into `Graph::edges`, so
/// parallel edges stay distinguishable.
#[derive(Debug, Clone)]
pub struct GraphIndex {
    pub digraph: DiGraph<String, usize>,
    /// Maps node id → petgraph NodeIndex.
    pub node_index: HashMap<String, NodeIndex>,
}

impl GraphIndex {
    /// Build the index. Nodes are inserted in sorted name order so indices
    /// are stable for a given Graph.
    pub fn build(graph: &Graph) -> Self {
        let mut digraph = DiGraph::new();
        let mut node_index = HashMap::new();
        for name in all_node_names(graph) {
            let idx = digraph.add_node(name.clone());
            node_index.insert(name, idx);
        }
        for (i, edge) in graph.edges.iter().enumerate() {
            let (Some(&from), Some(&to)) =
                (node_index.get(&edge.source), node_index.get(&edge.target))
            else {
                continue;
            };
            digraph.add_edge(from, to, i);
        }
        Self {
            digraph,
            node_index,
        }
    }

    pub fn node(&self, id: &str) -> Option<NodeIndex> {
        self.node_index.get(id).copied()
    }

    pub fn id(&self, idx: NodeIndex) -> &str {
        &self.digraph[idx]
    }

    pub fn node_count(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.digraph.edge_count()
    }

    /// Sorted successor ids of `id`; empty when `id` is unknown.
    pub fn successors(&self, id: &str) -> Vec<&str> {
        self.neighbor_ids(id, petgraph::Direction::Outgoing)
    }

    /// Sorted predecessor ids of `id`; empty when `id` is unknown.
    pub fn predecessors(&self, id: &str) -> Vec<&str> {
        self.neighbor_ids(id, petgraph::Direction::Incoming)
    }

    fn neighbor_ids(&self, id: &str, dir: petgraph::Direction) -> Vec<&str> {
        let Some(idx) = self.node(id) else {
            return Vec::new();
        };
        let mut ids: Vec<&str> = self
            .digraph
            .neighbors_directed(idx, dir)
            .map(|n| self.id(n))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_analysis_graph.rs"]
mod tests;
