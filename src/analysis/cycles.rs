//! Strongly connected components, cyclic-edge classification, and simple
//! cycle enumeration.
//!
//! Tarjan's algorithm runs as a single depth-first pass driven by an
//! explicit work stack instead of recursion, so deep chains cannot overflow
//! the call stack. Index and low-link assignment order matches the
//! recursive formulation.

use std::collections::{BTreeSet, HashSet};

use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::graph::GraphIndex;
use crate::syntax::types::Graph;

// ─── Tarjan ──────────────────────────────────────────────────────────────────

/// One suspended DFS call: the node and how far through its successors the
/// walk has progressed.
struct Frame {
    node: NodeIndex,
    successors: Vec<NodeIndex>,
    next: usize,
}

impl Frame {
    fn new(node: NodeIndex, successors: Vec<NodeIndex>) -> Self {
        Self {
            node,
            successors,
            next: 0,
        }
    }
}

#[derive(Default)]
struct Tarjan {
    index: Vec<Option<usize>>,
    lowlink: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<NodeIndex>,
    next_index: usize,
    components: Vec<Vec<NodeIndex>>,
}

impl Tarjan {
    fn new(node_count: usize) -> Self {
        Self {
            index: vec![None; node_count],
            lowlink: vec![0; node_count],
            on_stack: vec![false; node_count],
            ..Self::default()
        }
    }

    fn discover(&mut self, v: NodeIndex) {
        let i = v.index();
        self.index[i] = Some(self.next_index);
        self.lowlink[i] = self.next_index;
        self.next_index += 1;
        self.stack.push(v);
        self.on_stack[i] = true;
    }

    fn run(mut self, index: &GraphIndex) -> Vec<Vec<NodeIndex>> {
        let g = &index.digraph;
        let successors = |v: NodeIndex| -> Vec<NodeIndex> {
            // petgraph yields neighbors newest-first; walk in insertion order.
            let mut out: Vec<NodeIndex> = g.neighbors(v).collect();
            out.reverse();
            out
        };

        for root in g.node_indices() {
            if self.index[root.index()].is_some() {
                continue;
            }
            self.discover(root);
            let mut work = vec![Frame::new(root, successors(root))];

            while let Some(frame) = work.last_mut() {
                let v = frame.node.index();
                if let Some(&w) = frame.successors.get(frame.next) {
                    frame.next += 1;
                    match self.index[w.index()] {
                        None => {
                            self.discover(w);
                            work.push(Frame::new(w, successors(w)));
                        }
                        Some(w_index) if self.on_stack[w.index()] => {
                            self.lowlink[v] = self.lowlink[v].min(w_index);
                        }
                        Some(_) => {}
                    }
                    continue;
                }

                let node = frame.node;
                work.pop();
                if let Some(parent) = work.last() {
                    let p = parent.node.index();
                    self.lowlink[p] = self.lowlink[p].min(self.lowlink[v]);
                }
                if Some(self.lowlink[v]) == self.index[v] {
                    self.pop_component(node);
                }
            }
        }

        self.components
    }

    fn pop_component(&mut self, root: NodeIndex) {
        let mut component = Vec::new();
        while let Some(w) = self.stack.pop() {
            self.on_stack[w.index()] = false;
            component.push(w);
            if w == root {
                break;
            }
        }
        self.components.push(component);
    }
}

fn tarjan_scc(index: &GraphIndex) -> Vec<Vec<NodeIndex>> {
    Tarjan::new(index.node_count()).run(index)
}

/// Component id per node, only for components with more than one member.
fn multi_node_component_ids(index: &GraphIndex, sccs: &[Vec<NodeIndex>]) -> Vec<Option<usize>> {
    let mut ids = vec![None; index.node_count()];
    for (id, component) in sccs.iter().enumerate().filter(|(_, c)| c.len() > 1) {
        for node in component {
            ids[node.index()] = Some(id);
        }
    }
    ids
}

// ─── Public queries ──────────────────────────────────────────────────────────

/// Strongly connected components in Tarjan completion order, each listed
/// with its member names sorted.
pub fn strongly_connected_components(graph: &Graph) -> Vec<Vec<String>> {
    let index = GraphIndex::build(graph);
    tarjan_scc(&index)
        .into_iter()
        .map(|component| {
            let mut names: Vec<String> = component
                .into_iter()
                .map(|n| index.id(n).to_string())
                .collect();
            names.sort();
            names
        })
        .collect()
}

/// Indices of edges that lie on a cycle: self-loops, and edges whose
/// endpoints share a strongly connected component of size > 1.
pub fn cyclic_edges(graph: &Graph) -> Vec<usize> {
    let index = GraphIndex::build(graph);
    let sccs = tarjan_scc(&index);
    cyclic_edges_in(graph, &index, &sccs)
}

fn cyclic_edges_in(graph: &Graph, index: &GraphIndex, sccs: &[Vec<NodeIndex>]) -> Vec<usize> {
    let component_of = multi_node_component_ids(index, sccs);
    let component = |id: &str| index.node(id).and_then(|n| component_of[n.index()]);

    graph
        .edges
        .iter()
        .enumerate()
        .filter(|(_, e)| {
            e.is_self_loop()
                || matches!(
                    (component(&e.source), component(&e.target)),
                    (Some(a), Some(b)) if a == b
                )
        })
        .map(|(i, _)| i)
        .collect()
}

/// Every simple cycle, rotated so its smallest node comes first, sorted by
/// length and then by node sequence.
///
/// Enumeration is exhaustive within each component and grows
/// combinatorially with component size.
pub fn simple_cycles(graph: &Graph) -> Vec<Vec<String>> {
    let index = GraphIndex::build(graph);
    let sccs = tarjan_scc(&index);
    simple_cycles_in(graph, &index, &sccs)
}

fn simple_cycles_in(graph: &Graph, index: &GraphIndex, sccs: &[Vec<NodeIndex>]) -> Vec<Vec<String>> {
    let mut found: BTreeSet<Vec<String>> = BTreeSet::new();

    for edge in graph.edges.iter().filter(|e| e.is_self_loop()) {
        found.insert(vec![edge.source.clone()]);
    }

    for component in sccs.iter().filter(|c| c.len() > 1) {
        let members: HashSet<NodeIndex> = component.iter().copied().collect();
        let inside = |v: NodeIndex| -> Vec<NodeIndex> {
            index
                .digraph
                .neighbors(v)
                .filter(|w| members.contains(w))
                .collect()
        };

        for &start in component {
            let mut path = vec![start];
            let mut on_path: HashSet<NodeIndex> = HashSet::from([start]);
            let mut work = vec![Frame::new(start, inside(start))];

            while let Some(frame) = work.last_mut() {
                let Some(&w) = frame.successors.get(frame.next) else {
                    work.pop();
                    if let Some(n) = path.pop() {
                        on_path.remove(&n);
                    }
                    continue;
                };
                frame.next += 1;

                if w == start {
                    let names = path.iter().map(|&n| index.id(n).to_string()).collect();
                    found.insert(canonical_rotation(names));
                } else if on_path.insert(w) {
                    path.push(w);
                    work.push(Frame::new(w, inside(w)));
                }
            }
        }
    }

    let mut cycles: Vec<Vec<String>> = found.into_iter().collect();
    cycles.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    cycles
}

/// Rotate (never reverse) so the lexicographically smallest node is first.
pub fn canonical_rotation(mut cycle: Vec<String>) -> Vec<String> {
    if let Some(pos) = cycle
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.cmp(b.1))
        .map(|(i, _)| i)
    {
        cycle.rotate_left(pos);
    }
    cycle
}

// ─── CycleReport ─────────────────────────────────────────────────────────────

/// Cycle information for the presentation layer, computed in one go.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CycleReport {
    /// Indices into `Graph::edges`.
    pub cyclic_edges: Vec<usize>,
    pub cycles: Vec<Vec<String>>,
}

impl CycleReport {
    pub fn analyze(graph: &Graph) -> Self {
        let index = GraphIndex::build(graph);
        let sccs = tarjan_scc(&index);
        let report = Self {
            cyclic_edges: cyclic_edges_in(graph, &index, &sccs),
            cycles: simple_cycles_in(graph, &index, &sccs),
        };
        debug!(
            components = sccs.len(),
            cyclic_edges = report.cyclic_edges.len(),
            cycles = report.cycles.len(),
            "analyzed cycles"
        );
        report
    }

    pub fn is_acyclic(&self) -> bool {
        self.cycles.is_empty()
    }

    pub fn is_cyclic_edge(&self, edge: usize) -> bool {
        self.cyclic_edges.binary_search(&edge).is_ok()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_analysis_cycles.rs"]
mod tests;
