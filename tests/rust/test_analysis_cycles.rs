use super::*;
use crate::syntax::types::{Edge, SubGraph};

fn graph(edges: &[(&str, &str)]) -> Graph {
    let mut g = Graph::new("TD");
    for &(a, b) in edges {
        g.edges.push(Edge::new(a, b));
    }
    g
}

fn names(cycle: &[&str]) -> Vec<String> {
    cycle.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_two_node_cycle() {
    let g = graph(&[("A", "B"), ("B", "A")]);
    assert_eq!(cyclic_edges(&g), vec![0, 1]);
    assert_eq!(simple_cycles(&g), vec![names(&["A", "B"])]);
}

#[test]
fn test_lone_edge_is_acyclic() {
    let g = graph(&[("a", "b")]);
    assert!(cyclic_edges(&g).is_empty());
    assert!(simple_cycles(&g).is_empty());
    assert!(CycleReport::analyze(&g).is_acyclic());
}

#[test]
fn test_self_loop() {
    let g = graph(&[("a", "a"), ("a", "b")]);
    assert_eq!(cyclic_edges(&g), vec![0]);
    assert_eq!(simple_cycles(&g), vec![names(&["a"])]);
}

#[test]
fn test_edge_leaving_a_component_is_not_cyclic() {
    let g = graph(&[("x", "y"), ("y", "z"), ("z", "x"), ("z", "out"), ("in", "x")]);
    assert_eq!(cyclic_edges(&g), vec![0, 1, 2]);
    assert_eq!(simple_cycles(&g), vec![names(&["x", "y", "z"])]);
}

#[test]
fn test_cycle_rotated_to_smallest_node() {
    let g = graph(&[("m", "z"), ("z", "c"), ("c", "m")]);
    assert_eq!(simple_cycles(&g), vec![names(&["c", "m", "z"])]);
}

#[test]
fn test_rotation_never_reverses() {
    let g = graph(&[("a", "c"), ("c", "b"), ("b", "a")]);
    assert_eq!(simple_cycles(&g), vec![names(&["a", "c", "b"])]);
}

#[test]
fn test_overlapping_cycles_sorted_by_length_then_sequence() {
    // a <-> b plus a -> c -> b -> a and a self-loop on c.
    let g = graph(&[("a", "b"), ("b", "a"), ("a", "c"), ("c", "b"), ("c", "c")]);
    assert_eq!(
        simple_cycles(&g),
        vec![names(&["c"]), names(&["a", "b"]), names(&["a", "c", "b"])]
    );
    assert_eq!(cyclic_edges(&g), vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_parallel_edges_do_not_duplicate_cycles() {
    let g = graph(&[("A", "B"), ("A", "B"), ("B", "A")]);
    assert_eq!(cyclic_edges(&g), vec![0, 1, 2]);
    assert_eq!(simple_cycles(&g), vec![names(&["A", "B"])]);
}

#[test]
fn test_complete_three_node_graph() {
    let g = graph(&[
        ("a", "b"),
        ("b", "a"),
        ("b", "c"),
        ("c", "b"),
        ("a", "c"),
        ("c", "a"),
    ]);
    assert_eq!(
        simple_cycles(&g),
        vec![
            names(&["a", "b"]),
            names(&["a", "c"]),
            names(&["b", "c"]),
            names(&["a", "b", "c"]),
            names(&["a", "c", "b"]),
        ]
    );
}

#[test]
fn test_strongly_connected_components() {
    let mut g = graph(&[("a", "b"), ("b", "a"), ("b", "c")]);
    let mut sg = SubGraph::new("s");
    sg.add_member("solo");
    g.subgraphs.push(sg);

    let mut sccs = strongly_connected_components(&g);
    sccs.sort();
    assert_eq!(sccs, vec![names(&["a", "b"]), names(&["c"]), names(&["solo"])]);
}

#[test]
fn test_long_chain_does_not_overflow() {
    let ids: Vec<String> = (0..100_000).map(|i| format!("n{i:06}")).collect();
    let mut g = Graph::new("TD");
    for pair in ids.windows(2) {
        g.edges.push(Edge::new(pair[0].as_str(), pair[1].as_str()));
    }
    assert!(cyclic_edges(&g).is_empty());

    g.edges.push(Edge::new(ids[ids.len() - 1].as_str(), ids[0].as_str()));
    assert_eq!(cyclic_edges(&g).len(), g.edges.len());
    assert_eq!(strongly_connected_components(&g).len(), 1);
}

#[test]
fn test_canonical_rotation() {
    assert_eq!(canonical_rotation(names(&["q", "b", "x"])), names(&["b", "x", "q"]));
    assert!(canonical_rotation(Vec::new()).is_empty());
}

#[test]
fn test_report_edge_lookup() {
    let report = CycleReport::analyze(&graph(&[("a", "b"), ("b", "a"), ("b", "c")]));
    assert!(report.is_cyclic_edge(0));
    assert!(report.is_cyclic_edge(1));
    assert!(!report.is_cyclic_edge(2));
}
