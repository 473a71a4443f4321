use super::*;

#[test]
fn test_edge_builder() {
    let e = Edge::new("A", "B")
        .with_label("yes")
        .with_style(ArrowStyle::Dotted);
    assert_eq!(e.source, "A");
    assert_eq!(e.target, "B");
    assert_eq!(e.label, Some("yes".to_string()));
    assert_eq!(e.style, ArrowStyle::Dotted);
    assert!(!e.is_self_loop());
    assert!(Edge::new("A", "A").is_self_loop());
}

#[test]
fn test_arrow_style_heads() {
    assert!(ArrowStyle::Arrow.has_head());
    assert!(ArrowStyle::Thick.has_head());
    assert!(!ArrowStyle::Open.has_head());
    assert!(!ArrowStyle::DottedOpen.has_head());
}

#[test]
fn test_subgraph_members_dedup_in_first_seen_order() {
    let mut sg = SubGraph::new("g");
    sg.add_member("b");
    sg.add_member("a");
    sg.add_member("b");
    assert_eq!(sg.nodes, vec!["b", "a"]);
    assert!(sg.contains("a"));
    assert!(!sg.contains("c"));
}

#[test]
fn test_label_of_falls_back_to_id() {
    let mut g = Graph::new("TD");
    g.labels.insert("A".to_string(), "Client".to_string());
    assert_eq!(g.label_of("A"), "Client");
    assert_eq!(g.label_of("B"), "B");
}

#[test]
fn test_graph_serializes_snake_case_enums() {
    let mut g = Graph::new("LR");
    g.edges.push(Edge::new("A", "B").with_style(ArrowStyle::DottedOpen));
    g.shapes.insert("A".to_string(), Shape::ParallelogramAlt);
    let json = serde_json::to_string(&g).unwrap();
    assert!(json.contains("\"dotted_open\""), "got: {json}");
    assert!(json.contains("\"parallelogram_alt\""), "got: {json}");
    assert!(!json.contains("\"label\""), "absent edge label is skipped: {json}");
}
