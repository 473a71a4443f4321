use super::*;

fn token(text: &str) -> NodeToken<'_> {
    parse_node_token(text).unwrap()
}

#[test]
fn test_bare_identifier_has_no_label() {
    let t = token("a --> b");
    assert_eq!(t.id, "a");
    assert_eq!(t.label, None);
    assert_eq!(t.shape, None);
    assert_eq!(t.len, 1);
}

#[test]
fn test_rectangle_label() {
    let t = token("A[Client] --> B");
    assert_eq!(t.id, "A");
    assert_eq!(t.label.as_deref(), Some("Client"));
    assert_eq!(t.shape, Some(Shape::Rectangle));
    assert_eq!(t.len, "A[Client]".len());
}

#[test]
fn test_quoted_rectangle_label() {
    let t = token("A[\"Long Label\"]");
    assert_eq!(t.label.as_deref(), Some("Long Label"));
    assert_eq!(t.shape, Some(Shape::Rectangle));
}

#[test]
fn test_every_shape_in_priority_order() {
    let cases = [
        ("db[(Store)]", Shape::Cylinder, "Store"),
        ("c((Hub))", Shape::Circle, "Hub"),
        ("s[[Run]]", Shape::Subroutine, "Run"),
        ("h{{Prep}}", Shape::Hexagon, "Prep"),
        ("p[/In/]", Shape::Parallelogram, "In"),
        ("q[\\Out\\]", Shape::ParallelogramAlt, "Out"),
        ("r[Box]", Shape::Rectangle, "Box"),
        ("o(Soft)", Shape::Rounded, "Soft"),
        ("d{Choice}", Shape::Diamond, "Choice"),
        ("a>Flag]", Shape::Asymmetric, "Flag"),
    ];
    for (text, shape, label) in cases {
        let t = token(text);
        assert_eq!(t.shape, Some(shape), "{text}");
        assert_eq!(t.label.as_deref(), Some(label), "{text}");
        assert_eq!(t.len, text.len(), "{text}");
    }
}

#[test]
fn test_quoted_variants_strip_quotes() {
    assert_eq!(token("db[(\"My DB\")]").label.as_deref(), Some("My DB"));
    assert_eq!(token("c((\"a b\"))").label.as_deref(), Some("a b"));
    assert_eq!(token("d{\"yes?\"}").label.as_deref(), Some("yes?"));
    assert_eq!(token("o(\"x (y)\")").label.as_deref(), Some("x (y)"));
}

#[test]
fn test_quoted_label_may_contain_brackets() {
    let t = token("A[\"list[0]\"] --> B");
    assert_eq!(t.label.as_deref(), Some("list[0]"));
    assert_eq!(t.len, "A[\"list[0]\"]".len());
}

#[test]
fn test_unmatched_shape_degrades_to_bare_node() {
    let t = token("A[unterminated");
    assert_eq!(t.id, "A");
    assert_eq!(t.label, None);
    assert_eq!(t.len, 1);
}

#[test]
fn test_shape_must_follow_identifier_directly() {
    let t = token("A [Label]");
    assert_eq!(t.label, None);
    assert_eq!(t.len, 1);
}

#[test]
fn test_non_identifier_start_is_rejected() {
    assert!(parse_node_token("--> B").is_none());
    assert!(parse_node_token("").is_none());
}

#[test]
fn test_reserved_keywords() {
    assert!(is_reserved("end"));
    assert!(is_reserved("classDef"));
    assert!(!is_reserved("End"));
    assert!(!is_reserved("ending"));
}
