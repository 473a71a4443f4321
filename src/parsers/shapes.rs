//! Node tokens: an identifier with an optional shape-delimited label.
//!
//! Shapes are tried in a fixed priority order, most specific first, and each
//! quoted variant before its unquoted counterpart. Reordering the table
//! changes results: `[(db)]` must reach the cylinder before the rectangle.

use std::sync::LazyLock;

use regex::Regex;

use crate::syntax::types::Shape;

/// Ordered (shape, pattern) pairs. Group 1 captures the label text.
const SHAPE_GRAMMAR: &[(Shape, &str)] = &[
    (Shape::Cylinder, r#"^\[\("([^"]*)"\)\]"#),
    (Shape::Cylinder, r"^\[\(([^)]*)\)\]"),
    (Shape::Circle, r#"^\(\("([^"]*)"\)\)"#),
    (Shape::Circle, r"^\(\(([^)]*)\)\)"),
    (Shape::Subroutine, r#"^\[\["([^"]*)"\]\]"#),
    (Shape::Subroutine, r"^\[\[([^\]]*)\]\]"),
    (Shape::Hexagon, r#"^\{\{"([^"]*)"\}\}"#),
    (Shape::Hexagon, r"^\{\{([^}]*)\}\}"),
    (Shape::Parallelogram, r#"^\[/"([^"]*)"/\]"#),
    (Shape::Parallelogram, r"^\[/([^/\]]*)/\]"),
    (Shape::ParallelogramAlt, r#"^\[\\"([^"]*)"\\\]"#),
    (Shape::ParallelogramAlt, r"^\[\\([^\\\]]*)\\\]"),
    (Shape::Rectangle, r#"^\["([^"]*)"\]"#),
    (Shape::Rectangle, r"^\[([^\]]*)\]"),
    (Shape::Rounded, r#"^\("([^"]*)"\)"#),
    (Shape::Rounded, r"^\(([^)]*)\)"),
    (Shape::Diamond, r#"^\{"([^"]*)"\}"#),
    (Shape::Diamond, r"^\{([^}]*)\}"),
    (Shape::Asymmetric, r#"^>"([^"]*)"\]"#),
    (Shape::Asymmetric, r"^>([^\]]*)\]"),
];

static SHAPE_PATTERNS: LazyLock<Vec<(Shape, Regex)>> = LazyLock::new(|| {
    SHAPE_GRAMMAR
        .iter()
        .map(|&(shape, pattern)| (shape, Regex::new(pattern).expect("shape pattern is valid")))
        .collect()
});

static IDENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+").expect("identifier pattern is valid"));

/// Identifiers that start a statement and never name a node.
pub const RESERVED_KEYWORDS: &[&str] = &[
    "end",
    "subgraph",
    "graph",
    "flowchart",
    "style",
    "classDef",
    "class",
    "direction",
    "click",
    "linkStyle",
];

pub fn is_reserved(id: &str) -> bool {
    RESERVED_KEYWORDS.contains(&id)
}

/// A node reference as written in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeToken<'a> {
    pub id: &'a str,
    pub label: Option<String>,
    pub shape: Option<Shape>,
    /// Bytes consumed: identifier plus shape suffix.
    pub len: usize,
}

/// Match a shape suffix at the start of `text`.
///
/// Returns the shape, the label with wrapping quotes removed, and the number
/// of bytes the suffix spans.
pub fn match_shape(text: &str) -> Option<(Shape, String, usize)> {
    SHAPE_PATTERNS.iter().find_map(|(shape, re)| {
        let caps = re.captures(text)?;
        let whole = caps.get(0)?;
        let label = caps.get(1).map_or("", |m| m.as_str());
        Some((*shape, strip_quotes(label).to_string(), whole.end()))
    })
}

/// Parse a node token at the start of `text`. Leading whitespace is not
/// skipped; the shape suffix must follow the identifier directly.
pub fn parse_node_token(text: &str) -> Option<NodeToken<'_>> {
    let id = IDENT_RE.find(text)?.as_str();
    let rest = &text[id.len()..];
    match match_shape(rest) {
        Some((shape, label, shape_len)) => Some(NodeToken {
            id,
            label: Some(label),
            shape: Some(shape),
            len: id.len() + shape_len,
        }),
        None => Some(NodeToken {
            id,
            label: None,
            shape: None,
            len: id.len(),
        }),
    }
}

/// Remove one pair of wrapping double quotes, if present.
fn strip_quotes(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(text)
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_shapes.rs"]
mod tests;
