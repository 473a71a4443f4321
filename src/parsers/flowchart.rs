//! Line-oriented parser for `graph` / `flowchart` diagrams.
//!
//! One pass over the lines after the header. The only state carried between
//! lines is the current [`Scope`].

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use super::base::{GraphBuilder, Parser, Scope};
use super::edges::parse_edge_chain;
use super::header::classify;
use super::shapes::{is_reserved, parse_node_token};
use crate::error::UnsupportedDiagram;
use crate::syntax::types::Graph;

static DIRECTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^direction\s+\w+").expect("direction pattern is valid"));

static STYLING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:style|classDef|class|click|linkStyle)\s").expect("styling pattern is valid")
});

static SUBGRAPH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^subgraph\s+(?:"([^"]*)"|(\w+))"#).expect("subgraph pattern is valid")
});

/// What a single line turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    Direction,
    Styling,
    SubgraphOpen,
    SubgraphClose,
    Edges(usize),
    NodeDecl,
    Ignored,
}

/// Parser for Mermaid flowchart/graph diagrams.
pub struct FlowchartParser;

impl Parser for FlowchartParser {
    fn parse(&self, src: &str) -> Result<Graph, UnsupportedDiagram> {
        let header = classify(src)?;
        let mut builder = GraphBuilder::new(header.direction);

        for (line_no, raw) in src.lines().enumerate().skip(header.line_index + 1) {
            let kind = parse_line(&mut builder, raw.trim());
            trace!(line = line_no + 1, ?kind, "parsed line");
        }

        let graph = builder.finish();
        debug!(
            direction = %graph.direction,
            subgraphs = graph.subgraphs.len(),
            edges = graph.edges.len(),
            labels = graph.labels.len(),
            "parsed flowchart"
        );
        Ok(graph)
    }
}

/// Dispatch one trimmed line. First matching rule wins.
pub fn parse_line(builder: &mut GraphBuilder, line: &str) -> LineKind {
    if line.is_empty() {
        return LineKind::Blank;
    }
    if line.starts_with("%%") {
        return LineKind::Comment;
    }
    if DIRECTION_RE.is_match(line) {
        return LineKind::Direction;
    }
    if STYLING_RE.is_match(line) {
        return LineKind::Styling;
    }
    if let Some(caps) = SUBGRAPH_RE.captures(line) {
        let name = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map_or("", |m| m.as_str());
        builder.open_subgraph(name);
        return LineKind::SubgraphOpen;
    }
    if line == "end" {
        builder.close_subgraph();
        return LineKind::SubgraphClose;
    }

    let chain = parse_edge_chain(line);
    if !chain.is_empty() {
        let count = chain.edges.len();
        for token in chain.tokens {
            if let (Some(label), Some(shape)) = (token.label, token.shape) {
                builder.set_label(token.id, label, shape);
            }
        }
        for edge in chain.edges {
            builder.push_edge(edge);
        }
        return LineKind::Edges(count);
    }

    if builder.scope() == Scope::TopLevel {
        return LineKind::Ignored;
    }
    match parse_node_token(line) {
        Some(token) if token.len == line.len() && !is_reserved(token.id) => {
            builder.add_member(token.id);
            if let (Some(label), Some(shape)) = (token.label, token.shape) {
                builder.set_label(token.id, label, shape);
            }
            LineKind::NodeDecl
        }
        _ => LineKind::Ignored,
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_flowchart.rs"]
mod tests;
