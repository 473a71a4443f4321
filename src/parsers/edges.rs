//! Arrow lexemes and multi-hop edge chains (`A --> B -->|yes| C`).

use std::sync::LazyLock;

use regex::Regex;

use super::shapes::{NodeToken, parse_node_token};
use crate::syntax::types::{ArrowStyle, Edge};

/// One arrow lexeme and how it maps onto edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrow {
    pub lexeme: &'static str,
    pub style: ArrowStyle,
    /// Two-headed arrows decompose into a forward and a reverse edge.
    pub bidirectional: bool,
}

const fn arrow(lexeme: &'static str, style: ArrowStyle) -> Arrow {
    Arrow {
        lexeme,
        style,
        bidirectional: false,
    }
}

const fn both_ways(lexeme: &'static str, style: ArrowStyle) -> Arrow {
    Arrow {
        lexeme,
        style,
        bidirectional: true,
    }
}

/// Arrow lexemes in match order (longest-match first within a family).
pub const ARROWS: &[Arrow] = &[
    both_ways("<-.->", ArrowStyle::Dotted),
    both_ways("<==>", ArrowStyle::Thick),
    both_ways("<-->", ArrowStyle::Arrow),
    arrow("-.->", ArrowStyle::Dotted),
    arrow("-..->", ArrowStyle::Dotted),
    arrow("==>", ArrowStyle::Thick),
    arrow("-->", ArrowStyle::Arrow),
    arrow("===", ArrowStyle::ThickOpen),
    arrow("---", ArrowStyle::Open),
    arrow("--", ArrowStyle::Open),
    arrow("-..-", ArrowStyle::DottedOpen),
    arrow("-.-", ArrowStyle::DottedOpen),
];

static EDGE_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\|([^|]*)\|").expect("edge label pattern is valid"));

/// The first arrow lexeme `text` starts with.
pub fn match_arrow(text: &str) -> Option<&'static Arrow> {
    ARROWS.iter().find(|a| text.starts_with(a.lexeme))
}

/// Match an `|label|` right after an arrow. Returns the trimmed label (None
/// when blank) and the bytes consumed.
pub fn match_edge_label(text: &str) -> Option<(Option<String>, usize)> {
    let caps = EDGE_LABEL_RE.captures(text)?;
    let consumed = caps.get(0)?.end();
    let label = caps[1].trim();
    let label = (!label.is_empty()).then(|| label.to_string());
    Some((label, consumed))
}

/// Result of scanning one line for an edge chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeChain<'a> {
    pub edges: Vec<Edge>,
    /// Every node token consumed as an edge endpoint, in source order.
    pub tokens: Vec<NodeToken<'a>>,
}

impl EdgeChain<'_> {
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Parse `NodeToken (Arrow (|label|)? NodeToken)+` from a trimmed line.
///
/// Scanning stops at the first position without a usable arrow or target;
/// edges found before that point are kept.
pub fn parse_edge_chain(line: &str) -> EdgeChain<'_> {
    let mut chain = EdgeChain::default();
    let Some(first) = parse_node_token(line) else {
        return chain;
    };

    let mut pos = first.len;
    let mut source = first.id;
    let mut pending_first = Some(first);

    loop {
        let mut cursor = pos + leading_ws(&line[pos..]);
        let Some(arrow) = match_arrow(&line[cursor..]) else {
            break;
        };
        cursor += arrow.lexeme.len();

        let mut label = None;
        if let Some((text, consumed)) = match_edge_label(&line[cursor..]) {
            label = text;
            cursor += consumed;
        }

        // The arrow must be followed by whitespace or the end of the line.
        let remainder = &line[cursor..];
        if !remainder.is_empty() && !remainder.starts_with(char::is_whitespace) {
            break;
        }
        cursor += leading_ws(remainder);

        let Some(target) = parse_node_token(&line[cursor..]) else {
            break;
        };

        if let Some(first) = pending_first.take() {
            chain.tokens.push(first);
        }
        let mut edge = Edge::new(source, target.id).with_style(arrow.style);
        edge.label = label;
        if arrow.bidirectional {
            let mut reverse = Edge::new(target.id, source).with_style(arrow.style);
            reverse.label = edge.label.clone();
            chain.edges.push(edge);
            chain.edges.push(reverse);
        } else {
            chain.edges.push(edge);
        }

        pos = cursor + target.len;
        source = target.id;
        chain.tokens.push(target);
    }

    chain
}

fn leading_ws(text: &str) -> usize {
    text.len() - text.trim_start().len()
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_edges.rs"]
mod tests;
