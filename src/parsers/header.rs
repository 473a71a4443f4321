//! Header classification: decide whether the input is a flowchart at all.
//!
//! Runs before any line parsing. Only `graph <DIR>` and `flowchart <DIR>`
//! headers are accepted; every other Mermaid dialect is rejected by name.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::UnsupportedDiagram;

/// Dialect keywords recognized and rejected. Longer keywords come before
/// their prefixes so the reported name is the most specific one.
pub const UNSUPPORTED_DIALECTS: &[&str] = &[
    "sequenceDiagram",
    "gantt",
    "classDiagram",
    "stateDiagram-v2",
    "stateDiagram",
    "pie",
    "erDiagram",
    "journey",
    "gitGraph",
    "mindmap",
    "timeline",
    "quadrantChart",
];

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:graph|flowchart)\s+([a-z]+)").expect("header pattern is valid")
});

/// An accepted flowchart header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Uppercased direction token.
    pub direction: String,
    /// Zero-based index of the header among `src.lines()`.
    pub line_index: usize,
}

/// First line that is neither blank nor a `%%` comment, trimmed.
pub fn first_significant_line(src: &str) -> Option<(usize, &str)> {
    src.lines()
        .map(str::trim)
        .enumerate()
        .find(|(_, line)| !line.is_empty() && !line.starts_with("%%"))
}

/// The unsupported dialect keyword `line` starts with, ignoring case.
pub fn match_unsupported_dialect(line: &str) -> Option<&'static str> {
    UNSUPPORTED_DIALECTS.iter().copied().find(|keyword| {
        line.get(..keyword.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(keyword))
    })
}

/// Classify the input by its header line.
pub fn classify(src: &str) -> Result<Header, UnsupportedDiagram> {
    let Some((line_index, line)) = first_significant_line(src) else {
        debug!("no significant line found");
        return Err(UnsupportedDiagram::Header(String::new()));
    };

    if let Some(keyword) = match_unsupported_dialect(line) {
        debug!(keyword, "rejecting unsupported dialect");
        return Err(UnsupportedDiagram::Dialect(keyword));
    }

    let Some(caps) = HEADER_RE.captures(line) else {
        debug!(header = line, "rejecting unrecognized header");
        return Err(UnsupportedDiagram::Header(line.to_string()));
    };

    let direction = caps[1].to_uppercase();
    debug!(%direction, line_index, "classified flowchart header");
    Ok(Header {
        direction,
        line_index,
    })
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_header.rs"]
mod tests;
