//! The single error kind raised by the parser.

use thiserror::Error;

/// Raised once, while classifying the header, when the input is not a
/// `graph`/`flowchart` diagram with a direction.
///
/// The message carries the matched dialect keyword or the literal header
/// text verbatim so it can be shown to the user as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnsupportedDiagram {
    /// A recognized Mermaid dialect other than flowchart/graph.
    #[error("Unsupported diagram type: {0}. Only flowchart and graph diagrams are supported.")]
    Dialect(&'static str),
    /// A header that matches no known dialect.
    #[error("Unsupported diagram header: \"{0}\". Expected \"graph <DIR>\" or \"flowchart <DIR>\".")]
    Header(String),
}

impl UnsupportedDiagram {
    /// The keyword or header text that caused the rejection.
    pub fn offending_text(&self) -> &str {
        match self {
            Self::Dialect(keyword) => keyword,
            Self::Header(header) => header,
        }
    }
}
