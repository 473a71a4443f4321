/// Data structures for a parsed flowchart.
///
/// A `Graph` is assembled once by the parser and never mutated afterwards.
/// Node identity is the bare identifier string; labels and shapes live in
/// side maps keyed by that identifier.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ─── Shape ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Cylinder,         // id[(Label)]
    Circle,           // id((Label))
    Subroutine,       // id[[Label]]
    Hexagon,          // id{{Label}}
    Parallelogram,    // id[/Label/]
    ParallelogramAlt, // id[\Label\]
    Rectangle,        // id[Label]
    Rounded,          // id(Label)
    Diamond,          // id{Label}
    Asymmetric,       // id>Label]
}

// ─── ArrowStyle ──────────────────────────────────────────────────────────────

/// Visual style of an edge lexeme. Never changes source→target direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrowStyle {
    #[default]
    Arrow, // -->
    Open,       // --- or --
    Dotted,     // -.-> or -..->
    DottedOpen, // -.- or -..-
    Thick,      // ==>
    ThickOpen,  // ===
}

impl ArrowStyle {
    /// True for the styles drawn with an arrowhead.
    pub fn has_head(self) -> bool {
        matches!(self, Self::Arrow | Self::Dotted | Self::Thick)
    }
}

// ─── Edge ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    /// Inline label from the `|text|` syntax.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub style: ArrowStyle,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: None,
            style: ArrowStyle::Arrow,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_style(mut self, style: ArrowStyle) -> Self {
        self.style = style;
        self
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

// ─── SubGraph ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubGraph {
    pub name: String,
    /// Member ids in first-seen order, no duplicates.
    pub nodes: Vec<String>,
}

impl SubGraph {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: Vec::new(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n == id)
    }

    /// Append `id` unless it is already a member.
    pub fn add_member(&mut self, id: &str) {
        if !self.contains(id) {
            self.nodes.push(id.to_string());
        }
    }
}

// ─── Graph ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Graph {
    /// Uppercased direction token from the header, e.g. "TD" or "LR".
    pub direction: String,
    pub subgraphs: Vec<SubGraph>,
    pub edges: Vec<Edge>,
    /// Node id → display label. Last declaration wins.
    pub labels: BTreeMap<String, String>,
    /// Node id → shape of the declaration that set the label.
    pub shapes: BTreeMap<String, Shape>,
}

impl Graph {
    pub fn new(direction: impl Into<String>) -> Self {
        Self {
            direction: direction.into(),
            ..Self::default()
        }
    }

    /// Display label for `id`, falling back to the id itself.
    pub fn label_of<'a>(&'a self, id: &'a str) -> &'a str {
        self.labels.get(id).map(String::as_str).unwrap_or(id)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_syntax_types.rs"]
mod tests;
