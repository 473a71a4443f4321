//! Configuration for exporting a parsed graph.

/// Subgraph colors, assigned in declaration order and reused cyclically.
pub const DEFAULT_PALETTE: &[&str] = &[
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
    "#9c755f", "#bab0ac",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Legend colors. An empty palette leaves subgraphs uncolored.
    pub palette: Vec<String>,
    /// Include the enumerated simple cycles in the export.
    pub include_cycles: bool,
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            include_cycles: true,
            pretty: true,
        }
    }
}

impl ExportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Color for the subgraph at `index`, if the palette has any.
    pub fn color_for(&self, index: usize) -> Option<&str> {
        if self.palette.is_empty() {
            return None;
        }
        Some(self.palette[index % self.palette.len()].as_str())
    }
}
