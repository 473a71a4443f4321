//! Queries over a parsed Graph: names, membership, reachability, cycles.
//!
//! Everything here is computed on demand from the immutable Graph; nothing
//! is cached between calls.

pub mod cycles;
pub mod graph;
pub mod reach;

pub use cycles::{CycleReport, cyclic_edges, simple_cycles, strongly_connected_components};
pub use graph::{GraphIndex, all_node_names, node_subgraph};
pub use reach::{Highlight, Reachability, highlight, reachable};
