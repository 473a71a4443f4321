//! Graph model produced by the parser.

pub mod types;

pub use types::{ArrowStyle, Edge, Graph, Shape, SubGraph};
