//! Weighted undirected graph built by pointer input, with shortest-path search.

pub mod error;
pub mod graph;
pub mod label;
pub mod path;

pub use error::{GraphError, GraphErrorKind, Result};
pub use graph::{Edge, EdgeId, EdgePolicy, GraphModel, GraphSnapshot, Node, NodeId, Point};
pub use label::label_for;
pub use path::{shortest_path, PathFinder, ShortestPath};
