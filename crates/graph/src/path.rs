use itertools::Itertools;
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::graph::{EdgeId, GraphModel, NodeId};

/// Result of a shortest-path query.
///
/// Empty means the destination is unreachable from the origin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShortestPath {
    nodes: Vec<NodeId>,
    edges: Vec<EdgeId>,
    total_weight: f32,
}

impl ShortestPath {
    pub fn empty() -> Self {
        Self::default()
    }

    fn single(node: NodeId) -> Self {
        Self {
            nodes: vec![node],
            edges: Vec::new(),
            total_weight: 0.0,
        }
    }

    /// Node ids from origin to destination, inclusive.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// The edge taken between each pair of consecutive nodes.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Sum of the edge weights along the path; `None` when empty.
    pub fn total_weight(&self) -> Option<f32> {
        (!self.nodes.is_empty()).then_some(self.total_weight)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn origin(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    pub fn destination(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// True if the path travels along `edge`. A parallel edge the path did
    /// not take is not part of it.
    pub fn uses_edge(&self, edge: EdgeId) -> bool {
        self.edges.contains(&edge)
    }

    /// Labels joined with arrows, e.g. `A -> D -> C`.
    pub fn describe(&self) -> String {
        if self.nodes.is_empty() {
            return "no path".to_string();
        }
        self.nodes.iter().join(" -> ")
    }
}

/// Dijkstra over a [`GraphModel`], run as A* with a zero heuristic so the
/// search stops once the destination is settled. Weights are non-negative by
/// the model's own guarantee.
pub struct PathFinder<'a> {
    graph: &'a GraphModel,
}

impl<'a> PathFinder<'a> {
    pub fn new(graph: &'a GraphModel) -> Self {
        Self { graph }
    }

    /// Minimum-weight path from `origin` to `destination`.
    ///
    /// Unknown endpoints are an error; an unreachable destination is an
    /// empty path. For a fixed graph the same query always returns the same
    /// path, including among equal-cost routes.
    pub fn shortest_path(&self, origin: NodeId, destination: NodeId) -> Result<ShortestPath> {
        let start = self.graph.index_of(origin)?;
        let end = self.graph.index_of(destination)?;

        if origin == destination {
            return Ok(ShortestPath::single(origin));
        }

        let graph = self.graph.petgraph();
        let found = petgraph::algo::astar(
            graph,
            start,
            |finish| finish == end,
            |e| *e.weight(),
            |_| 0.0,
        );
        let path = match found {
            Some((total_weight, indices)) => {
                // Between parallel edges the search relaxed through the
                // lightest one; the first inserted wins a tie.
                let edges = indices
                    .iter()
                    .tuple_windows()
                    .filter_map(|(&a, &b)| {
                        graph
                            .edges_connecting(a, b)
                            .min_by(|x, y| x.weight().total_cmp(y.weight()))
                            .map(|e| EdgeId::from(e.id()))
                    })
                    .collect();
                ShortestPath {
                    nodes: indices.into_iter().map(NodeId::from).collect(),
                    edges,
                    total_weight,
                }
            }
            None => ShortestPath::empty(),
        };

        debug!(%origin, %destination, path = %path.describe(), "search finished");
        Ok(path)
    }
}

/// Shortest path between two nodes of `graph`.
pub fn shortest_path(
    graph: &GraphModel,
    origin: NodeId,
    destination: NodeId,
) -> Result<ShortestPath> {
    PathFinder::new(graph).shortest_path(origin, destination)
}
