use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, warn};

use crate::error::{GraphError, Result};
use crate::label::label_for;

/// Stable node identity: the node's position in creation order.
///
/// `Display` renders the node's label (`A`, `B`, ...), which is what users see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }

    pub fn label(self) -> String {
        label_for(self)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&label_for(*self))
    }
}

impl From<NodeIndex> for NodeId {
    fn from(idx: NodeIndex) -> Self {
        NodeId(idx.index())
    }
}

/// Edge identity: the edge's position in insertion order, matching the
/// order of [`GraphModel::edges`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub usize);

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<EdgeIndex> for EdgeId {
    fn from(idx: EdgeIndex) -> Self {
        EdgeId(idx.index())
    }
}

/// A position in the normalized drawing space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub position: Point,
    pub label: String,
}

/// An undirected edge as it was inserted; `a` and `b` keep insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub a: NodeId,
    pub b: NodeId,
    pub weight: f32,
}

impl Edge {
    /// True if this edge joins `x` and `y`, in either orientation.
    pub fn connects(&self, x: NodeId, y: NodeId) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }
}

/// What to do when an edge is requested between already connected nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EdgePolicy {
    #[default]
    AllowParallel,
    RejectParallel,
}

/// Read-only view of the whole graph for renderers and reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

/// Append-only weighted undirected graph.
///
/// Node ids are dense and never reused: nodes are never removed, so the
/// petgraph index of a node is its id. Adjacency is whatever petgraph derives
/// from the edge list, which keeps it symmetric by construction.
#[derive(Debug, Clone, Default)]
pub struct GraphModel {
    graph: UnGraph<Point, f32>,
    policy: EdgePolicy,
}

impl GraphModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: EdgePolicy) -> Self {
        Self {
            graph: UnGraph::default(),
            policy,
        }
    }

    pub fn policy(&self) -> EdgePolicy {
        self.policy
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.graph.node_count()
    }

    pub(crate) fn petgraph(&self) -> &UnGraph<Point, f32> {
        &self.graph
    }

    pub(crate) fn index_of(&self, id: NodeId) -> Result<NodeIndex> {
        if self.contains(id) {
            Ok(NodeIndex::new(id.index()))
        } else {
            Err(GraphError::InvalidReference {
                id,
                node_count: self.graph.node_count(),
            })
        }
    }

    /// Append a node. Overlapping positions are allowed.
    pub fn add_node(&mut self, position: Point) -> NodeId {
        let id = NodeId::from(self.graph.add_node(position));
        info!(node = %id, x = position.x, y = position.y, "node added");
        id
    }

    /// Connect `a` and `b` with a fixed weight.
    ///
    /// Rejects unknown ids, self-loops, negative or non-finite weights and,
    /// under [`EdgePolicy::RejectParallel`], a second edge between the same
    /// pair. The graph is untouched when an error is returned.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: f32) -> Result<Edge> {
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;

        if a == b {
            warn!(node = %a, "self-loop rejected");
            return Err(GraphError::SelfLoop { node: a });
        }
        if !weight.is_finite() || weight < 0.0 {
            warn!(%a, %b, weight, "invalid edge weight rejected");
            return Err(GraphError::InvalidWeight { weight });
        }
        if self.policy == EdgePolicy::RejectParallel && self.graph.find_edge(ia, ib).is_some() {
            debug!(%a, %b, "parallel edge rejected");
            return Err(GraphError::ParallelEdge { a, b });
        }

        self.graph.add_edge(ia, ib, weight);
        info!(%a, %b, weight, "edge created");
        Ok(Edge { a, b, weight })
    }

    pub fn position(&self, id: NodeId) -> Result<Point> {
        let idx = self.index_of(id)?;
        Ok(self.graph[idx])
    }

    pub fn node(&self, id: NodeId) -> Result<Node> {
        let position = self.position(id)?;
        Ok(Node {
            id,
            position,
            label: label_for(id),
        })
    }

    /// Nodes in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.graph.node_indices().map(move |idx| {
            let id = NodeId::from(idx);
            Node {
                id,
                position: self.graph[idx],
                label: label_for(id),
            }
        })
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.graph.edge_references().map(|e| Edge {
            a: e.source().into(),
            b: e.target().into(),
            weight: *e.weight(),
        })
    }

    /// `(neighbor, weight)` for every edge touching `id`; parallel edges
    /// appear once each.
    pub fn neighbors(&self, id: NodeId) -> Result<Vec<(NodeId, f32)>> {
        let idx = self.index_of(id)?;
        Ok(self
            .graph
            .edges(idx)
            .map(|e| {
                let other = if e.source() == idx { e.target() } else { e.source() };
                (other.into(), *e.weight())
            })
            .collect())
    }

    /// Euclidean distance between two nodes' positions.
    pub fn distance(&self, a: NodeId, b: NodeId) -> Result<f32> {
        Ok(self.position(a)?.distance(&self.position(b)?))
    }

    /// The node closest to `position` among those strictly within `radius`.
    ///
    /// Nodes are scanned in creation order and only a strictly closer node
    /// replaces the current best, so ties go to the lowest id. A NaN
    /// distance never matches.
    pub fn find_nearest(&self, position: Point, radius: f32) -> Option<NodeId> {
        let mut best: Option<(NodeId, f32)> = None;
        for idx in self.graph.node_indices() {
            let d = self.graph[idx].distance(&position);
            if !(d < radius) {
                continue;
            }
            if best.map_or(true, |(_, best_d)| d < best_d) {
                best = Some((idx.into(), d));
            }
        }
        best.map(|(id, _)| id)
    }

    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.nodes().collect(),
            edges: self.edges().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> GraphModel {
        let mut graph = GraphModel::new();
        let a = graph.add_node(Point::new(0.0, 0.0));
        let b = graph.add_node(Point::new(0.3, 0.0));
        let c = graph.add_node(Point::new(0.0, 0.4));
        graph.add_edge(a, b, 0.3).unwrap();
        graph.add_edge(b, c, 0.5).unwrap();
        graph
    }

    #[test]
    fn ids_are_sequential_and_labels_follow() {
        let graph = triangle();
        let labels: Vec<String> = graph.nodes().map(|n| n.label).collect();
        assert_eq!(labels, vec!["A", "B", "C"]);
        let ids: Vec<usize> = graph.nodes().map(|n| n.id.index()).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn edges_keep_insertion_order_and_orientation() {
        let graph = triangle();
        let edges: Vec<Edge> = graph.edges().collect();
        assert_eq!(
            edges,
            vec![
                Edge { a: NodeId(0), b: NodeId(1), weight: 0.3 },
                Edge { a: NodeId(1), b: NodeId(2), weight: 0.5 },
            ]
        );
    }

    #[test]
    fn neighbors_of_unknown_node_is_invalid_reference() {
        let graph = triangle();
        assert_eq!(
            graph.neighbors(NodeId(3)),
            Err(GraphError::InvalidReference { id: NodeId(3), node_count: 3 })
        );
    }

    #[test]
    fn add_edge_with_unknown_endpoint_leaves_graph_unchanged() {
        let mut graph = triangle();
        let before = graph.snapshot();
        assert!(graph.add_edge(NodeId(0), NodeId(9), 1.0).is_err());
        assert_eq!(graph.snapshot(), before);
    }

    #[test]
    fn negative_and_nan_weights_are_rejected() {
        let mut graph = triangle();
        assert_eq!(
            graph.add_edge(NodeId(0), NodeId(2), -1.0),
            Err(GraphError::InvalidWeight { weight: -1.0 })
        );
        assert!(graph.add_edge(NodeId(0), NodeId(2), f32::NAN).is_err());
        assert!(graph.add_edge(NodeId(0), NodeId(2), f32::INFINITY).is_err());
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn zero_weight_is_accepted() {
        let mut graph = triangle();
        assert!(graph.add_edge(NodeId(0), NodeId(2), 0.0).is_ok());
    }

    #[test]
    fn parallel_edges_follow_policy() {
        let mut permissive = triangle();
        permissive.add_edge(NodeId(1), NodeId(0), 0.9).unwrap();
        assert_eq!(permissive.edge_count(), 3);
        assert_eq!(permissive.neighbors(NodeId(0)).unwrap().len(), 2);

        let mut strict = GraphModel::with_policy(EdgePolicy::RejectParallel);
        let a = strict.add_node(Point::new(0.0, 0.0));
        let b = strict.add_node(Point::new(1.0, 0.0));
        strict.add_edge(a, b, 1.0).unwrap();
        assert_eq!(
            strict.add_edge(b, a, 1.0),
            Err(GraphError::ParallelEdge { a: b, b: a })
        );
        assert_eq!(strict.edge_count(), 1);
    }

    #[test]
    fn distance_uses_positions() {
        let graph = triangle();
        let d = graph.distance(NodeId(1), NodeId(2)).unwrap();
        assert!((d - 0.5).abs() < 1e-6);
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(NodeId(2).to_string(), "C");
        let err = GraphError::SelfLoop { node: NodeId(0) };
        assert_eq!(err.to_string(), "cannot connect node A to itself");
    }
}
