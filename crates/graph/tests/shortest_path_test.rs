use rand::{rngs::StdRng, Rng, SeedableRng};
use waypoint_graph::{
    shortest_path, Edge, EdgeId, GraphError, GraphErrorKind, GraphModel, NodeId, PathFinder, Point,
    ShortestPath,
};

/// Seeded so failures reproduce.
fn random_graph(rng: &mut StdRng, nodes: usize, edges: usize) -> GraphModel {
    let mut graph = GraphModel::new();
    for _ in 0..nodes {
        let x = rng.random_range(-1.0f32..1.0);
        let y = rng.random_range(-1.0f32..1.0);
        graph.add_node(Point::new(x, y));
    }
    for _ in 0..edges {
        let a = NodeId(rng.random_range(0..nodes));
        let b = NodeId(rng.random_range(0..nodes));
        if a == b {
            continue;
        }
        // integer weights keep float sums exact
        let weight = rng.random_range(0..10u32) as f32;
        graph.add_edge(a, b, weight).unwrap();
    }
    graph
}

/// Cheapest edge between two nodes, if any.
fn edge_weight(graph: &GraphModel, a: NodeId, b: NodeId) -> Option<f32> {
    graph
        .neighbors(a)
        .unwrap()
        .into_iter()
        .filter(|(n, _)| *n == b)
        .map(|(_, w)| w)
        .reduce(f32::min)
}

/// Minimum total weight over all simple paths, by exhaustive search.
fn brute_force(graph: &GraphModel, origin: NodeId, destination: NodeId) -> Option<f32> {
    fn walk(
        graph: &GraphModel,
        current: NodeId,
        destination: NodeId,
        visited: &mut Vec<bool>,
        cost: f32,
        best: &mut Option<f32>,
    ) {
        if current == destination {
            *best = Some(best.map_or(cost, |b| b.min(cost)));
            return;
        }
        for (next, weight) in graph.neighbors(current).unwrap() {
            if visited[next.index()] {
                continue;
            }
            visited[next.index()] = true;
            walk(graph, next, destination, visited, cost + weight, best);
            visited[next.index()] = false;
        }
    }

    let mut visited = vec![false; graph.node_count()];
    visited[origin.index()] = true;
    let mut best = None;
    walk(graph, origin, destination, &mut visited, 0.0, &mut best);
    best
}

fn path_weight(graph: &GraphModel, path: &ShortestPath) -> f32 {
    path.nodes()
        .windows(2)
        .map(|pair| edge_weight(graph, pair[0], pair[1]).expect("consecutive path nodes must be adjacent"))
        .sum()
}

/// Total of the edges the path reports taking, checked against its nodes.
fn chosen_edge_weight(graph: &GraphModel, path: &ShortestPath) -> f32 {
    let edges: Vec<Edge> = graph.edges().collect();
    assert_eq!(path.edges().len(), path.len().saturating_sub(1));
    path.edges()
        .iter()
        .zip(path.nodes().windows(2))
        .map(|(id, pair)| {
            let edge = edges[id.index()];
            assert!(edge.connects(pair[0], pair[1]), "{id:?} does not join {} and {}", pair[0], pair[1]);
            edge.weight
        })
        .sum()
}

#[test]
fn matches_brute_force_on_small_graphs() {
    let mut rng = StdRng::seed_from_u64(7);
    for round in 0..200 {
        let nodes = 2 + (round % 7);
        let edges = rng.random_range(0..14);
        let graph = random_graph(&mut rng, nodes, edges);

        for o in 0..nodes {
            for d in 0..nodes {
                let (origin, destination) = (NodeId(o), NodeId(d));
                let path = shortest_path(&graph, origin, destination).unwrap();
                let expected = brute_force(&graph, origin, destination);

                match expected {
                    None => assert!(path.is_empty(), "round {round}: {origin}->{destination} should be unreachable"),
                    Some(best) => {
                        assert_eq!(path.origin(), Some(origin));
                        assert_eq!(path.destination(), Some(destination));
                        assert_eq!(path.total_weight(), Some(best), "round {round}: {origin}->{destination}");
                        assert_eq!(path_weight(&graph, &path), best);
                        assert_eq!(chosen_edge_weight(&graph, &path), best);
                    }
                }
            }
        }
    }
}

#[test]
fn square_with_diagonal() {
    let mut graph = GraphModel::new();
    let a = graph.add_node(Point::new(0.0, 0.0));
    let b = graph.add_node(Point::new(1.0, 0.0));
    let c = graph.add_node(Point::new(1.0, 1.0));
    let d = graph.add_node(Point::new(0.0, 1.0));
    graph.add_edge(a, b, 1.0).unwrap();
    graph.add_edge(b, c, 1.0).unwrap();
    graph.add_edge(c, d, 1.0).unwrap();
    graph.add_edge(a, d, 1.0).unwrap();
    graph.add_edge(a, c, 1.5).unwrap();

    let path = shortest_path(&graph, a, c).unwrap();
    assert_eq!(path.nodes(), &[a, c]);
    assert_eq!(path.total_weight(), Some(1.5));
}

#[test]
fn every_node_reaches_itself() {
    let mut rng = StdRng::seed_from_u64(11);
    let graph = random_graph(&mut rng, 8, 10);
    for i in 0..8 {
        let path = shortest_path(&graph, NodeId(i), NodeId(i)).unwrap();
        assert_eq!(path.nodes(), &[NodeId(i)]);
    }
}

#[test]
fn disjoint_components_have_no_path() {
    let mut graph = GraphModel::new();
    let a = graph.add_node(Point::new(-0.5, 0.0));
    let b = graph.add_node(Point::new(-0.4, 0.0));
    let c = graph.add_node(Point::new(0.4, 0.0));
    let d = graph.add_node(Point::new(0.5, 0.0));
    graph.add_edge(a, b, 0.1).unwrap();
    graph.add_edge(c, d, 0.1).unwrap();

    assert!(shortest_path(&graph, a, d).unwrap().is_empty());
    assert!(shortest_path(&graph, c, b).unwrap().is_empty());
}

#[test]
fn single_node_graph() {
    let mut graph = GraphModel::new();
    let a = graph.add_node(Point::new(0.0, 0.0));

    assert_eq!(shortest_path(&graph, a, a).unwrap().nodes(), &[a]);

    let err = shortest_path(&graph, a, NodeId(1)).unwrap_err();
    assert_eq!(err, GraphError::InvalidReference { id: NodeId(1), node_count: 1 });
    assert_eq!(err.kind(), GraphErrorKind::InvalidReference);
    assert!(shortest_path(&graph, NodeId(4), a).is_err());
}

#[test]
fn equal_cost_routes_resolve_identically_across_runs() {
    // two routes of cost 2 between A and D
    let build = || {
        let mut graph = GraphModel::new();
        let a = graph.add_node(Point::new(0.0, 0.0));
        let b = graph.add_node(Point::new(0.5, 0.5));
        let c = graph.add_node(Point::new(0.5, -0.5));
        let d = graph.add_node(Point::new(1.0, 0.0));
        graph.add_edge(a, b, 1.0).unwrap();
        graph.add_edge(a, c, 1.0).unwrap();
        graph.add_edge(b, d, 1.0).unwrap();
        graph.add_edge(c, d, 1.0).unwrap();
        graph
    };

    let first = build();
    let second = build();
    let reference = shortest_path(&first, NodeId(0), NodeId(3)).unwrap();
    assert_eq!(reference.total_weight(), Some(2.0));
    for _ in 0..10 {
        assert_eq!(shortest_path(&first, NodeId(0), NodeId(3)).unwrap(), reference);
        assert_eq!(shortest_path(&second, NodeId(0), NodeId(3)).unwrap(), reference);
    }
}

#[test]
fn parallel_edges_use_the_cheaper_one() {
    let mut graph = GraphModel::new();
    let a = graph.add_node(Point::new(0.0, 0.0));
    let b = graph.add_node(Point::new(1.0, 0.0));
    graph.add_edge(a, b, 5.0).unwrap();
    graph.add_edge(b, a, 2.0).unwrap();

    let path = shortest_path(&graph, a, b).unwrap();
    assert_eq!(path.total_weight(), Some(2.0));
    assert_eq!(path.edges(), &[EdgeId(1)]);
    assert!(!path.uses_edge(EdgeId(0)));
}

#[test]
fn zero_weight_edges_are_followed() {
    let mut graph = GraphModel::new();
    let a = graph.add_node(Point::new(0.0, 0.0));
    let b = graph.add_node(Point::new(0.0, 0.0));
    let c = graph.add_node(Point::new(1.0, 0.0));
    graph.add_edge(a, b, 0.0).unwrap();
    graph.add_edge(b, c, 1.0).unwrap();
    graph.add_edge(a, c, 1.5).unwrap();

    let path = PathFinder::new(&graph).shortest_path(a, c).unwrap();
    assert_eq!(path.nodes(), &[a, b, c]);
}
