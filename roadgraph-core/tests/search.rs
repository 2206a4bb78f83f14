use hashbrown::HashSet;
use rand::{Rng, SeedableRng, rngs::StdRng};
use roadgraph_core::prelude::*;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn p(x: f64, y: f64) -> PlanarPoint {
    PlanarPoint::new(x, y).unwrap()
}

const EPS: f64 = 1e-9;

/// A -> B (1) -> C (2) -> D (3)
fn chain() -> (RoadGraph<PlanarPoint>, [PlanarPoint; 4]) {
    let nodes = [p(0.0, 0.0), p(1.0, 0.0), p(3.0, 0.0), p(6.0, 0.0)];
    let [a, b, c, d] = nodes;
    let mut graph = RoadGraph::new();
    for node in nodes {
        assert!(graph.add_vertex(node));
    }
    graph.add_edge(a, b, "First", "residential", 1.0).unwrap();
    graph.add_edge(b, c, "Second", "residential", 2.0).unwrap();
    graph.add_edge(c, d, "Third", "residential", 3.0).unwrap();
    (graph, nodes)
}

#[test]
fn chain_scenario() {
    init_logger();
    let (mut graph, [a, b, c, d]) = chain();

    let bfs = graph.bfs(&a, &d).unwrap().unwrap();
    assert_eq!(bfs.path(), [a, b, c, d]);
    assert_eq!(bfs.hops(), 3);

    let dijkstra = graph.dijkstra(&a, &d).unwrap().unwrap();
    assert_eq!(dijkstra.path(), [a, b, c, d]);
    assert!((dijkstra.cost() - 6.0).abs() < EPS);

    graph.add_edge(a, d, "Direct", "primary", 4.0).unwrap();

    let dijkstra = graph.dijkstra(&a, &d).unwrap().unwrap();
    assert_eq!(dijkstra.path(), [a, d]);
    assert!((dijkstra.cost() - 4.0).abs() < EPS);

    // Fewest hops now also means the direct road
    let bfs = graph.bfs(&a, &d).unwrap().unwrap();
    assert_eq!(bfs.hops(), 1);
}

#[test]
fn bfs_ignores_weights() {
    init_logger();
    let (mut graph, [a, b, c, d]) = chain();
    let detour = p(3.0, 5.0);
    graph.add_vertex(detour);
    // Two hops to D through the detour, heavier than the chain
    graph.add_edge(a, detour, "Detour", "track", 50.0).unwrap();
    graph.add_edge(detour, d, "Detour", "track", 50.0).unwrap();

    let bfs = graph.bfs(&a, &d).unwrap().unwrap();
    assert_eq!(bfs.path(), [a, detour, d]);

    let dijkstra = graph.dijkstra(&a, &d).unwrap().unwrap();
    assert_eq!(dijkstra.path(), [a, b, c, d]);
}

#[test]
fn start_equals_goal() {
    init_logger();
    let (graph, [a, ..]) = chain();
    for algorithm in [
        SearchAlgorithm::BreadthFirst,
        SearchAlgorithm::Dijkstra,
        SearchAlgorithm::AStar,
    ] {
        let route = algorithm
            .run(&graph, &a, &a, &SearchConfig::default(), &mut |_: &PlanarPoint| {})
            .unwrap()
            .unwrap();
        assert_eq!(route.path(), [a]);
        assert_eq!(route.cost(), 0.0);
        assert_eq!(route.nodes_visited(), 1);
    }
}

#[test]
fn disconnected_goal_is_not_an_error() {
    init_logger();
    let (mut graph, [a, ..]) = chain();
    let island = p(100.0, 100.0);
    graph.add_vertex(island);

    assert_eq!(graph.bfs(&a, &island), Ok(None));
    assert_eq!(graph.dijkstra(&a, &island), Ok(None));
    assert_eq!(graph.astar(&a, &island), Ok(None));
}

#[test]
fn missing_endpoints_are_errors() {
    init_logger();
    let (graph, [a, ..]) = chain();
    let nowhere = p(-1.0, -1.0);

    assert!(matches!(graph.bfs(&nowhere, &a), Err(Error::UnknownStart(_))));
    assert!(matches!(graph.dijkstra(&a, &nowhere), Err(Error::UnknownGoal(_))));
    assert!(matches!(graph.astar(&nowhere, &nowhere), Err(Error::UnknownStart(_))));
}

#[test]
fn earlier_searches_do_not_leak_state() {
    init_logger();
    let (graph, [a, _, c, d]) = chain();

    let first = graph.dijkstra(&a, &d).unwrap().unwrap();
    let partial = graph.dijkstra(&a, &c).unwrap().unwrap();
    let astar = graph.astar(&a, &d).unwrap().unwrap();
    let again = graph.dijkstra(&a, &d).unwrap().unwrap();

    assert!((partial.cost() - 3.0).abs() < EPS);
    assert!((astar.cost() - first.cost()).abs() < EPS);
    assert_eq!(first, again);
}

#[test]
fn observer_sees_start_first_and_goal_last() {
    init_logger();
    let (graph, [a, _, _, d]) = chain();
    let mut visits = Vec::new();
    let route = graph
        .astar_with(&a, &d, &SearchConfig::default(), &mut |loc: &PlanarPoint| {
            visits.push(*loc)
        })
        .unwrap()
        .unwrap();

    assert_eq!(visits.first(), Some(&a));
    assert_eq!(visits.last(), Some(&d));
    assert_eq!(visits.len(), route.nodes_visited());
}

#[test]
fn geographic_graph_astar_matches_dijkstra() {
    init_logger();
    // Small downtown block; road lengths are the great-circle distances
    let points = [
        (32.869423, -117.220917),
        (32.869255, -117.216927),
        (32.868629, -117.215393),
        (32.868170, -117.219192),
        (32.866137, -117.217690),
        (32.867522, -117.213950),
    ]
    .map(|(lat, lon)| GeoPoint::new(lat, lon).unwrap());

    let mut graph = RoadGraph::new();
    for point in points {
        graph.add_vertex(point);
    }
    let roads = [(0, 1), (1, 2), (0, 3), (3, 4), (4, 5), (2, 5), (3, 2)];
    for (i, j) in roads {
        let length = points[i].distance_to(&points[j]);
        graph
            .add_two_way_road(points[i], points[j], "Voigt Dr", "residential", length)
            .unwrap();
    }

    let dijkstra = graph.dijkstra(&points[0], &points[5]).unwrap().unwrap();
    let astar = graph.astar(&points[0], &points[5]).unwrap().unwrap();
    assert!((dijkstra.cost() - astar.cost()).abs() < EPS);
    assert!(astar.nodes_visited() <= dijkstra.nodes_visited());
}

#[test]
fn route_serializes_to_json() {
    let (graph, [a, b, ..]) = chain();
    let route = graph.dijkstra(&a, &b).unwrap().unwrap();
    let json = serde_json::to_value(&route).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "path": [[0.0, 0.0], [1.0, 0.0]],
            "cost": 1.0,
            "nodes_visited": 2
        })
    );
}

// Randomized checks against brute-force oracles

struct RandomNetwork {
    graph: RoadGraph<PlanarPoint>,
    points: Vec<PlanarPoint>,
    /// Cheapest direct segment length, `INFINITY` when absent
    weights: Vec<Vec<f64>>,
}

fn random_network(seed: u64, nodes: usize, edges: usize) -> RandomNetwork {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = RoadGraph::new();
    let mut points = Vec::with_capacity(nodes);
    while points.len() < nodes {
        let point = p(rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0));
        if graph.add_vertex(point) {
            points.push(point);
        }
    }

    let mut weights = vec![vec![f64::INFINITY; nodes]; nodes];
    for _ in 0..edges {
        let (i, j) = (rng.gen_range(0..nodes), rng.gen_range(0..nodes));
        // Never shorter than the straight line, so A* stays admissible
        let length = points[i].distance_to(&points[j]) * rng.gen_range(1.0..1.5);
        graph
            .add_edge(points[i], points[j], "Random", "unclassified", length)
            .unwrap();
        weights[i][j] = weights[i][j].min(length);
    }

    RandomNetwork {
        graph,
        points,
        weights,
    }
}

fn all_pairs_costs(weights: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let n = weights.len();
    let mut dist = weights.to_vec();
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = 0.0;
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let through = dist[i][k] + dist[k][j];
                if through < dist[i][j] {
                    dist[i][j] = through;
                }
            }
        }
    }
    dist
}

fn all_pairs_hops(weights: &[Vec<f64>]) -> Vec<Vec<Option<usize>>> {
    let n = weights.len();
    (0..n)
        .map(|start| {
            let mut hops = vec![None; n];
            hops[start] = Some(0);
            let mut frontier = vec![start];
            let mut depth = 0;
            while !frontier.is_empty() {
                depth += 1;
                let mut next = Vec::new();
                for &i in &frontier {
                    for j in 0..n {
                        if weights[i][j].is_finite() && hops[j].is_none() {
                            hops[j] = Some(depth);
                            next.push(j);
                        }
                    }
                }
                frontier = next;
            }
            hops
        })
        .collect()
}

fn assert_valid_path(network: &RandomNetwork, route: &Route<PlanarPoint>, start: usize, goal: usize) {
    let path = route.path();
    assert_eq!(path.first(), Some(&network.points[start]));
    assert_eq!(path.last(), Some(&network.points[goal]));

    let unique: HashSet<_> = path.iter().collect();
    assert_eq!(unique.len(), path.len(), "path revisits a node");

    for pair in path.windows(2) {
        let neighbors = network.graph.neighbors(&pair[0]).unwrap();
        assert!(neighbors.contains(&pair[1]), "no road {} -> {}", pair[0], pair[1]);
    }
}

#[test]
fn searches_agree_with_oracles_on_random_networks() {
    init_logger();
    for seed in 0..20 {
        let network = random_network(seed, 30, 90);
        let costs = all_pairs_costs(&network.weights);
        let hops = all_pairs_hops(&network.weights);

        for start in 0..network.points.len() {
            for goal in (0..network.points.len()).step_by(7) {
                let (s, g) = (&network.points[start], &network.points[goal]);
                let bfs = network.graph.bfs(s, g).unwrap();
                let dijkstra = network.graph.dijkstra(s, g).unwrap();
                let astar = network.graph.astar(s, g).unwrap();

                match hops[start][goal] {
                    None => {
                        assert!(bfs.is_none() && dijkstra.is_none() && astar.is_none());
                    }
                    Some(expected_hops) => {
                        let (bfs, dijkstra, astar) = (bfs.unwrap(), dijkstra.unwrap(), astar.unwrap());
                        for route in [&bfs, &dijkstra, &astar] {
                            assert_valid_path(&network, route, start, goal);
                        }

                        assert_eq!(bfs.hops(), expected_hops, "seed {seed}");

                        let optimal = costs[start][goal];
                        let tolerance = 1e-6 * optimal.max(1.0);
                        assert!((dijkstra.cost() - optimal).abs() < tolerance, "seed {seed}");
                        assert!((astar.cost() - optimal).abs() < tolerance, "seed {seed}");
                        assert!(astar.nodes_visited() <= dijkstra.nodes_visited(), "seed {seed}");
                    }
                }
            }
        }
    }
}

#[test]
fn unit_weights_make_dijkstra_match_bfs() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(7);
    let mut graph = RoadGraph::new();
    let points: Vec<_> = (0..25).map(|i| p(f64::from(i), 0.0)).collect();
    for &point in &points {
        graph.add_vertex(point);
    }
    for _ in 0..60 {
        let (i, j) = (rng.gen_range(0..25), rng.gen_range(0..25));
        graph.add_edge(points[i], points[j], "Link", "service", 1.0).unwrap();
    }

    for &goal in &points {
        let bfs = graph.bfs(&points[0], &goal).unwrap();
        let dijkstra = graph.dijkstra(&points[0], &goal).unwrap();
        assert_eq!(
            bfs.map(|r| r.hops()),
            dijkstra.map(|r| r.hops()),
            "goal {goal}"
        );
    }
}

#[test]
fn parallel_batch_matches_sequential() {
    init_logger();
    let network = random_network(42, 40, 160);
    let queries: Vec<_> = (0..network.points.len())
        .map(|i| (network.points[i], network.points[(i * 13 + 5) % network.points.len()]))
        .collect();

    let batch = route_many(
        &network.graph,
        &queries,
        SearchAlgorithm::AStar,
        &SearchConfig::default(),
    );
    for ((start, goal), result) in queries.iter().zip(batch) {
        assert_eq!(result, network.graph.astar(start, goal));
    }
}
