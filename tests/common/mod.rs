use kruskal::{UndirectedGraph, WeightedEdge};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use std::collections::VecDeque;

pub fn rng(seed: u64) -> Pcg64 {
    Pcg64::seed_from_u64(seed)
}

/// A random connected graph: a random spanning tree plus `n_extra_edges` random edges, which may
/// run parallel to existing ones. Weights are drawn from `1..=max_weight`.
pub fn random_connected_graph(
    rng: &mut Pcg64,
    n_vertices: usize,
    n_extra_edges: usize,
    max_weight: u64,
) -> UndirectedGraph<u64> {
    let mut edges = Vec::new();
    for v in 1..n_vertices {
        let u = rng.gen_range(0..v);
        edges.push(WeightedEdge::new(u, v, rng.gen_range(1..=max_weight)));
    }
    if n_vertices > 1 {
        for _ in 0..n_extra_edges {
            let (u, v) = random_vertex_pair(rng, n_vertices);
            edges.push(WeightedEdge::new(u, v, rng.gen_range(1..=max_weight)));
        }
    }
    edges.shuffle(rng);
    UndirectedGraph::new(n_vertices, edges).unwrap()
}

/// As `random_connected_graph`, but every edge has a distinct weight.
pub fn random_connected_graph_distinct_weights(
    rng: &mut Pcg64,
    n_vertices: usize,
    n_extra_edges: usize,
) -> UndirectedGraph<u64> {
    let graph = random_connected_graph(rng, n_vertices, n_extra_edges, 1);
    let mut weights: Vec<u64> = (1..=graph.n_edges() as u64).collect();
    weights.shuffle(rng);
    let edges = graph
        .edges()
        .iter()
        .zip(weights)
        .map(|(edge, weight)| WeightedEdge::new(edge.first_vertex(), edge.second_vertex(), weight))
        .collect();
    UndirectedGraph::new(n_vertices, edges).unwrap()
}

fn random_vertex_pair(rng: &mut Pcg64, n_vertices: usize) -> (usize, usize) {
    loop {
        let u = rng.gen_range(0..n_vertices);
        let v = rng.gen_range(0..n_vertices);
        if u != v {
            return (u, v);
        }
    }
}

/// Total weight of a minimum spanning tree found with Prim's algorithm on a dense cost matrix,
/// or `None` if the graph is disconnected.
pub fn prims_total_weight(graph: &UndirectedGraph<u64>) -> Option<u64> {
    let n = graph.size();
    let mut costs = vec![vec![u64::MAX; n]; n];
    for edge in graph.edges() {
        let (u, v) = edge.vertices();
        let cost = costs[u][v].min(edge.weight());
        costs[u][v] = cost;
        costs[v][u] = cost;
    }

    let mut in_tree = vec![false; n];
    let mut distances = vec![u64::MAX; n];
    distances[0] = 0;
    let mut total = 0;

    for _ in 0..n {
        let next = (0..n)
            .filter(|&v| !in_tree[v])
            .min_by_key(|&v| distances[v])?;
        if distances[next] == u64::MAX {
            return None;
        }
        in_tree[next] = true;
        total += distances[next];
        for v in 0..n {
            if !in_tree[v] && costs[next][v] < distances[v] {
                distances[v] = costs[next][v];
            }
        }
    }
    Some(total)
}

/// Whether the graph is a tree: exactly `n - 1` edges, and every vertex reachable from vertex 0.
pub fn is_spanning_tree<W: Copy + PartialOrd>(graph: &UndirectedGraph<W>) -> bool {
    let n = graph.size();
    if graph.n_edges() + 1 != n {
        return false;
    }
    let adjacency = graph.adjacency_list();
    let mut visited = vec![false; n];
    let mut process_queue = VecDeque::from([0]);
    visited[0] = true;
    while let Some(vertex) = process_queue.pop_front() {
        for &neighbour in &adjacency[vertex] {
            if !visited[neighbour] {
                visited[neighbour] = true;
                process_queue.push_back(neighbour);
            }
        }
    }
    visited.into_iter().all(|v| v)
}
