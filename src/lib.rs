//! Minimum spanning trees of weighted, undirected, connected graphs, using Kruskal's algorithm.
//! Generic over any weight type that can be copied and compared.
//!
//! Given a graph over the vertices `0..n`, the minimum spanning tree is the subset of `n - 1`
//! edges that connects every vertex without forming a cycle, with the smallest possible total
//! weight. It is a common building block for clustering and for lower bounds on routing costs.
//!
//! Kruskal's algorithm works as follows:
//!  1. The edges are sorted by ascending weight;
//!  2. Each edge is considered in turn, and selected only if its endpoints are not yet connected
//!     by previously selected edges. Connectivity is tracked with a disjoint-set forest using
//!     path compression and union by rank, so each check takes near constant amortised time; and
//!  3. If fewer than `n - 1` edges could be selected, the graph is disconnected and an error is
//!     returned rather than a partial spanning forest.
//!
//! When several edges share a weight, more than one minimum spanning tree may exist. Every one
//! of them has the same total weight; `TieBreak` controls which one is returned.
//!
//! # Examples
//! ```
//!use kruskal::{minimum_spanning_tree, UndirectedGraph, WeightedEdge};
//!
//!let graph = UndirectedGraph::new(4, vec![
//!    WeightedEdge::new(0, 1, 1),
//!    WeightedEdge::new(1, 2, 2),
//!    WeightedEdge::new(2, 3, 3),
//!    WeightedEdge::new(0, 3, 4),
//!    WeightedEdge::new(0, 2, 5),
//!]).unwrap();
//!let mst = minimum_spanning_tree(&graph).unwrap();
//!assert_eq!(3, mst.n_edges());
//!assert_eq!(6, mst.total_weight());
//! ```
//!
//! # References
//! * [Kruskal, J.B. On the shortest spanning subtree of a graph and the traveling salesman problem.](https://doi.org/10.1090/S0002-9939-1956-0078686-7)
//! * [Tarjan, R.E. Efficiency of a Good But Not Linear Set Union Algorithm.](https://doi.org/10.1145/321879.321884)

pub use crate::disjoint_set::DisjointSetForest;
pub use crate::edge::WeightedEdge;
pub use crate::error::KruskalError;
pub use crate::graph::UndirectedGraph;
pub use crate::kruskal::Kruskal;
pub use crate::params::{KruskalParams, KruskalParamsBuilder, TieBreak};

mod disjoint_set;
mod edge;
mod error;
mod graph;
mod kruskal;
mod params;
mod validation;

/// Builds the minimum spanning tree of a connected graph using the default parameters.
///
/// # Parameters
/// * `graph` - a reference to the graph to span. Its weights must be totally ordered: any two of
///             them must compare as less, equal or greater. Integers and non-NaN floats qualify.
///
/// # Returns
/// * A result that, if successful, contains a new graph over the same vertices holding exactly
///   the `n - 1` selected edges. `KruskalError::DisconnectedGraph` is returned if some vertices
///   cannot be reached from the others.
///
/// # Examples
/// ```
///use kruskal::{minimum_spanning_tree, UndirectedGraph};
///
///let costs = vec![
///    vec![0.0, 2.0, 9.0],
///    vec![2.0, 0.0, 4.0],
///    vec![9.0, 4.0, 0.0],
///];
///let graph = UndirectedGraph::from_matrix(&costs).unwrap();
///let mst = minimum_spanning_tree(&graph).unwrap();
///assert_eq!(6.0, mst.total_weight());
/// ```
pub fn minimum_spanning_tree<W: Copy + PartialOrd>(
    graph: &UndirectedGraph<W>,
) -> Result<UndirectedGraph<W>, KruskalError> {
    Kruskal::default_params(graph).build()
}
