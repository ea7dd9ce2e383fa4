use crate::validation::{validate_cost_matrix, GraphValidator};
use crate::{KruskalError, WeightedEdge};
use num_traits::Zero;

/// A read-only, undirected, weighted graph. Vertices are identified by dense indices in
/// `0..size()`.
#[derive(Debug, Clone, PartialEq)]
pub struct UndirectedGraph<W> {
    n_vertices: usize,
    edges: Vec<WeightedEdge<W>>,
}

impl<W: Copy + PartialOrd> UndirectedGraph<W> {
    /// Creates a graph with an explicit number of vertices.
    ///
    /// # Parameters
    /// * `n_vertices` - the number of vertices. Must be at least 1.
    /// * `edges` - the edges of the graph. Every endpoint must be lower than `n_vertices`, no edge
    ///             may join a vertex to itself and every weight must be orderable (i.e. not NaN).
    ///             Only each weight's comparison with itself is checked, so `W` must be totally
    ///             ordered over the values used.
    ///
    /// # Returns
    /// * A result that, if successful, contains the graph.
    ///
    /// # Examples
    /// ```
    ///use kruskal::{UndirectedGraph, WeightedEdge};
    ///
    ///let graph = UndirectedGraph::new(3, vec![
    ///    WeightedEdge::new(0, 1, 4),
    ///    WeightedEdge::new(1, 2, 2),
    ///]).unwrap();
    ///assert_eq!(3, graph.size());
    ///assert_eq!(2, graph.n_edges());
    /// ```
    pub fn new(n_vertices: usize, edges: Vec<WeightedEdge<W>>) -> Result<Self, KruskalError> {
        GraphValidator::new(n_vertices, &edges).validate()?;
        Ok(Self::from_validated(n_vertices, edges))
    }

    /// Creates a graph whose vertex count is implied by the highest vertex index referenced by
    /// any edge. A graph with isolated trailing vertices must be built with `UndirectedGraph::new`.
    ///
    /// # Examples
    /// ```
    ///use kruskal::{UndirectedGraph, WeightedEdge};
    ///
    ///let graph = UndirectedGraph::from_edges(vec![WeightedEdge::new(4, 2, 1.5)]).unwrap();
    ///assert_eq!(5, graph.size());
    /// ```
    pub fn from_edges(edges: Vec<WeightedEdge<W>>) -> Result<Self, KruskalError> {
        let n_vertices = edges
            .iter()
            .map(|edge| edge.vertices().1 + 1)
            .max()
            .unwrap_or(0);
        Self::new(n_vertices, edges)
    }

    /// Creates the complete graph described by a square, symmetrical cost matrix. One edge is
    /// added per pair of vertices `i < j`, weighted `matrix[i][j]`. The diagonal is ignored.
    ///
    /// # Examples
    /// ```
    ///use kruskal::UndirectedGraph;
    ///
    ///let costs = vec![
    ///    vec![0, 3, 1],
    ///    vec![3, 0, 2],
    ///    vec![1, 2, 0],
    ///];
    ///let graph = UndirectedGraph::from_matrix(&costs).unwrap();
    ///assert_eq!(3, graph.size());
    ///assert_eq!(3, graph.n_edges());
    /// ```
    pub fn from_matrix(matrix: &[Vec<W>]) -> Result<Self, KruskalError> {
        validate_cost_matrix(matrix)?;
        let n_vertices = matrix.len();
        let edges = (0..n_vertices)
            .flat_map(|i| ((i + 1)..n_vertices).map(move |j| (i, j)))
            .map(|(i, j)| WeightedEdge::new(i, j, matrix[i][j]))
            .collect();
        Self::new(n_vertices, edges)
    }

    pub(crate) fn from_validated(n_vertices: usize, edges: Vec<WeightedEdge<W>>) -> Self {
        UndirectedGraph { n_vertices, edges }
    }

    /// The number of vertices.
    pub fn size(&self) -> usize {
        self.n_vertices
    }

    pub fn n_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[WeightedEdge<W>] {
        &self.edges
    }

    /// An owned copy of the edge list, in the order the edges were supplied.
    pub fn get_edges(&self) -> Vec<WeightedEdge<W>> {
        self.edges.clone()
    }

    /// The neighbours of every vertex, indexed by vertex. Neighbours appear in edge order, once
    /// per edge, so parallel edges yield repeated neighbours.
    pub fn adjacency_list(&self) -> Vec<Vec<usize>> {
        let mut adjacency = vec![Vec::new(); self.n_vertices];
        for edge in &self.edges {
            adjacency[edge.first_vertex()].push(edge.second_vertex());
            adjacency[edge.second_vertex()].push(edge.first_vertex());
        }
        adjacency
    }
}

impl<W: Copy + PartialOrd + Zero> UndirectedGraph<W> {
    /// The sum of all edge weights.
    pub fn total_weight(&self) -> W {
        self.edges
            .iter()
            .map(|edge| edge.weight())
            .fold(W::zero(), std::ops::Add::add)
    }
}
