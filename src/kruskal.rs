use crate::{
    DisjointSetForest, KruskalError, KruskalParams, TieBreak, UndirectedGraph, WeightedEdge,
};
use log::{debug, warn};
use std::cmp::Ordering;

/// Kruskal's minimum spanning tree algorithm. Generic over any weight type that can be copied and
/// compared; no arithmetic is performed on the weights.
#[derive(Debug, Clone, PartialEq)]
pub struct Kruskal<'a, W> {
    graph: &'a UndirectedGraph<W>,
    params: KruskalParams,
}

impl<'a, W: Copy + PartialOrd> Kruskal<'a, W> {
    /// Creates an instance of the minimum spanning tree builder using a custom parameter
    /// configuration.
    ///
    /// # Parameters
    /// * `graph` - a reference to the graph to span. It is only read, never modified.
    /// * `params` - the parameter configuration.
    ///
    /// # Returns
    /// * The builder instance.
    ///
    /// # Examples
    /// ```
    ///use kruskal::{Kruskal, KruskalParams, TieBreak, UndirectedGraph, WeightedEdge};
    ///
    ///let graph = UndirectedGraph::new(3, vec![
    ///    WeightedEdge::new(0, 1, 5),
    ///    WeightedEdge::new(1, 2, 5),
    ///    WeightedEdge::new(2, 0, 5),
    ///]).unwrap();
    ///let params = KruskalParams::builder()
    ///    .tie_break(TieBreak::VertexPair)
    ///    .build();
    ///let mst = Kruskal::new(&graph, params).build().unwrap();
    ///assert_eq!(&[WeightedEdge::new(0, 1, 5), WeightedEdge::new(2, 0, 5)], mst.edges());
    /// ```
    pub fn new(graph: &'a UndirectedGraph<W>, params: KruskalParams) -> Self {
        Kruskal { graph, params }
    }

    /// Creates an instance of the minimum spanning tree builder using the default parameters.
    ///
    /// # Parameters
    /// * `graph` - a reference to the graph to span.
    ///
    /// # Returns
    /// * The builder instance.
    pub fn default_params(graph: &'a UndirectedGraph<W>) -> Self {
        Kruskal::new(graph, KruskalParams::default())
    }

    /// Builds the minimum spanning tree of the graph passed to the constructor.
    ///
    /// # Returns
    /// * A result that, if successful, contains a new graph over the same vertices holding exactly
    ///   `n - 1` edges of minimal total weight. An error is returned if the graph is not
    ///   connected, as no spanning tree exists in that case.
    ///
    /// # Examples
    /// ```
    ///use kruskal::{Kruskal, KruskalError, UndirectedGraph, WeightedEdge};
    ///
    ///let graph = UndirectedGraph::new(3, vec![WeightedEdge::new(0, 1, 1.0)]).unwrap();
    ///let result = Kruskal::default_params(&graph).build();
    ///assert_eq!(
    ///    Err(KruskalError::DisconnectedGraph { n_vertices: 3, n_components: 2 }),
    ///    result,
    ///);
    /// ```
    pub fn build(&self) -> Result<UndirectedGraph<W>, KruskalError> {
        let n_vertices = self.graph.size();
        let sorted_edges = self.sort_edges_by_weight();
        let tree_edges = self.select_tree_edges(&sorted_edges, n_vertices);
        self.check_spanning(n_vertices, tree_edges.len())?;
        Ok(UndirectedGraph::from_validated(n_vertices, tree_edges))
    }

    fn sort_edges_by_weight(&self) -> Vec<WeightedEdge<W>> {
        let mut edges = self.graph.get_edges();
        // Stable, so edges that compare equal keep their input order
        match self.params.tie_break {
            TieBreak::InputOrder => edges.sort_by(|a, b| Self::cmp_weights(a, b)),
            TieBreak::VertexPair => edges.sort_by(|a, b| {
                Self::cmp_weights(a, b).then_with(|| a.vertices().cmp(&b.vertices()))
            }),
        }
        edges
    }

    fn cmp_weights(a: &WeightedEdge<W>, b: &WeightedEdge<W>) -> Ordering {
        // Incomparable weights are rejected when the graph is constructed
        a.weight()
            .partial_cmp(&b.weight())
            .unwrap_or(Ordering::Equal)
    }

    fn select_tree_edges(
        &self,
        sorted_edges: &[WeightedEdge<W>],
        n_vertices: usize,
    ) -> Vec<WeightedEdge<W>> {
        let n_tree_edges = n_vertices.saturating_sub(1);
        let mut tree_edges = Vec::with_capacity(n_tree_edges);
        let mut forest = DisjointSetForest::new(n_vertices);

        for (n_scanned, edge) in sorted_edges.iter().enumerate() {
            if self.params.early_exit && tree_edges.len() == n_tree_edges {
                debug!(
                    "Spanning tree complete after scanning {n_scanned} of {} edges",
                    sorted_edges.len()
                );
                break;
            }
            let root_first = forest.find(edge.first_vertex());
            let root_second = forest.find(edge.second_vertex());
            if root_first == root_second {
                // Would close a cycle
                continue;
            }
            tree_edges.push(*edge);
            forest.union(root_first, root_second);
        }

        debug!(
            "Selected {} edges from {} across {n_vertices} vertices, leaving {} components",
            tree_edges.len(),
            sorted_edges.len(),
            forest.n_sets()
        );
        tree_edges
    }

    fn check_spanning(&self, n_vertices: usize, n_selected: usize) -> Result<(), KruskalError> {
        if n_selected + 1 == n_vertices {
            return Ok(());
        }
        let n_components = n_vertices - n_selected;
        warn!(
            "No spanning tree exists: {n_vertices} vertices remain split into {n_components} \
            components"
        );
        Err(KruskalError::DisconnectedGraph { n_vertices, n_components })
    }
}
