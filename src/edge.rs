/// A single undirected edge between two vertices, identified by their dense indices, with an
/// associated weight. `(u, v)` and `(v, u)` describe the same edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightedEdge<W> {
    first_vertex: usize,
    second_vertex: usize,
    weight: W,
}

impl<W: Copy> WeightedEdge<W> {
    /// Creates a new edge. Self-loops are rejected once the edge is placed in an
    /// `UndirectedGraph`.
    ///
    /// # Parameters
    /// * `first_vertex` - index of one endpoint.
    /// * `second_vertex` - index of the other endpoint.
    /// * `weight` - the cost of the edge.
    ///
    /// # Examples
    /// ```
    ///use kruskal::WeightedEdge;
    ///
    ///let edge = WeightedEdge::new(3, 1, 2.5);
    ///assert_eq!((1, 3), edge.vertices());
    ///assert!(edge.connects(1, 3));
    /// ```
    pub fn new(first_vertex: usize, second_vertex: usize, weight: W) -> Self {
        WeightedEdge { first_vertex, second_vertex, weight }
    }

    pub fn first_vertex(&self) -> usize {
        self.first_vertex
    }

    pub fn second_vertex(&self) -> usize {
        self.second_vertex
    }

    pub fn weight(&self) -> W {
        self.weight
    }

    /// The endpoints ordered lowest index first, which identifies the edge regardless of the
    /// orientation it was created with.
    pub fn vertices(&self) -> (usize, usize) {
        if self.first_vertex <= self.second_vertex {
            (self.first_vertex, self.second_vertex)
        } else {
            (self.second_vertex, self.first_vertex)
        }
    }

    /// Whether this edge joins `u` and `v`, in either orientation.
    pub fn connects(&self, u: usize, v: usize) -> bool {
        (self.first_vertex == u && self.second_vertex == v)
            || (self.first_vertex == v && self.second_vertex == u)
    }

    pub(crate) fn is_self_loop(&self) -> bool {
        self.first_vertex == self.second_vertex
    }
}
