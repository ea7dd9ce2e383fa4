use std::error::Error;
use std::fmt::{Display, Formatter};

/// Possible errors that arise when building graphs or their minimum spanning trees.
#[derive(Debug, Clone, PartialEq)]
pub enum KruskalError {
    EmptyGraph,
    VertexOutOfRange(String),
    SelfLoop(String),
    IncomparableWeight(String),
    WrongDimension(String),
    /// The graph is not connected, so no spanning tree exists. `n_components` is the number of
    /// trees the spanning forest ended up with.
    DisconnectedGraph { n_vertices: usize, n_components: usize },
}

impl Error for KruskalError {}

impl Display for KruskalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            KruskalError::EmptyGraph => String::from("The graph provided has no vertices"),
            KruskalError::VertexOutOfRange(msg) => format!("Vertex index out of range: {msg}"),
            KruskalError::SelfLoop(msg) => format!("Self-loop edge: {msg}"),
            KruskalError::IncomparableWeight(msg) => format!("Incomparable edge weight: {msg}"),
            KruskalError::WrongDimension(msg) => format!("Invalid cost matrix: {msg}"),
            KruskalError::DisconnectedGraph { n_vertices, n_components } => format!(
                "The graph is disconnected: {n_vertices} vertices fall into {n_components} \
                components, so no spanning tree exists"
            ),
        };
        write!(f, "{message}")
    }
}
