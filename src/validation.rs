use crate::{KruskalError, WeightedEdge};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct GraphValidator<'a, W> {
    n_vertices: usize,
    edges: &'a [WeightedEdge<W>],
}

impl<'a, W: Copy + PartialOrd> GraphValidator<'a, W> {
    pub(crate) fn new(n_vertices: usize, edges: &'a [WeightedEdge<W>]) -> Self {
        Self { n_vertices, edges }
    }

    pub(crate) fn validate(&self) -> Result<(), KruskalError> {
        if self.n_vertices == 0 {
            return Err(KruskalError::EmptyGraph);
        }
        for (n, edge) in self.edges.iter().enumerate() {
            let (low, high) = edge.vertices();
            if high >= self.n_vertices {
                return Err(KruskalError::VertexOutOfRange(format!(
                    "{n}th edge ({low}, {high}) references vertex {high}, but the graph only \
                    has {} vertices",
                    self.n_vertices
                )));
            }
            if edge.is_self_loop() {
                return Err(KruskalError::SelfLoop(format!(
                    "{n}th edge joins vertex {low} to itself"
                )));
            }
            if !is_comparable(&edge.weight()) {
                return Err(KruskalError::IncomparableWeight(format!(
                    "{n}th edge ({low}, {high}) has a weight that cannot be ordered"
                )));
            }
        }
        Ok(())
    }
}

pub(crate) fn validate_cost_matrix<W: PartialOrd>(matrix: &[Vec<W>]) -> Result<(), KruskalError> {
    if matrix.is_empty() {
        return Err(KruskalError::EmptyGraph);
    }
    let n = matrix.len();
    if let Some((i, row)) = matrix.iter().enumerate().find(|(_, row)| row.len() != n) {
        return Err(KruskalError::WrongDimension(format!(
            "Cost matrix must be square: it has {n} rows, but row {i} has {} columns",
            row.len()
        )));
    }
    for i in 0..n {
        for j in (i + 1)..n {
            if !is_comparable(&matrix[i][j]) || !is_comparable(&matrix[j][i]) {
                return Err(KruskalError::IncomparableWeight(format!(
                    "Cost matrix entry ({i}, {j}) or ({j}, {i}) cannot be ordered"
                )));
            }
            if matrix[i][j].partial_cmp(&matrix[j][i]) != Some(Ordering::Equal) {
                return Err(KruskalError::WrongDimension(format!(
                    "Cost matrix must be symmetrical, but entries ({i}, {j}) and ({j}, {i}) differ"
                )));
            }
        }
    }
    Ok(())
}

// Only reflexivity is checked: a `PartialOrd` type with distinct values that cannot be compared
// with each other passes, so such types must not be used as weights.
fn is_comparable<W: PartialOrd>(weight: &W) -> bool {
    weight.partial_cmp(weight).is_some()
}
