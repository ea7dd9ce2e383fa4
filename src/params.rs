// Defaults for parameters
const TIE_BREAK_DEFAULT: TieBreak = TieBreak::InputOrder;
const EARLY_EXIT_DEFAULT: bool = true;

/// How edges of equal weight are ordered before the greedy selection. Every option yields a tree
/// of minimal total weight, but when weights tie the specific tree selected depends on this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    /// Edges of equal weight keep the order they have in the input graph.
    InputOrder,
    /// Edges of equal weight are ordered by their endpoints, lowest index first (so `(2, 0)` sorts
    /// as `(0, 2)`), then by input order. The selected tree then depends only on the edge set,
    /// not on the order edges were supplied in.
    VertexPair,
}

/// A wrapper around the parameters used when building a minimum spanning tree.
/// Only use if you want to tune the parameters. Otherwise use `minimum_spanning_tree` or
/// `Kruskal::default_params`.
#[derive(Debug, Clone, PartialEq)]
pub struct KruskalParams {
    pub(crate) tie_break: TieBreak,
    pub(crate) early_exit: bool,
}

/// Builder object to set custom parameters.
pub struct KruskalParamsBuilder {
    tie_break: Option<TieBreak>,
    early_exit: Option<bool>,
}

impl Default for KruskalParams {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl KruskalParams {
    /// Enters the builder pattern, allowing custom parameters to be set using various setter
    /// methods.
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn builder() -> KruskalParamsBuilder {
        KruskalParamsBuilder {
            tie_break: None,
            early_exit: None,
        }
    }
}

impl KruskalParamsBuilder {
    /// Sets how edges of equal weight are ordered. Defaults to `TieBreak::InputOrder`.
    ///
    /// # Parameters
    /// * tie_break - the tie break policy
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn tie_break(mut self, tie_break: TieBreak) -> KruskalParamsBuilder {
        self.tie_break = Some(tie_break);
        self
    }

    /// Sets whether to stop scanning the sorted edges as soon as a spanning tree is complete.
    /// No later edge could be selected once every vertex is connected, so this only affects
    /// running time. Defaults to true.
    ///
    /// # Parameters
    /// * early_exit - whether to stop once `n - 1` edges are selected
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn early_exit(mut self, early_exit: bool) -> KruskalParamsBuilder {
        self.early_exit = Some(early_exit);
        self
    }

    /// Finishes the building of the parameter configuration. A call to this method is required
    /// to exit the builder pattern and complete the construction of the parameters.
    ///
    /// # Returns
    /// * The completed parameter configuration.
    pub fn build(self) -> KruskalParams {
        KruskalParams {
            tie_break: self.tie_break.unwrap_or(TIE_BREAK_DEFAULT),
            early_exit: self.early_exit.unwrap_or(EARLY_EXIT_DEFAULT),
        }
    }
}
