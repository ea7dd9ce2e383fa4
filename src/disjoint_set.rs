/// A disjoint-set forest (union-find) over the elements `0..n`, with path compression on
/// `find` and union by rank.
#[derive(Debug, Clone, PartialEq)]
pub struct DisjointSetForest {
    parent: Vec<usize>,
    rank: Vec<u32>,
    n_sets: usize,
}

impl DisjointSetForest {
    /// Creates `n` singleton sets, where each element is its own representative.
    pub fn new(n: usize) -> Self {
        let parent = (0..n).collect();
        let rank = vec![0; n];
        DisjointSetForest { parent, rank, n_sets: n }
    }

    /// The number of elements in the forest, regardless of how they are grouped.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether the forest was created over zero elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// The number of disjoint sets currently in the forest.
    pub fn n_sets(&self) -> usize {
        self.n_sets
    }

    /// Returns the representative of the set containing `n`. Every element visited on the way
    /// to the root is repointed directly at the root.
    ///
    /// # Panics
    /// * If `n` is not lower than `len()`.
    pub fn find(&mut self, mut n: usize) -> usize {
        let mut root = n;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        while self.parent[n] != root {
            let next = self.parent[n];
            self.parent[n] = root;
            n = next;
        }
        root
    }

    /// Whether `m` and `n` currently share a representative. Compresses both paths.
    pub fn same_set(&mut self, m: usize, n: usize) -> bool {
        self.find(m) == self.find(n)
    }

    /// Merges the sets containing `m` and `n`. The root of lower rank is attached under the root
    /// of higher rank; on a tie the root of `m` becomes the parent and its rank grows by one.
    ///
    /// # Returns
    /// * `true` if two distinct sets were merged, `false` if `m` and `n` already shared a set.
    pub fn union(&mut self, m: usize, n: usize) -> bool {
        let root_m = self.find(m);
        let root_n = self.find(n);
        if root_m == root_n {
            return false;
        }
        if self.rank[root_m] < self.rank[root_n] {
            self.parent[root_m] = root_n;
        } else {
            self.parent[root_n] = root_m;
            if self.rank[root_m] == self.rank[root_n] {
                self.rank[root_m] += 1;
            }
        }
        self.n_sets -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_as_singletons() {
        let mut forest = DisjointSetForest::new(4);
        assert_eq!(4, forest.len());
        assert_eq!(4, forest.n_sets());
        for n in 0..4 {
            assert_eq!(n, forest.find(n));
        }
    }

    #[test]
    fn empty_forest() {
        let forest = DisjointSetForest::new(0);
        assert!(forest.is_empty());
        assert_eq!(0, forest.n_sets());
    }

    #[test]
    fn union_merges_sets() {
        let mut forest = DisjointSetForest::new(5);
        assert!(forest.union(0, 1));
        assert!(forest.union(3, 4));
        assert!(forest.same_set(0, 1));
        assert!(forest.same_set(4, 3));
        assert!(!forest.same_set(1, 3));
        assert_eq!(3, forest.n_sets());

        assert!(forest.union(1, 4));
        assert!(forest.same_set(0, 3));
        assert!(!forest.same_set(2, 0));
        assert_eq!(2, forest.n_sets());
    }

    #[test]
    fn union_within_a_set_is_a_no_op() {
        let mut forest = DisjointSetForest::new(3);
        forest.union(0, 1);
        let before = forest.clone();
        assert!(!forest.union(1, 0));
        assert_eq!(before, forest);
    }

    #[test]
    fn union_by_rank() {
        let mut forest = DisjointSetForest::new(4);
        // Tied ranks: the first root becomes the parent
        forest.union(0, 1);
        assert_eq!(0, forest.find(1));
        assert_eq!(1, forest.rank[0]);

        // A rank 0 root goes under the rank 1 root, whichever side it is passed on
        forest.union(2, 0);
        assert_eq!(0, forest.find(2));
        assert_eq!(1, forest.rank[0]);
        assert_eq!(0, forest.rank[2]);

        // The higher rank root passed first stays the parent without growing
        forest.union(0, 3);
        assert_eq!(0, forest.find(3));
        assert_eq!(1, forest.rank[0]);
        assert_eq!(0, forest.rank[3]);
    }

    #[test]
    fn find_compresses_paths() {
        let mut forest = DisjointSetForest::new(4);
        // Build the chain 3 -> 2 -> 1 -> 0 by hand, which union by rank would never produce
        forest.parent = vec![0, 0, 1, 2];
        assert_eq!(0, forest.find(3));
        assert_eq!(vec![0, 0, 0, 0], forest.parent);
    }

    #[test]
    fn long_chain_does_not_overflow_the_stack() {
        let n = 1_000_000;
        let mut forest = DisjointSetForest::new(n);
        forest.parent = (0..n).map(|i| i.saturating_sub(1)).collect();
        assert_eq!(0, forest.find(n - 1));
        assert_eq!(0, forest.parent[n / 2]);
    }
}
