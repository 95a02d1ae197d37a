//! Union-find over cell indices, used by Kruskal's generator to tell whether two cells are
//! already connected.

/// Disjoint-set forest with path compression and union by size.
///
/// Every entry is either a parent index, or for a root, the negated size of its tree.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<isize>,
}

impl DisjointSet {
    /// Creates `n` singleton sets, `0..n`.
    pub fn new(n: usize) -> Self {
        Self {
            parent: vec![-1; n],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the representative of the set containing `x`.
    ///
    /// Every node on the way is re-attached directly to the root.
    ///
    /// # Panics
    /// If `x` is not smaller than [`len`](Self::len).
    pub fn find(&mut self, x: usize) -> usize {
        self.check(x);

        let mut root = x;
        while self.parent[root] >= 0 {
            root = self.parent[root] as usize;
        }

        let mut node = x;
        while self.parent[node] >= 0 {
            let next = self.parent[node] as usize;
            self.parent[node] = root as isize;
            node = next;
        }

        root
    }

    /// Merges the sets of `x` and `y`, the smaller tree goes under the bigger one, on a tie the
    /// root of `x` goes under the root of `y`.
    ///
    /// Returns `false` if they were already in the same set.
    ///
    /// # Panics
    /// If either index is not smaller than [`len`](Self::len).
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }

        // sizes are stored negated, smaller value means bigger tree
        if self.parent[root_x] < self.parent[root_y] {
            self.parent[root_x] += self.parent[root_y];
            self.parent[root_y] = root_x as isize;
        } else {
            self.parent[root_y] += self.parent[root_x];
            self.parent[root_x] = root_y as isize;
        }

        true
    }

    pub fn same_set(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Number of elements in the set containing `x`.
    pub fn set_size(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.parent[root].unsigned_abs()
    }

    /// Number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.parent.iter().filter(|&&p| p < 0).count()
    }

    fn check(&self, x: usize) {
        assert!(
            x < self.parent.len(),
            "disjoint set index {x} out of range 0..{}",
            self.parent.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_sets_are_singletons() {
        let mut set = DisjointSet::new(6);
        assert_eq!(set.set_count(), 6);
        for i in 0..6 {
            assert_eq!(set.find(i), i);
            assert_eq!(set.set_size(i), 1);
        }
    }

    #[test]
    fn union_links_sets() {
        let mut set = DisjointSet::new(4);
        assert!(set.union(0, 1));
        assert_eq!(set.find(0), set.find(1));
        assert!(!set.same_set(0, 2));
        assert_eq!(set.set_count(), 3);
    }

    #[test]
    fn repeated_union_is_noop() {
        let mut set = DisjointSet::new(3);
        assert!(set.union(0, 2));
        let before = set.parent.clone();

        assert!(!set.union(0, 2));
        assert!(!set.union(2, 0));
        assert_eq!(set.parent, before);
    }

    #[test]
    fn tie_attaches_x_under_y() {
        let mut set = DisjointSet::new(2);
        set.union(0, 1);
        assert_eq!(set.parent, vec![1, -2]);
    }

    #[test]
    fn smaller_tree_goes_under_bigger() {
        let mut set = DisjointSet::new(4);
        set.union(0, 1); // root 1, size 2
        set.union(1, 2); // root 1, size 3
        assert_eq!(set.find(2), 1);

        // y is the singleton here, so it must not become the root
        set.union(1, 3);
        assert_eq!(set.find(3), 1);
        assert_eq!(set.parent[1], -4);
    }

    #[test]
    fn chain_of_unions_sums_sizes() {
        // components of sizes 3, 2 and 4
        let mut set = DisjointSet::new(9);
        set.union(0, 1);
        set.union(1, 2);
        set.union(3, 4);
        set.union(5, 6);
        set.union(6, 7);
        set.union(7, 8);

        set.union(2, 4);
        set.union(4, 8);

        let root = set.find(0);
        assert_eq!(set.parent[root], -9);
        assert_eq!(set.set_size(5), 9);
        assert_eq!(set.set_count(), 1);
        assert!((0..9).all(|i| set.find(i) == root));
    }

    #[test]
    fn find_compresses_path() {
        let mut set = DisjointSet {
            parent: vec![1, 2, 3, -4],
        };
        assert_eq!(set.find(0), 3);
        assert_eq!(set.parent, vec![3, 3, 3, -4]);
    }

    #[test]
    #[should_panic]
    fn out_of_range_panics() {
        let mut set = DisjointSet::new(3);
        set.find(3);
    }
}
