use super::*;

/// Triangular-packed weight matrix of an undirected graph.
///
/// For `n` nodes, the matrix stores exactly one slot per unordered pair `{x, y}` with
/// `x != y`, i.e. `n * (n - 1) / 2` slots. The slot of the pair is given by
/// [`CompactEdgeMatrix::slot_of`]: walking the columns `y = 0, 1, ...`, column `y` holds
/// the rows `x = y + 1, ..., n - 1`.
///
/// Every slot not covered by an edge holds the "no edge" sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct CompactEdgeMatrix<W> {
    n: usize,
    slots: Vec<W>,
}

impl<W> Default for CompactEdgeMatrix<W> {
    fn default() -> Self {
        Self {
            n: 0,
            slots: Vec::new(),
        }
    }
}

/// Number of unordered pairs of `n` nodes
#[inline]
pub(crate) const fn number_of_pairs(n: usize) -> usize {
    if n < 2 { 0 } else { n * (n - 1) / 2 }
}

impl<W: Weight> CompactEdgeMatrix<W> {
    /// Returns the slot of the unordered pair `{x, y}`.
    /// ** Requires `y < x < n` **
    #[inline]
    pub fn slot_of(&self, x: Node, y: Node) -> usize {
        debug_assert!(y < x && (x as usize) < self.n);
        let (x, y) = (x as usize, y as usize);
        x - y - 1 + self.n * y - y * (y + 1) / 2
    }

    /// Resizes the matrix to `n` nodes, resets every slot to `none` and writes all `edges`.
    ///
    /// Runs in `O(n^2 + m)`.
    /// ** Panics if an edge has an endpoint `>= n` **
    pub fn rebuild<I>(&mut self, n: NumNodes, edges: I, none: W)
    where
        I: IntoIterator<Item = WeightedEdge<W>>,
    {
        self.n = n as usize;
        self.slots.clear();
        self.slots.resize(number_of_pairs(self.n), none);

        for e in edges {
            let slot = self.slot_of(e.second(), e.first());
            self.slots[slot] = e.weight();
        }
    }

    /// Returns the stored weight of `{u, v}` (possibly the "no edge" sentinel).
    /// The order of the endpoints does not matter.
    /// ** Panics if `u == v` or `max(u, v) >= n` **
    #[inline]
    pub fn weight_of(&self, u: Node, v: Node) -> W {
        assert_ne!(u, v, "the compact matrix has no diagonal");
        let Edge(y, x) = Edge(u, v).normalized();
        self.slots[self.slot_of(x, y)]
    }

    /// Number of nodes the matrix was built for
    #[inline]
    pub fn number_of_nodes(&self) -> NumNodes {
        self.n as NumNodes
    }

    /// Number of slots, always `n * (n - 1) / 2`
    #[inline]
    pub fn number_of_slots(&self) -> usize {
        self.slots.len()
    }

    pub fn clear(&mut self) {
        self.n = 0;
        self.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn slots_form_a_bijection() {
        for n in 0..30 {
            let mut matrix = CompactEdgeMatrix::<u32>::default();
            matrix.rebuild(n, std::iter::empty(), u32::MAX);
            assert_eq!(matrix.number_of_slots(), number_of_pairs(n as usize));

            let slots = (0..n)
                .tuple_combinations()
                .map(|(y, x)| matrix.slot_of(x, y))
                .collect_vec();

            // column-major walk visits the slots in order
            assert_eq!(slots, (0..number_of_pairs(n as usize)).collect_vec());
        }
    }

    #[test]
    fn rebuild_resets_and_writes() {
        let mut matrix = CompactEdgeMatrix::default();
        let edges = [
            WeightedEdge::new(0, 1, 3u32).unwrap(),
            WeightedEdge::new(3, 1, 7u32).unwrap(),
        ];
        matrix.rebuild(4, edges, u32::MAX);

        assert_eq!(matrix.weight_of(0, 1), 3);
        assert_eq!(matrix.weight_of(1, 0), 3);
        assert_eq!(matrix.weight_of(1, 3), 7);
        assert_eq!(matrix.weight_of(3, 1), 7);
        assert_eq!(matrix.weight_of(2, 3), u32::MAX);

        matrix.rebuild(3, [WeightedEdge::new(0, 2, 1u32).unwrap()], u32::MAX);
        assert_eq!(matrix.number_of_slots(), 3);
        assert_eq!(matrix.weight_of(0, 1), u32::MAX);
        assert_eq!(matrix.weight_of(2, 0), 1);
    }

    #[test]
    #[should_panic]
    fn no_diagonal() {
        let mut matrix = CompactEdgeMatrix::default();
        matrix.rebuild(3, std::iter::empty(), 0u8);
        matrix.weight_of(1, 1);
    }
}
