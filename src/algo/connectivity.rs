use std::collections::VecDeque;

use super::*;

/// Unweighted reachability on graphs with `O(1)` weight lookup.
///
/// These queries answer the same "is there a path" questions as [`ShortestPathSearch`] and
/// [`MinimumSpanningTree`] without maintaining a heap.
pub trait Reachability: WeightedAdjacency {
    /// Returns a bitset with bit `u` set iff `u` can be reached from `source`
    /// (including `source` itself). Runs a BFS in `O(n^2)`.
    /// ** Panics if `source >= n` **
    fn reachable_from(&self, source: Node) -> NodeBitSet;

    /// Returns *true* if `target` can be reached from `source`.
    /// ** Panics if `source >= n || target >= n` **
    fn is_reachable(&self, source: Node, target: Node) -> bool {
        source == target || self.reachable_from(source).get_bit(target)
    }

    /// Returns *true* if every node can be reached from `source`, i.e. if the graph is connected.
    /// ** Panics if `source >= n` **
    fn spans_all_from(&self, source: Node) -> bool {
        self.reachable_from(source).cardinality() == self.number_of_nodes()
    }
}

impl<G> Reachability for G
where
    G: WeightedAdjacency,
{
    fn reachable_from(&self, source: Node) -> NodeBitSet {
        assert!(source < self.number_of_nodes());

        let mut visited = self.vertex_bitset_unset();
        visited.set_bit(source);

        let mut queue = VecDeque::from(vec![source]);
        while let Some(u) = queue.pop_front() {
            for (v, _) in self.weighted_neighbors_of(u) {
                if !visited.set_bit(v) {
                    queue.push_back(v);
                }
            }
        }

        visited
    }
}
