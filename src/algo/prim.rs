use tracing::debug;

use super::*;

/// Prim's algorithm on graphs with `O(1)` weight lookup.
pub trait MinimumSpanningTree: WeightedAdjacency {
    /// Computes a minimum spanning tree grown from `source`.
    ///
    /// On success, the tree consists of exactly `n - 1` edges: for every node `u != source`
    /// (in increasing order) the edge connecting `u` to its predecessor in the tree.
    /// If some node is not reachable from `source`, [`SpanningTree::Disconnected`] is returned.
    ///
    /// Runs in `O(n^2)`.
    /// ** Panics if `source >= n` **
    ///
    /// # Example
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let graph = WeightedGraph::from_edges(
    ///     WeightBounds::<u32>::default(),
    ///     ['A', 'B', 'C', 'D'],
    ///     [(0, 1, 1), (1, 2, 2), (0, 2, 4), (2, 3, 1)],
    /// )
    /// .unwrap();
    ///
    /// let tree = graph.view().unwrap().minimum_spanning_tree(0).into_tree().unwrap();
    /// let edges: Vec<_> = tree.iter().map(|e| (e.first(), e.second(), e.weight())).collect();
    /// assert_eq!(edges, vec![(0, 1, 1), (1, 2, 2), (2, 3, 1)]);
    /// ```
    fn minimum_spanning_tree(&self, source: Node) -> SpanningTree<Vec<WeightedEdge<Self::Weight>>>;
}

impl<G> MinimumSpanningTree for G
where
    G: WeightedAdjacency,
{
    fn minimum_spanning_tree(&self, source: Node) -> SpanningTree<Vec<WeightedEdge<Self::Weight>>> {
        assert!(source < self.number_of_nodes());

        let bounds = self.bounds();
        let mut heap = IndexedMinHeap::build(self.number_of_nodes(), source, bounds);
        let mut predecessors: Predecessors = vec![None; self.len()];

        while let Some(settled) = heap.extract_min() {
            if bounds.is_unreachable(settled.key) {
                debug!(
                    source,
                    unreached = heap.len() + 1,
                    "spanning tree does not cover all vertices"
                );
                return SpanningTree::Disconnected;
            }

            relax_remaining(self, &mut heap, &mut predecessors, settled, |_, w| w);
        }

        // every node but the source has been reached and thus has a predecessor
        let tree = predecessors
            .iter()
            .enumerate()
            .filter_map(|(u, pred)| {
                let (p, u) = (pred.as_ref()?.get(), u as Node);
                Some(WeightedEdge::new_unchecked(p, u, self.weight_of(p, u)))
            })
            .collect::<Vec<_>>();
        debug_assert_eq!(tree.len() + 1, self.len());

        debug!(source, edges = tree.len(), "spanning tree found");
        SpanningTree::Found { tree }
    }
}
