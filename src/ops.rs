use std::ops::Range;

use crate::prelude::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns a range over all node indices.
    /// In contrast to an iterator over the vertex store, the range does not borrow self
    /// and hence may be used where additional mutable references of self are needed
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// O(1) access to the weight of any unordered node pair.
///
/// Implementors guarantee that the weights they report are consistent with the current
/// node set; algorithms in [`crate::algo`] are implemented for every `WeightedAdjacency`.
pub trait WeightedAdjacency: GraphNodeOrder {
    type Weight: Weight;

    /// Returns the sentinels of the graph
    fn bounds(&self) -> WeightBounds<Self::Weight>;

    /// Returns the weight of the edge `{u, v}` or `bounds().max_value()` if there is none.
    /// ** Panics if `u >= n || v >= n`; might panic if `u == v` **
    fn weight_of(&self, u: Node, v: Node) -> Self::Weight;

    /// Returns *true* if there is an edge `{u, v}`
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool {
        u != v && !self.bounds().is_unreachable(self.weight_of(u, v))
    }

    /// Returns an iterator over all neighbors of `u` together with the connecting weight
    /// in increasing node order.
    /// ** Panics if `u >= n` **
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Self::Weight)> + '_ {
        let bounds = self.bounds();
        self.vertices_range().filter_map(move |v| {
            if v == u {
                return None;
            }
            let w = self.weight_of(u, v);
            (!bounds.is_unreachable(w)).then_some((v, w))
        })
    }

    /// Returns the number of neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes {
        self.weighted_neighbors_of(u).count() as NumNodes
    }
}
