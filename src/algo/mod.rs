/*!
# Graph Algorithms

This module provides the algorithms available on every [`WeightedAdjacency`], in particular on
the [`MatrixView`](crate::repr::MatrixView) of a freshly rebuilt
[`WeightedGraph`](crate::repr::WeightedGraph):

- [`ShortestPathSearch`]: Dijkstra's single-pair shortest path,
- [`MinimumSpanningTree`]: Prim's minimum spanning tree,
- [`Reachability`]: unweighted reachability queries.

Dijkstra and Prim share the same machinery: an [`IndexedMinHeap`] over all nodes and a
predecessor arena. After settling the minimum, *every* node still in the heap is relaxed via an
`O(1)` matrix lookup. This results in `O(n^2)` total work independent of the number of edges,
which is the right trade-off for the dense graphs this crate is designed for.

Both algorithms report a missing result as a regular outcome ([`ShortestPath::Unreachable`],
[`SpanningTree::Disconnected`]) rather than as an error.
*/

mod connectivity;
mod dijkstra;
mod prim;

use tracing::trace;

use crate::{prelude::*, utils::*};

pub use connectivity::*;
pub use dijkstra::*;
pub use prim::*;

/// Outcome of a shortest path query
#[derive(Debug, Clone, PartialEq)]
pub enum ShortestPath<W> {
    /// A shortest path exists.
    /// `path` lists the nodes from the destination back to the source (which is the last entry)
    Found { path: Vec<Node>, distance: W },
    /// The destination cannot be reached from the source
    Unreachable,
}

impl<W: Copy> ShortestPath<W> {
    /// Returns *true* if a path was found
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// Returns the total weight of the path if one was found
    pub fn distance(&self) -> Option<W> {
        match self {
            Self::Found { distance, .. } => Some(*distance),
            Self::Unreachable => None,
        }
    }

    /// Returns the path (destination first) if one was found
    pub fn path(&self) -> Option<&[Node]> {
        match self {
            Self::Found { path, .. } => Some(path.as_slice()),
            Self::Unreachable => None,
        }
    }
}

/// Outcome of a spanning tree query
#[derive(Debug, Clone, PartialEq)]
pub enum SpanningTree<T> {
    /// The component of the source spans all nodes; `tree` is a minimum spanning tree
    Found { tree: T },
    /// Some node cannot be reached from the source
    Disconnected,
}

impl<T> SpanningTree<T> {
    /// Returns *true* if a spanning tree was found
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// Returns a reference to the tree if one was found
    pub fn tree(&self) -> Option<&T> {
        match self {
            Self::Found { tree } => Some(tree),
            Self::Disconnected => None,
        }
    }

    /// Returns the tree if one was found
    pub fn into_tree(self) -> Option<T> {
        match self {
            Self::Found { tree } => Some(tree),
            Self::Disconnected => None,
        }
    }

    /// Maps the found tree with a fallible function
    pub fn try_map<U, E, F>(self, f: F) -> Result<SpanningTree<U>, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        Ok(match self {
            Self::Found { tree } => SpanningTree::Found { tree: f(tree)? },
            Self::Disconnected => SpanningTree::Disconnected,
        })
    }
}

/// Predecessor arena: entry `u` holds the node through which `u` received its current key
pub(crate) type Predecessors = Vec<Option<OptionalNode>>;

/// Relaxes every node still in `heap` against the just `settled` entry.
///
/// For each remaining node `u` with an edge `{settled, u}` of weight `w`, the candidate key is
/// `candidate(settled.key, w)`. If it is strictly smaller than the key of `u`, the predecessor of
/// `u` becomes `settled.node` and the key is decreased in place.
pub(crate) fn relax_remaining<G, F>(
    graph: &G,
    heap: &mut IndexedMinHeap<G::Weight>,
    predecessors: &mut Predecessors,
    settled: HeapEntry<G::Weight>,
    candidate: F,
) where
    G: WeightedAdjacency,
    F: Fn(G::Weight, G::Weight) -> G::Weight,
{
    let bounds = graph.bounds();

    for pos in 0..heap.len() {
        let HeapEntry { node: u, key } = heap.entry(pos);

        let w = graph.weight_of(settled.node, u);
        if bounds.is_unreachable(w) {
            continue;
        }

        let new_key = candidate(settled.key, w);
        if new_key < key {
            trace!(node = u, via = settled.node, key = ?new_key, "decrease key");
            predecessors[u as usize] = OptionalNode::new(settled.node);
            heap.decrease_key(pos, new_key);
        }
    }
}
