/*!
`wgraphs` is a small library for **w**eighted, undirected graphs over arbitrary vertex values,
built for dense graphs on which single-source shortest paths and minimum spanning trees are
computed repeatedly.

# Representation

Vertices are caller-supplied values of type `V` stored in insertion order; internally every vertex
is addressed by its index, a **node** `u32` in the range `0..n`. An undirected **edge** is a
normalized tuple-struct `Edge(u, v)` with `u < v`; [`WeightedEdge`](crate::edge::WeightedEdge)
attaches a weight to it.

Edge weights are stored in a [`CompactEdgeMatrix`](crate::repr::CompactEdgeMatrix), a flat
triangular array with one slot per unordered pair of nodes. Absent edges hold the "no edge"
sentinel `max` of the graph's [`WeightBounds`](crate::weight::WeightBounds), while `min` is the
distance of a node to itself.

### Rebuilding

The matrix is **not** updated incrementally. Every structural mutation (adding or removing a
vertex or an edge) marks the graph as stale, and all matrix-backed queries fail with
[`GraphError::StaleState`](crate::error::GraphError::StaleState) until
[`WeightedGraph::rebuild`](crate::repr::WeightedGraph::rebuild) is called.

# Design

All algorithms are traits with blanket implementations for every
[`WeightedAdjacency`](crate::ops::WeightedAdjacency), most importantly the borrowed
[`MatrixView`](crate::repr::MatrixView) of a fresh graph. For convenience, the most commonly
used queries are also available as checked methods on the graph itself.

# Usage

- [`prelude`] includes definitions for nodes, edges, weights, errors, basic graph operations and
  the graph representation,
- [`algo`] includes Dijkstra's shortest path search, Prim's minimum spanning tree and
  unweighted reachability,
- [`worker`] runs queries on a reusable background thread,
- [`utils`] includes the indexed binary min-heap both weighted algorithms share.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use wgraphs::{prelude::*, algo::*};

let graph = WeightedGraph::from_edges(
    WeightBounds::<u32>::default(),
    ['A', 'B', 'C', 'D'],
    [(0, 1, 1), (1, 2, 2), (0, 2, 4), (2, 3, 1)],
)
.unwrap();

let tree = graph.minimum_spanning_tree_from(&'A').unwrap().into_tree().unwrap();
assert_eq!(tree.total_weight(), 4);
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;
pub mod weight;
pub mod worker;

/// `wgraphs::prelude` includes definitions for nodes, edges and weights, all basic graph operation
/// traits, the error type as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*, weight::*};
}
