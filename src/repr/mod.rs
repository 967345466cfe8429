/*!
# Representation

A [`WeightedGraph`] is assembled from three stores:

- [`VertexStore`]: the vertex values in insertion order,
- [`EdgeList`]: the normalized edges in insertion order,
- [`CompactEdgeMatrix`]: a triangular weight matrix derived from the edge list.

The matrix is only rebuilt on request. Every structural mutation marks the graph as *stale*
and all matrix-backed accessors fail with [`GraphError::StaleState`] until
[`WeightedGraph::rebuild`] is called. [`WeightedGraph::view`] hands out a [`MatrixView`],
a borrowed and guaranteed-fresh snapshot that implements [`WeightedAdjacency`] and thus all
algorithms in [`crate::algo`].
*/

use crate::prelude::*;

mod edge_list;
mod graph;
mod matrix;
mod vertices;

pub use edge_list::*;
pub use graph::*;
pub use matrix::*;
pub use vertices::*;
