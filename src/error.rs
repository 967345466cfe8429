//! Error types for graph construction and queries.
//!
//! Only *contract violations* are errors. A search that finds no path or a graph whose
//! spanning tree does not exist is a regular outcome, see [`ShortestPath`](crate::algo::ShortestPath)
//! and [`SpanningTree`](crate::algo::SpanningTree).

use thiserror::Error;

use crate::prelude::*;

/// Errors that can occur when editing or querying a [`WeightedGraph`](crate::repr::WeightedGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge from a vertex to itself was requested.
    #[error("self-loop at vertex {0} is not allowed")]
    SelfLoop(Node),

    /// The unordered pair already carries an edge.
    #[error("edge {0} already exists")]
    DuplicateEdge(Edge),

    /// An edge weight lies outside `[min, max)` of the graph's bounds, i.e. it is negative
    /// relative to the distance identity or collides with the "no edge" sentinel.
    #[error("weight of edge {0} lies outside the weight bounds")]
    InvalidWeight(Edge),

    /// A vertex index was not smaller than the number of vertices.
    #[error("vertex {index} out of range (graph has {len} vertices)")]
    VertexOutOfRange {
        /// The offending index.
        index: Node,
        /// The number of vertices at the time of access.
        len: NumNodes,
    },

    /// An edge index was not smaller than the number of edges.
    #[error("edge {index} out of range (graph has {len} edges)")]
    EdgeOutOfRange {
        /// The offending index.
        index: NumEdges,
        /// The number of edges at the time of access.
        len: NumEdges,
    },

    /// A vertex value was looked up that is not stored in the graph.
    #[error("vertex not found")]
    VertexNotFound,

    /// The graph cannot hold any more vertices.
    #[error("graph cannot hold more than {} vertices", INVALID_NODE)]
    TooManyVertices,

    /// The graph was mutated since the last call to `rebuild`.
    #[error("graph was modified since the last rebuild")]
    StaleState,
}

impl GraphError {
    /// Returns `Ok(())` if `index < len` and a [`GraphError::VertexOutOfRange`] otherwise.
    pub(crate) fn check_vertex(index: Node, len: NumNodes) -> Result<(), Self> {
        if index < len {
            Ok(())
        } else {
            Err(Self::VertexOutOfRange { index, len })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            GraphError::DuplicateEdge(Edge(1, 4)).to_string(),
            "edge (1,4) already exists"
        );
        assert_eq!(
            GraphError::VertexOutOfRange { index: 7, len: 3 }.to_string(),
            "vertex 7 out of range (graph has 3 vertices)"
        );
        assert!(GraphError::check_vertex(2, 3).is_ok());
        assert_eq!(
            GraphError::check_vertex(3, 3),
            Err(GraphError::VertexOutOfRange { index: 3, len: 3 })
        );
    }
}
