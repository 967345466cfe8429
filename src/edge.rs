use std::fmt::{Debug, Display};

use crate::prelude::*;

/// An undirected edge is defined by two nodes/endpoints.
/// Edges stored in a graph are always normalized, i.e. `Edge(u, v)` with `u < v`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Returns *true* if `u` is one of the endpoints
    pub fn is_incident_to(&self, u: Node) -> bool {
        self.0 == u || self.1 == u
    }
}

/// A normalized edge together with its weight.
#[derive(Copy, Clone, PartialEq)]
pub struct WeightedEdge<W> {
    edge: Edge,
    weight: W,
}

impl<W: Weight> WeightedEdge<W> {
    /// Creates a new weighted edge, normalizing the endpoints.
    ///
    /// # Errors
    /// Returns [`GraphError::SelfLoop`] if `u == v`.
    pub fn new(u: Node, v: Node, weight: W) -> Result<Self, GraphError> {
        let edge = Edge(u, v);
        if edge.is_loop() {
            return Err(GraphError::SelfLoop(u));
        }

        Ok(Self {
            edge: edge.normalized(),
            weight,
        })
    }

    /// Like [`WeightedEdge::new`] for endpoints already known to differ
    pub(crate) fn new_unchecked(u: Node, v: Node, weight: W) -> Self {
        debug_assert_ne!(u, v);
        Self {
            edge: Edge(u, v).normalized(),
            weight,
        }
    }

    /// Returns the normalized unweighted edge
    #[inline]
    pub fn edge(&self) -> Edge {
        self.edge
    }

    /// Returns the smaller endpoint
    #[inline]
    pub fn first(&self) -> Node {
        self.edge.0
    }

    /// Returns the larger endpoint
    #[inline]
    pub fn second(&self) -> Node {
        self.edge.1
    }

    #[inline]
    pub fn weight(&self) -> W {
        self.weight
    }

    /// Shifts every endpoint larger than `removed` down by one.
    /// ** Must not be called on an edge incident to `removed` **
    pub(crate) fn shift_after_removal(&mut self, removed: Node) {
        debug_assert!(!self.edge.is_incident_to(removed));
        if self.edge.0 > removed {
            self.edge.0 -= 1;
        }
        if self.edge.1 > removed {
            self.edge.1 -= 1;
        }
    }
}

impl<W: Debug> Display for WeightedEdge<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{}:{:?})", self.edge.0, self.edge.1, self.weight)
    }
}

impl<W: Debug> Debug for WeightedEdge<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_edge_is_normalized() {
        let e = WeightedEdge::new(5, 2, 7u32).unwrap();
        assert_eq!(e.edge(), Edge(2, 5));
        assert_eq!((e.first(), e.second(), e.weight()), (2, 5, 7));
        assert_eq!(format!("{e}"), "(2,5:7)");

        assert!(matches!(
            WeightedEdge::new(3, 3, 1u32),
            Err(GraphError::SelfLoop(3))
        ));
    }

    #[test]
    fn shift_after_removal() {
        let mut e = WeightedEdge::new(4, 9, 1u32).unwrap();
        e.shift_after_removal(5);
        assert_eq!(e.edge(), Edge(4, 8));
        e.shift_after_removal(0);
        assert_eq!(e.edge(), Edge(3, 7));
        e.shift_after_removal(8);
        assert_eq!(e.edge(), Edge(3, 7));
    }
}
