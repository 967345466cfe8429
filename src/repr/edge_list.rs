use fxhash::FxHashSet;

use super::*;

/// Insertion-ordered list of normalized weighted edges.
///
/// The list is the authoritative record of the edge set; [`CompactEdgeMatrix`] is derived
/// from it on every rebuild. A hash set of the unweighted edges mirrors the list so that
/// duplicates are detected in `O(1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeList<W> {
    edges: Vec<WeightedEdge<W>>,
    present: FxHashSet<Edge>,
}

impl<W> Default for EdgeList<W> {
    fn default() -> Self {
        Self {
            edges: Vec::new(),
            present: FxHashSet::default(),
        }
    }
}

impl<W: Weight> EdgeList<W> {
    /// Appends `edge`.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateEdge`] if the endpoints of `edge` are already connected.
    /// Range and weight checks are left to the caller.
    pub fn push(&mut self, edge: WeightedEdge<W>) -> Result<(), GraphError> {
        if !self.present.insert(edge.edge()) {
            return Err(GraphError::DuplicateEdge(edge.edge()));
        }

        self.edges.push(edge);
        Ok(())
    }

    /// Returns *true* if the list holds an edge between the endpoints of `edge`
    pub fn contains(&self, edge: Edge) -> bool {
        self.present.contains(&edge.normalized())
    }

    pub fn get(&self, index: NumEdges) -> Result<WeightedEdge<W>, GraphError> {
        self.edges
            .get(index as usize)
            .copied()
            .ok_or(GraphError::EdgeOutOfRange {
                index,
                len: self.number_of_edges(),
            })
    }

    /// Drops every edge incident to `removed` and decrements every endpoint larger than it.
    /// Returns the number of dropped edges.
    pub fn remove_incident_and_renumber(&mut self, removed: Node) -> NumEdges {
        let before = self.edges.len();
        self.edges.retain_mut(|e| {
            if e.edge().is_incident_to(removed) {
                false
            } else {
                e.shift_after_removal(removed);
                true
            }
        });

        // renumbering changes the keys, so the index is rebuilt from scratch
        self.present.clear();
        self.present.extend(self.edges.iter().map(|e| e.edge()));

        (before - self.edges.len()) as NumEdges
    }

    pub fn iter(&self) -> impl Iterator<Item = WeightedEdge<W>> + '_ {
        self.edges.iter().copied()
    }

    pub fn clear(&mut self) {
        self.edges.clear();
        self.present.clear();
    }
}

impl<W> GraphEdgeOrder for EdgeList<W> {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}
