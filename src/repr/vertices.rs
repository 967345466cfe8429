use super::*;

/// Ordered collection of vertex values.
///
/// A vertex is identified by its value (via `PartialEq`), its index is its position in
/// insertion order. Removing a vertex shifts all later indices down by one.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexStore<V> {
    values: Vec<V>,
}

impl<V> Default for VertexStore<V> {
    fn default() -> Self {
        Self { values: Vec::new() }
    }
}

impl<V> VertexStore<V> {
    /// Appends a value and returns its index
    ///
    /// # Errors
    /// Returns [`GraphError::TooManyVertices`] if the store already holds `INVALID_NODE` values.
    pub fn push(&mut self, value: V) -> Result<Node, GraphError> {
        let index = Node::try_from(self.values.len()).map_err(|_| GraphError::TooManyVertices)?;
        if index == INVALID_NODE {
            return Err(GraphError::TooManyVertices);
        }

        self.values.push(value);
        Ok(index)
    }

    /// Removes the value at `index` and returns it.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if `index >= len`.
    pub fn remove(&mut self, index: Node) -> Result<V, GraphError> {
        GraphError::check_vertex(index, self.number_of_nodes())?;
        Ok(self.values.remove(index as usize))
    }

    pub fn get(&self, index: Node) -> Result<&V, GraphError> {
        self.values
            .get(index as usize)
            .ok_or(GraphError::VertexOutOfRange {
                index,
                len: self.number_of_nodes(),
            })
    }

    pub fn get_mut(&mut self, index: Node) -> Result<&mut V, GraphError> {
        let len = self.number_of_nodes();
        self.values
            .get_mut(index as usize)
            .ok_or(GraphError::VertexOutOfRange { index, len })
    }

    /// Returns an iterator over all values in index order
    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.values.iter()
    }

    pub fn as_slice(&self) -> &[V] {
        &self.values
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl<V: PartialEq> VertexStore<V> {
    /// Returns the index of the first value equal to `value`
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] if no such value is stored.
    pub fn index_of(&self, value: &V) -> Result<Node, GraphError> {
        self.values
            .iter()
            .position(|v| v == value)
            .map(|i| i as Node)
            .ok_or(GraphError::VertexNotFound)
    }
}

impl<V> GraphNodeOrder for VertexStore<V> {
    fn number_of_nodes(&self) -> NumNodes {
        self.values.len() as NumNodes
    }
}

impl<V> FromIterator<V> for VertexStore<V> {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_equality() {
        let mut store = VertexStore::default();
        assert_eq!(store.push("a"), Ok(0));
        assert_eq!(store.push("b"), Ok(1));
        assert_eq!(store.push("a"), Ok(2));

        assert_eq!(store.index_of(&"a"), Ok(0));
        assert_eq!(store.index_of(&"b"), Ok(1));
        assert_eq!(store.index_of(&"c"), Err(GraphError::VertexNotFound));
        assert_eq!(store.number_of_nodes(), 3);
        assert_eq!(store.iter().copied().collect::<Vec<_>>(), vec!["a", "b", "a"]);
    }

    #[test]
    fn removal_shifts_indices() {
        let mut store: VertexStore<char> = "abcd".chars().collect();
        assert_eq!(store.remove(1), Ok('b'));
        assert_eq!(store.as_slice(), &['a', 'c', 'd']);
        assert_eq!(store.index_of(&'d'), Ok(2));
        assert_eq!(
            store.remove(3),
            Err(GraphError::VertexOutOfRange { index: 3, len: 3 })
        );

        *store.get_mut(0).unwrap() = 'z';
        assert_eq!(store.get(0), Ok(&'z'));
    }
}
