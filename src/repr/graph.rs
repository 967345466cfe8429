use tracing::debug;

use super::*;
use crate::algo::{MinimumSpanningTree, Reachability, ShortestPath, ShortestPathSearch, SpanningTree};

/// A weighted undirected graph over vertex values of type `V` with weights of type `W`.
///
/// # Example
/// ```
/// use wgraphs::{prelude::*, algo::ShortestPath};
///
/// let mut graph = WeightedGraph::<char, u32>::default();
/// for c in ['A', 'B', 'C', 'D'] {
///     graph.add_vertex(c).unwrap();
/// }
/// graph.add_edge_between(&'A', &'B', 1).unwrap();
/// graph.add_edge_between(&'B', &'C', 2).unwrap();
/// graph.add_edge_between(&'A', &'C', 4).unwrap();
/// graph.add_edge_between(&'C', &'D', 1).unwrap();
///
/// // queries are rejected until the matrix is rebuilt
/// assert_eq!(graph.shortest_path(0, 3), Err(GraphError::StaleState));
/// graph.rebuild();
///
/// assert_eq!(
///     graph.shortest_path_between(&'A', &'D'),
///     Ok(ShortestPath::Found { path: vec![3, 2, 1, 0], distance: 4 })
/// );
/// ```
#[derive(Debug, Clone)]
pub struct WeightedGraph<V, W> {
    vertices: VertexStore<V>,
    edges: EdgeList<W>,
    matrix: CompactEdgeMatrix<W>,
    bounds: WeightBounds<W>,
    fresh: bool,
}

impl<V, W> Default for WeightedGraph<V, W>
where
    W: Weight + num::Zero + num::Bounded,
{
    fn default() -> Self {
        Self::with_bounds(WeightBounds::default())
    }
}

impl<V, W: Weight> WeightedGraph<V, W> {
    /// Creates an empty graph with distance identity `min` and "no edge" sentinel `max`.
    ///
    /// # Panics
    /// Panics if `min >= max`.
    pub fn new(min: W, max: W) -> Self {
        Self::with_bounds(WeightBounds::new(min, max))
    }

    /// Creates an empty graph with the given sentinels
    pub fn with_bounds(bounds: WeightBounds<W>) -> Self {
        Self {
            vertices: VertexStore::default(),
            edges: EdgeList::default(),
            matrix: CompactEdgeMatrix::default(),
            bounds,
            // an empty graph has an (empty) valid matrix
            fresh: true,
        }
    }

    /// Creates a graph from vertex values and edges `(u, v, weight)` and rebuilds it.
    ///
    /// # Errors
    /// Fails on the first edge that [`WeightedGraph::add_edge`] rejects.
    pub fn from_edges<IV, IE>(bounds: WeightBounds<W>, vertices: IV, edges: IE) -> Result<Self, GraphError>
    where
        IV: IntoIterator<Item = V>,
        IE: IntoIterator<Item = (Node, Node, W)>,
    {
        let mut graph = Self::with_bounds(bounds);
        for v in vertices {
            graph.add_vertex(v)?;
        }
        for (u, v, w) in edges {
            graph.add_edge(u, v, w)?;
        }
        graph.rebuild();
        Ok(graph)
    }

    /// Returns the sentinels of the graph
    pub fn bounds(&self) -> WeightBounds<W> {
        self.bounds
    }

    /// Removes all vertices and edges
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.matrix.clear();
        self.fresh = true;
    }

    /// Appends a vertex and returns its index
    ///
    /// # Errors
    /// Returns [`GraphError::TooManyVertices`] if the graph is full.
    pub fn add_vertex(&mut self, value: V) -> Result<Node, GraphError> {
        let u = self.vertices.push(value)?;
        self.fresh = false;
        Ok(u)
    }

    /// Removes the vertex at `index` together with all incident edges and returns its value.
    /// Every vertex (and edge endpoint) with a larger index moves down by one.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if `index >= n`.
    pub fn remove_vertex_at(&mut self, index: Node) -> Result<V, GraphError> {
        let value = self.vertices.remove(index)?;
        let dropped = self.edges.remove_incident_and_renumber(index);
        self.fresh = false;

        debug!(vertex = index, dropped_edges = dropped, "removed vertex");
        Ok(value)
    }

    /// Adds the undirected edge `{u, v}`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if an endpoint is not a vertex,
    /// [`GraphError::SelfLoop`] if `u == v`, [`GraphError::InvalidWeight`] if `weight` is not
    /// admitted by [`WeightedGraph::bounds`] and [`GraphError::DuplicateEdge`] if the edge exists.
    pub fn add_edge(&mut self, u: Node, v: Node, weight: W) -> Result<(), GraphError> {
        let n = self.number_of_nodes();
        GraphError::check_vertex(u, n)?;
        GraphError::check_vertex(v, n)?;

        let edge = WeightedEdge::new(u, v, weight)?;
        if !self.bounds.admits(weight) {
            return Err(GraphError::InvalidWeight(edge.edge()));
        }

        self.edges.push(edge)?;
        self.fresh = false;
        Ok(())
    }

    /// Rebuilds the edge matrix from the edge list and marks the graph as fresh.
    /// Must be called after any structural mutation before querying.
    pub fn rebuild(&mut self) {
        self.matrix.rebuild(
            self.vertices.number_of_nodes(),
            self.edges.iter(),
            self.bounds.max_value(),
        );
        self.fresh = true;

        debug!(
            nodes = self.number_of_nodes(),
            edges = self.number_of_edges(),
            "rebuilt compact edge matrix"
        );
    }

    /// Returns *true* if the edge matrix reflects the current vertex and edge set
    pub fn is_fresh(&self) -> bool {
        self.fresh
    }

    /// Returns a read-only view on the edge matrix.
    ///
    /// # Errors
    /// Returns [`GraphError::StaleState`] if the graph was mutated since the last rebuild.
    pub fn view(&self) -> Result<MatrixView<'_, W>, GraphError> {
        if !self.fresh {
            return Err(GraphError::StaleState);
        }

        Ok(MatrixView {
            matrix: &self.matrix,
            bounds: self.bounds,
        })
    }

    pub fn vertex_at(&self, index: Node) -> Result<&V, GraphError> {
        self.vertices.get(index)
    }

    /// Mutable access to a vertex value. Changing a value does not alter the structure
    /// of the graph, but may change the result of [`WeightedGraph::vertex_index_of`].
    pub fn vertex_at_mut(&mut self, index: Node) -> Result<&mut V, GraphError> {
        self.vertices.get_mut(index)
    }

    /// Returns all vertex values in index order
    pub fn vertices(&self) -> &[V] {
        self.vertices.as_slice()
    }

    /// Returns the `index`-th added edge (after renumbering due to removals)
    pub fn edge_at(&self, index: NumEdges) -> Result<WeightedEdge<W>, GraphError> {
        self.edges.get(index)
    }

    /// Returns an iterator over all edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = WeightedEdge<W>> + '_ {
        self.edges.iter()
    }

    /// Returns the sum of all edge weights, saturating at `bounds().max_value()`
    pub fn total_weight(&self) -> W {
        self.edges
            .iter()
            .fold(self.bounds.min_value(), |acc, e| self.bounds.accumulate(acc, e.weight()))
    }

    /// Returns the weight of `{u, v}` as stored in the edge matrix; this is the "no edge"
    /// sentinel `bounds().max_value()` if there is no such edge.
    ///
    /// # Errors
    /// Fails if the graph is stale, if an endpoint is out of range or if `u == v`.
    pub fn edge_weight(&self, u: Node, v: Node) -> Result<W, GraphError> {
        let view = self.view()?;
        view.check_pair(u, v)?;
        Ok(view.weight_of(u, v))
    }

    /// Returns the edge `{u, v}` if it exists.
    ///
    /// # Errors
    /// Fails if the graph is stale, if an endpoint is out of range or if `u == v`.
    pub fn edge(&self, u: Node, v: Node) -> Result<Option<WeightedEdge<W>>, GraphError> {
        let w = self.edge_weight(u, v)?;
        if self.bounds.is_unreachable(w) {
            Ok(None)
        } else {
            WeightedEdge::new(u, v, w).map(Some)
        }
    }

    /// Computes a shortest path between `source` and `destination` (see [`ShortestPathSearch`]).
    ///
    /// # Errors
    /// Fails if the graph is stale or an index is out of range.
    pub fn shortest_path(&self, source: Node, destination: Node) -> Result<ShortestPath<W>, GraphError> {
        let view = self.view()?;
        GraphError::check_vertex(source, view.number_of_nodes())?;
        GraphError::check_vertex(destination, view.number_of_nodes())?;

        Ok(view.shortest_path(source, destination))
    }

    /// Computes a minimum spanning tree rooted at `source` (see [`MinimumSpanningTree`]).
    /// The tree is a new, already rebuilt graph with the same vertices.
    ///
    /// # Errors
    /// Fails if the graph is stale or `source` is out of range.
    pub fn minimum_spanning_tree(&self, source: Node) -> Result<SpanningTree<Self>, GraphError>
    where
        V: Clone,
    {
        let view = self.view()?;
        GraphError::check_vertex(source, view.number_of_nodes())?;

        view.minimum_spanning_tree(source).try_map(|tree_edges| {
            let mut tree = Self::with_bounds(self.bounds);
            tree.vertices = self.vertices.clone();
            for e in tree_edges {
                tree.add_edge(e.first(), e.second(), e.weight())?;
            }
            tree.rebuild();
            Ok(tree)
        })
    }

    /// Returns *true* if `target` can be reached from `source`.
    ///
    /// # Errors
    /// Fails if the graph is stale or an index is out of range.
    pub fn is_reachable(&self, source: Node, target: Node) -> Result<bool, GraphError> {
        let view = self.view()?;
        GraphError::check_vertex(source, view.number_of_nodes())?;
        GraphError::check_vertex(target, view.number_of_nodes())?;

        Ok(view.is_reachable(source, target))
    }
}

impl<V: PartialEq, W: Weight> WeightedGraph<V, W> {
    /// Returns the index of the first vertex equal to `value`
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] if there is no such vertex.
    pub fn vertex_index_of(&self, value: &V) -> Result<Node, GraphError> {
        self.vertices.index_of(value)
    }

    /// Like [`WeightedGraph::add_edge`], but addresses the endpoints by value
    pub fn add_edge_between(&mut self, u: &V, v: &V, weight: W) -> Result<(), GraphError> {
        let u = self.vertex_index_of(u)?;
        let v = self.vertex_index_of(v)?;
        self.add_edge(u, v, weight)
    }

    /// Like [`WeightedGraph::shortest_path`], but addresses the endpoints by value
    pub fn shortest_path_between(&self, source: &V, destination: &V) -> Result<ShortestPath<W>, GraphError> {
        let source = self.vertex_index_of(source)?;
        let destination = self.vertex_index_of(destination)?;
        self.shortest_path(source, destination)
    }

    /// Like [`WeightedGraph::minimum_spanning_tree`], but addresses the root by value
    pub fn minimum_spanning_tree_from(&self, source: &V) -> Result<SpanningTree<Self>, GraphError>
    where
        V: Clone,
    {
        let source = self.vertex_index_of(source)?;
        self.minimum_spanning_tree(source)
    }
}

impl<V, W> GraphNodeOrder for WeightedGraph<V, W> {
    fn number_of_nodes(&self) -> NumNodes {
        self.vertices.number_of_nodes()
    }
}

impl<V, W> GraphEdgeOrder for WeightedGraph<V, W> {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.number_of_edges()
    }
}

/// Borrowed, read-only view on a freshly rebuilt [`CompactEdgeMatrix`].
///
/// Obtained through [`WeightedGraph::view`]; as the view borrows the graph, the graph cannot
/// be mutated while a view exists.
#[derive(Debug, Clone, Copy)]
pub struct MatrixView<'a, W> {
    matrix: &'a CompactEdgeMatrix<W>,
    bounds: WeightBounds<W>,
}

impl<W: Weight> MatrixView<'_, W> {
    fn check_pair(&self, u: Node, v: Node) -> Result<(), GraphError> {
        GraphError::check_vertex(u, self.number_of_nodes())?;
        GraphError::check_vertex(v, self.number_of_nodes())?;
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        Ok(())
    }
}

impl<W: Weight> GraphNodeOrder for MatrixView<'_, W> {
    fn number_of_nodes(&self) -> NumNodes {
        self.matrix.number_of_nodes()
    }
}

impl<W: Weight> WeightedAdjacency for MatrixView<'_, W> {
    type Weight = W;

    #[inline]
    fn bounds(&self) -> WeightBounds<W> {
        self.bounds
    }

    #[inline]
    fn weight_of(&self, u: Node, v: Node) -> W {
        self.matrix.weight_of(u, v)
    }
}
