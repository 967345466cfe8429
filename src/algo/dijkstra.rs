use tracing::debug;

use super::*;

/// Dijkstra's algorithm on graphs with `O(1)` weight lookup.
pub trait ShortestPathSearch: WeightedAdjacency {
    /// Computes a shortest path from `source` to `destination`.
    ///
    /// If `source == destination`, the path `[source]` with distance `min_value()` is returned.
    /// Otherwise the path is returned in **reverse** order, starting at `destination` and ending
    /// at `source`. Among several shortest paths, the one selected is determined by the
    /// tie-breaking rule of the [`IndexedMinHeap`] and thus deterministic.
    ///
    /// Runs in `O(n^2)`.
    /// ** Panics if `source >= n || destination >= n` **
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
    /// let view = graph.view().unwrap();
    /// assert_eq!(view.shortest_path(0, 3).distance(), Some(4));
    /// assert_eq!(view.shortest_path(0, 3).path(), Some(&[3, 2, 1, 0][..]));
    /// ```
    fn shortest_path(&self, source: Node, destination: Node) -> ShortestPath<Self::Weight>;
}

impl<G> ShortestPathSearch for G
where
    G: WeightedAdjacency,
{
    fn shortest_path(&self, source: Node, destination: Node) -> ShortestPath<Self::Weight> {
        assert!(source < self.number_of_nodes() && destination < self.number_of_nodes());

        let bounds = self.bounds();
        if source == destination {
            return ShortestPath::Found {
                path: vec![source],
                distance: bounds.min_value(),
            };
        }

        let mut heap = IndexedMinHeap::build(self.number_of_nodes(), source, bounds);
        let mut predecessors: Predecessors = vec![None; self.len()];

        while let Some(settled) = heap.extract_min() {
            if bounds.is_unreachable(settled.key) {
                break;
            }

            if settled.node == destination {
                let path = trace_back(&predecessors, destination);
                debug_assert_eq!(path.last(), Some(&source));
                debug!(source, destination, hops = path.len() - 1, distance = ?settled.key, "shortest path found");

                return ShortestPath::Found {
                    path,
                    distance: settled.key,
                };
            }

            relax_remaining(self, &mut heap, &mut predecessors, settled, |key, w| {
                bounds.accumulate(key, w)
            });
        }

        debug!(source, destination, "destination unreachable");
        ShortestPath::Unreachable
    }
}

/// Follows the predecessors from `destination` until a node without predecessor (the source)
/// is reached. The returned path starts at `destination`.
fn trace_back(predecessors: &Predecessors, destination: Node) -> Vec<Node> {
    let mut path = vec![destination];
    let mut u = destination;
    while let Some(pred) = predecessors[u as usize] {
        u = pred.get();
        path.push(u);
    }
    path
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::testing::*;

    #[test]
    fn fixture() {
        let graph = fixture_abcd();
        let view = graph.view().unwrap();

        assert_eq!(
            view.shortest_path(0, 3),
            ShortestPath::Found {
                path: vec![3, 2, 1, 0],
                distance: 4
            }
        );
        assert_eq!(
            view.shortest_path(3, 0),
            ShortestPath::Found {
                path: vec![0, 1, 2, 3],
                distance: 4
            }
        );
        assert_eq!(
            view.shortest_path(0, 2),
            ShortestPath::Found {
                path: vec![2, 1, 0],
                distance: 3
            }
        );
    }

    #[test]
    fn reflexive() {
        let rng = &mut seeded_rng(10);
        let graph = random_graph(rng, 15, 0.3, 1..10);
        let view = graph.view().unwrap();

        for s in 0..15 {
            assert_eq!(
                view.shortest_path(s, s),
                ShortestPath::Found {
                    path: vec![s],
                    distance: 0
                }
            );
        }

        // also holds for isolated vertices and custom sentinels
        let graph = WeightedGraph::from_edges(WeightBounds::new(5i64, 100), [(); 3], std::iter::empty())
            .unwrap();
        assert_eq!(graph.shortest_path(1, 1).unwrap().distance(), Some(5));
        assert_eq!(graph.shortest_path(1, 2), Ok(ShortestPath::Unreachable));
    }

    #[test]
    fn unreachable_iff_disconnected() {
        let rng = &mut seeded_rng(11);
        for n in [2, 5, 12] {
            for p in [0.05, 0.15, 0.3] {
                let graph = random_graph(rng, n, p, 1..10);
                let view = graph.view().unwrap();

                for (s, d) in (0..n).cartesian_product(0..n) {
                    let result = view.shortest_path(s, d);
                    assert_eq!(result.is_found(), view.is_reachable(s, d));
                }
            }
        }
    }

    #[test]
    fn optimal_against_brute_force() {
        let rng = &mut seeded_rng(12);
        for n in [3, 5, 7] {
            for p in [0.3, 0.6, 1.0] {
                for _ in 0..5 {
                    let graph = random_graph(rng, n, p, 1..6);
                    let view = graph.view().unwrap();

                    for (s, d) in (0..n).tuple_combinations() {
                        let expected = brute_force_distance(&view, s, d);

                        match view.shortest_path(s, d) {
                            ShortestPath::Found { path, distance } => {
                                assert_eq!(Some(distance), expected);
                                assert_eq!(path.first(), Some(&d));
                                assert_eq!(path.last(), Some(&s));
                                assert_eq!(path_weight(&view, &path), Some(distance));
                            }
                            ShortestPath::Unreachable => assert_eq!(expected, None),
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn equal_weights_are_resolved_deterministically() {
        // square 0-1-3 / 0-2-3 with all weights 1: both paths cost 2
        let graph = WeightedGraph::from_edges(
            WeightBounds::<u32>::default(),
            0..4,
            [(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)],
        )
        .unwrap();

        // after settling 0 the heap holds [2, 3, 1]; node 2 is relaxed at the root, node 1 is
        // lowered to the same key but stays behind it, so 2 is settled first and becomes the
        // predecessor of 3
        assert_eq!(
            graph.shortest_path(0, 3),
            Ok(ShortestPath::Found {
                path: vec![3, 2, 0],
                distance: 2
            })
        );
    }

    #[test]
    fn saturating_distances() {
        let graph = WeightedGraph::from_edges(
            WeightBounds::<u8>::default(),
            0..3,
            [(0, 1, 200), (1, 2, 100)],
        )
        .unwrap();

        // 300 does not fit into u8 and saturates to the unreachable sentinel
        assert_eq!(graph.shortest_path(0, 1).unwrap().distance(), Some(200));
        assert_eq!(graph.shortest_path(0, 2), Ok(ShortestPath::Unreachable));
    }

    #[test]
    fn float_weights() {
        let graph = WeightedGraph::from_edges(
            WeightBounds::<f64>::default(),
            ["x", "y", "z"],
            [(0, 1, 0.5), (1, 2, 0.25), (0, 2, 1.0)],
        )
        .unwrap();

        assert_eq!(
            graph.shortest_path_between(&"x", &"z"),
            Ok(ShortestPath::Found {
                path: vec![2, 1, 0],
                distance: 0.75
            })
        );
    }
}
