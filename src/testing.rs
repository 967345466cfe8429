//! Fixtures and brute-force reference implementations shared by the unit tests.

use std::ops::Range;

use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

use crate::prelude::*;

pub fn seeded_rng(seed: u64) -> Pcg64Mcg {
    Pcg64Mcg::seed_from_u64(seed)
}

/// Vertices `{A, B, C, D}` with edges `A-B=1, B-C=2, A-C=4, C-D=1`
pub fn fixture_abcd() -> WeightedGraph<char, u32> {
    WeightedGraph::from_edges(
        WeightBounds::default(),
        ['A', 'B', 'C', 'D'],
        [(0, 1, 1), (1, 2, 2), (0, 2, 4), (2, 3, 1)],
    )
    .unwrap()
}

/// G(n,p) graph with vertex values `0..n` where every edge gets a uniform weight from `weights`.
/// The returned graph is already rebuilt.
pub fn random_graph<R: Rng>(
    rng: &mut R,
    n: NumNodes,
    p: f64,
    weights: Range<u32>,
) -> WeightedGraph<Node, u32> {
    let edges = (0..n)
        .tuple_combinations()
        .filter_map(|(u, v)| {
            if rng.random_bool(p) {
                Some((u, v, rng.random_range(weights.clone())))
            } else {
                None
            }
        })
        .collect_vec();

    WeightedGraph::from_edges(WeightBounds::default(), 0..n, edges).unwrap()
}

/// Total weight of a path given as node sequence, or `None` if some hop is not an edge
pub fn path_weight<G: WeightedAdjacency<Weight = u32>>(graph: &G, path: &[Node]) -> Option<u32> {
    path.iter()
        .tuple_windows()
        .map(|(&u, &v)| graph.has_edge(u, v).then(|| graph.weight_of(u, v)))
        .sum()
}

/// Shortest distance by enumerating all simple paths from `s` to `d`
pub fn brute_force_distance<G: WeightedAdjacency<Weight = u32>>(
    graph: &G,
    s: Node,
    d: Node,
) -> Option<u32> {
    fn walk<G: WeightedAdjacency<Weight = u32>>(
        graph: &G,
        path: &mut Vec<Node>,
        d: Node,
        best: &mut Option<u32>,
    ) {
        let u = *path.last().unwrap();
        if u == d {
            let w = path_weight(graph, path).unwrap();
            *best = Some(best.map_or(w, |b| b.min(w)));
            return;
        }

        for (v, _) in graph.weighted_neighbors_of(u).collect_vec() {
            if !path.contains(&v) {
                path.push(v);
                walk(graph, path, d, best);
                path.pop();
            }
        }
    }

    let mut best = None;
    walk(graph, &mut vec![s], d, &mut best);
    best
}

/// Weight of a minimum spanning forest computed by Kruskal's algorithm,
/// or `None` if the graph is not connected
pub fn kruskal_weight<V>(graph: &WeightedGraph<V, u32>) -> Option<u32> {
    let n = graph.len();
    let mut parent = (0..n).collect_vec();

    fn find(parent: &mut [usize], mut u: usize) -> usize {
        while parent[u] != u {
            parent[u] = parent[parent[u]];
            u = parent[u];
        }
        u
    }

    let mut total = 0;
    let mut joined = 0;
    for e in graph.edges().sorted_by_key(|e| e.weight()) {
        let a = find(&mut parent, e.first() as usize);
        let b = find(&mut parent, e.second() as usize);
        if a != b {
            parent[a] = b;
            total += e.weight();
            joined += 1;
        }
    }

    (joined + 1 >= n).then_some(total)
}
