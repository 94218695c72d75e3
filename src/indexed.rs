// Dijkstra over an indexed heap with decrease-key, so each node is queued at most once.
use crate::dijkstra::{check_endpoints, init_maps, SearchResult};
use crate::error::GraphError;
use crate::graph::{Cost, Graph};
use hashbrown::HashSet;
use orx_priority_queue::*;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::{debug, trace};

/// Same contract as [`crate::dijkstra::shortest_path`].
///
/// The queue holds one entry per frontier node.
pub fn shortest_path<N: Clone + Eq + Hash + Debug>(
    graph: &Graph<N>,
    source: &N,
    target: &N,
) -> Result<SearchResult<N>, GraphError> {
    check_endpoints(graph, source, target)?;
    debug!(?source, ?target, nodes = graph.node_count(), "starting indexed search");

    let (mut dist, mut prev) = init_maps(graph, source);
    let mut visited = HashSet::with_capacity(graph.node_count());
    let mut pq: BinaryHeapWithMap<N, Cost> = BinaryHeapWithMap::new();
    pq.push(source.clone(), 0.0);

    while let Some((u, d)) = pq.pop() {
        visited.insert(u.clone());
        if &u == target {
            break;
        }

        for neighbor in graph.neighbors(&u) {
            if visited.contains(&neighbor.node) {
                continue;
            }
            let candidate = d + neighbor.weight;
            let current = dist.get(&neighbor.node).copied().unwrap_or(Cost::INFINITY);
            // Queued keys always equal `dist`, so the key only ever strictly decreases here.
            if candidate < current {
                trace!(node = ?neighbor.node, from = ?u, candidate, "relaxed");
                dist.insert(neighbor.node.clone(), candidate);
                prev.insert(neighbor.node.clone(), Some(u.clone()));
                pq.decrease_key_or_push(&neighbor.node, candidate);
            }
        }
    }

    let result = SearchResult::from_maps(dist, prev, source, target);
    debug!(
        visited = visited.len(),
        hops = result.hop_count(),
        total_cost = result.total_cost,
        "indexed search finished"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dijkstra;
    use crate::dijkstra::tests::{brute_force_cost, graph_from, path_cost, random_graph};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn it_works() {
        let g = graph_from(&["A", "B", "C"], &[("A", "B", 1.0), ("B", "C", 1.0), ("A", "C", 5.0)]);
        let result = shortest_path(&g, &"A", &"C").unwrap();
        assert_eq!(result.path, vec!["A", "B", "C"]);
        assert_eq!(result.total_cost, 2.0);
    }

    #[test]
    fn unreachable_and_unknown() {
        let g = graph_from(&["A", "B"], &[]);
        let result = shortest_path(&g, &"A", &"B").unwrap();
        assert!(result.path.is_empty());
        assert_eq!(result.total_cost, f64::INFINITY);
        assert!(matches!(shortest_path(&g, &"A", &"Q"), Err(GraphError::UnknownNode(_))));
    }

    #[test]
    fn agrees_with_lazy_heap_search() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let n = rng.gen_range(2..8);
            let g = random_graph(&mut rng, n, 0.5);
            let source = rng.gen_range(0..n);
            let target = rng.gen_range(0..n);

            let lazy = dijkstra::shortest_path(&g, &source, &target).unwrap();
            let indexed = shortest_path(&g, &source, &target).unwrap();
            assert_eq!(indexed.total_cost, lazy.total_cost);
            assert_eq!(indexed.total_cost, brute_force_cost(&g, source, target));
            assert_eq!(indexed.path.is_empty(), lazy.path.is_empty());
            if !indexed.path.is_empty() {
                assert_eq!(indexed.path.first(), Some(&source));
                assert_eq!(path_cost(&g, &indexed.path), indexed.total_cost);
            }
        }
    }
}
