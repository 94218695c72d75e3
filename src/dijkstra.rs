use crate::error::GraphError;
use crate::graph::{Cost, Graph};
use crate::min_heap::MinHeap;
use hashbrown::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;
use tracing::{debug, trace};

/// Outcome of a single-source search towards one target.
///
/// `distances` and `predecessors` cover every node of the graph. Nodes that were never reached, or
/// whose distance was not finalized before the search stopped at the target, may still hold
/// `f64::INFINITY` or a tentative value. An unreachable target gives an empty `path` and an
/// infinite `total_cost`.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult<N: Eq + Hash> {
    pub distances: HashMap<N, Cost>,
    pub predecessors: HashMap<N, Option<N>>,
    pub path: Vec<N>,
    pub total_cost: Cost,
}

impl<N: Clone + Eq + Hash> SearchResult<N> {
    pub(crate) fn from_maps(
        distances: HashMap<N, Cost>,
        predecessors: HashMap<N, Option<N>>,
        source: &N,
        target: &N,
    ) -> Self {
        let path = reconstruct_path(&predecessors, source, target);
        let total_cost = distances.get(target).copied().unwrap_or(Cost::INFINITY);
        Self {
            distances,
            predecessors,
            path,
            total_cost,
        }
    }

    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }

    pub fn distance(&self, node: &N) -> Option<Cost> {
        self.distances.get(node).copied()
    }

    pub fn predecessor(&self, node: &N) -> Option<&N> {
        self.predecessors.get(node).and_then(|p| p.as_ref())
    }

    /// Number of edges on the path, zero when unreachable.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Walks predecessor links back from `target`. Empty if the walk does not end at `source`.
pub(crate) fn reconstruct_path<N: Clone + Eq + Hash>(
    predecessors: &HashMap<N, Option<N>>,
    source: &N,
    target: &N,
) -> Vec<N> {
    let mut path = Vec::new();
    let mut at = Some(target.clone());
    while let Some(node) = at {
        at = predecessors.get(&node).cloned().flatten();
        path.push(node);
        // Predecessor links form a tree rooted at the source, so this only guards corrupt input.
        if path.len() > predecessors.len() {
            return Vec::new();
        }
    }
    path.reverse();

    if path.first() != Some(source) {
        return Vec::new();
    }
    path
}

pub(crate) fn check_endpoints<N: Clone + Eq + Hash + Debug>(
    graph: &Graph<N>,
    source: &N,
    target: &N,
) -> Result<(), GraphError> {
    for node in [source, target] {
        if !graph.contains(node) {
            return Err(GraphError::unknown_node(node));
        }
    }
    Ok(())
}

pub(crate) fn init_maps<N: Clone + Eq + Hash + Debug>(
    graph: &Graph<N>,
    source: &N,
) -> (HashMap<N, Cost>, HashMap<N, Option<N>>) {
    let mut dist = HashMap::with_capacity(graph.node_count());
    let mut prev = HashMap::with_capacity(graph.node_count());
    for node in graph.nodes() {
        dist.insert(node.clone(), Cost::INFINITY);
        prev.insert(node.clone(), None);
    }
    dist.insert(source.clone(), 0.0);
    (dist, prev)
}

/// Settles nodes in distance order from `source`. Stops once `target` is settled, or runs until
/// the queue is empty when there is no target. Returns the number of settled nodes.
fn settle<N: Clone + Eq + Hash + Debug>(
    graph: &Graph<N>,
    source: &N,
    target: Option<&N>,
    dist: &mut HashMap<N, Cost>,
    prev: &mut HashMap<N, Option<N>>,
) -> usize {
    let mut visited = HashSet::with_capacity(graph.node_count());
    let mut heap = MinHeap::new();
    heap.insert(source.clone(), 0.0);

    while let Some((u, d)) = heap.extract_min() {
        if visited.contains(&u) {
            continue;
        }
        visited.insert(u.clone());

        if Some(&u) == target {
            break;
        }

        for neighbor in graph.neighbors(&u) {
            if visited.contains(&neighbor.node) {
                continue;
            }
            let candidate = d + neighbor.weight;
            let current = dist.get(&neighbor.node).copied().unwrap_or(Cost::INFINITY);
            if candidate < current {
                trace!(node = ?neighbor.node, from = ?u, candidate, "relaxed");
                dist.insert(neighbor.node.clone(), candidate);
                prev.insert(neighbor.node.clone(), Some(u.clone()));
                heap.insert(neighbor.node.clone(), candidate);
            }
        }
    }
    visited.len()
}

/// Dijkstra from `source`, stopping as soon as `target` is settled.
///
/// Uses [`MinHeap`] without decrease-key: improved distances are pushed again and stale entries
/// are dropped when popped for an already visited node.
pub fn shortest_path<N: Clone + Eq + Hash + Debug>(
    graph: &Graph<N>,
    source: &N,
    target: &N,
) -> Result<SearchResult<N>, GraphError> {
    check_endpoints(graph, source, target)?;
    debug!(?source, ?target, nodes = graph.node_count(), "starting search");

    let (mut dist, mut prev) = init_maps(graph, source);
    let visited = settle(graph, source, Some(target), &mut dist, &mut prev);

    let result = SearchResult::from_maps(dist, prev, source, target);
    debug!(
        visited,
        hops = result.hop_count(),
        total_cost = result.total_cost,
        "search finished"
    );
    Ok(result)
}

/// Final shortest distances from `source` to every node, `f64::INFINITY` for unreachable ones.
///
/// Unlike [`shortest_path`] this never stops early, so every value is final.
pub fn distances_from<N: Clone + Eq + Hash + Debug>(
    graph: &Graph<N>,
    source: &N,
) -> Result<HashMap<N, Cost>, GraphError> {
    check_endpoints(graph, source, source)?;
    let (mut dist, mut prev) = init_maps(graph, source);
    let visited = settle(graph, source, None, &mut dist, &mut prev);
    debug!(?source, visited, "computed all distances");
    Ok(dist)
}
