use crate::error::GraphError;
use hashbrown::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

pub type Cost = f64;

/// An undirected weighted edge, recorded once in insertion order.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge<N> {
    pub u: N,
    pub v: N,
    pub weight: Cost,
}

/// One entry of a node's adjacency list.
#[derive(Clone, Debug, PartialEq)]
pub struct Neighbor<N> {
    pub node: N,
    pub weight: Cost,
}

/// Weighted undirected graph.
///
/// Every edge is stored twice in the adjacency map (once per endpoint) and once in `edges`.
/// Nodes keep their insertion order so that searches initialize deterministically.
#[derive(Clone, Debug)]
pub struct Graph<N> {
    adj: HashMap<N, Vec<Neighbor<N>>>,
    nodes: Vec<N>,
    edges: Vec<Edge<N>>,
}

impl<N> Default for Graph<N> {
    fn default() -> Self {
        Self {
            adj: HashMap::new(),
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }
}

impl<N: Clone + Eq + Hash + Debug> Graph<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `node` if it is not present yet. Returns whether it was added.
    pub fn add_node(&mut self, node: N) -> bool {
        if self.adj.contains_key(&node) {
            return false;
        }
        self.adj.insert(node.clone(), Vec::new());
        self.nodes.push(node);
        true
    }

    /// Adds an undirected edge between two existing nodes.
    pub fn add_edge(&mut self, u: N, v: N, weight: Cost) -> Result<(), GraphError> {
        for endpoint in [&u, &v] {
            if !self.adj.contains_key(endpoint) {
                return Err(GraphError::unknown_node(endpoint));
            }
        }
        if !(weight.is_finite() && weight >= 0.0) {
            return Err(GraphError::InvalidWeight {
                u: format!("{:?}", u),
                v: format!("{:?}", v),
                weight,
            });
        }

        if let Some(list) = self.adj.get_mut(&u) {
            list.push(Neighbor {
                node: v.clone(),
                weight,
            });
        }
        if let Some(list) = self.adj.get_mut(&v) {
            list.push(Neighbor {
                node: u.clone(),
                weight,
            });
        }
        self.edges.push(Edge { u, v, weight });
        Ok(())
    }

    pub fn contains(&self, node: &N) -> bool {
        self.adj.contains_key(node)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Neighbors of `node`, empty if the node is absent.
    pub fn neighbors(&self, node: &N) -> &[Neighbor<N>] {
        self.adj.get(node).map(|list| list.as_slice()).unwrap_or(&[])
    }

    /// Edges in insertion order, each undirected edge once.
    pub fn edges(&self) -> &[Edge<N>] {
        &self.edges
    }

    pub fn has_edge(&self, u: &N, v: &N) -> bool {
        self.neighbors(u).iter().any(|n| &n.node == v)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph<&'static str> {
        let mut g = Graph::new();
        for n in ["A", "B", "C"] {
            g.add_node(n);
        }
        g.add_edge("A", "B", 1.0).unwrap();
        g.add_edge("B", "C", 1.0).unwrap();
        g.add_edge("A", "C", 5.0).unwrap();
        g
    }

    #[test]
    fn add_node_is_idempotent() {
        let mut g = Graph::new();
        assert!(g.add_node("A"));
        assert!(g.add_node("B"));
        assert!(!g.add_node("A"));
        assert_eq!(g.nodes(), &["A", "B"]);
    }

    #[test]
    fn edges_are_symmetric() {
        let g = triangle();
        assert_eq!(g.edge_count(), 3);
        for edge in g.edges() {
            let forward = Neighbor {
                node: edge.v,
                weight: edge.weight,
            };
            let backward = Neighbor {
                node: edge.u,
                weight: edge.weight,
            };
            assert!(g.neighbors(&edge.u).contains(&forward));
            assert!(g.neighbors(&edge.v).contains(&backward));
        }
        assert!(g.has_edge(&"C", &"A"));
        assert_eq!(g.neighbors(&"A").len(), 2);
    }

    #[test]
    fn edges_keep_insertion_order() {
        let g = triangle();
        let pairs: Vec<_> = g.edges().iter().map(|e| (e.u, e.v)).collect();
        assert_eq!(pairs, vec![("A", "B"), ("B", "C"), ("A", "C")]);
    }

    #[test]
    fn neighbors_of_absent_node_is_empty() {
        let g = triangle();
        assert!(g.neighbors(&"Z").is_empty());
        assert!(!g.contains(&"Z"));
    }

    #[test]
    fn edge_to_unknown_node_fails() {
        let mut g = triangle();
        let err = g.add_edge("A", "Z", 1.0).unwrap_err();
        assert!(matches!(err, GraphError::UnknownNode(_)));
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.neighbors(&"A").len(), 2);
    }

    #[test]
    fn negative_nan_or_infinite_weight_fails() {
        let mut g = triangle();
        assert!(matches!(
            g.add_edge("A", "B", f64::INFINITY),
            Err(GraphError::InvalidWeight { .. })
        ));
        assert!(matches!(
            g.add_edge("A", "B", -1.0),
            Err(GraphError::InvalidWeight { .. })
        ));
        assert!(matches!(
            g.add_edge("A", "B", f64::NAN),
            Err(GraphError::InvalidWeight { .. })
        ));
        g.add_edge("A", "B", 0.0).unwrap();
        assert_eq!(g.edge_count(), 4);
    }
}
