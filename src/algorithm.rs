use crate::dijkstra::{self, SearchResult};
use crate::error::GraphError;
use crate::graph::Graph;
use crate::indexed;
use std::fmt::{self, Debug};
use std::hash::Hash;
use std::str::FromStr;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SspAlgorithm {
    /// Binary heap with lazily skipped stale entries.
    #[default]
    Dijkstra,
    /// Indexed heap with decrease-key.
    Indexed,
}

impl SspAlgorithm {
    pub fn run<N: Clone + Eq + Hash + Debug>(
        &self,
        graph: &Graph<N>,
        source: &N,
        target: &N,
    ) -> Result<SearchResult<N>, GraphError> {
        match self {
            SspAlgorithm::Dijkstra => dijkstra::shortest_path(graph, source, target),
            SspAlgorithm::Indexed => indexed::shortest_path(graph, source, target),
        }
    }
}

impl FromStr for SspAlgorithm {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dijkstra" => Ok(SspAlgorithm::Dijkstra),
            "indexed" => Ok(SspAlgorithm::Indexed),
            _ => Err(GraphError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for SspAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SspAlgorithm::Dijkstra => write!(f, "dijkstra"),
            SspAlgorithm::Indexed => write!(f, "indexed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dijkstra::tests::graph_from;

    #[test]
    fn parses_names() {
        assert_eq!("dijkstra".parse::<SspAlgorithm>().unwrap(), SspAlgorithm::Dijkstra);
        assert_eq!("indexed".parse::<SspAlgorithm>().unwrap(), SspAlgorithm::Indexed);
        assert!(matches!(
            "bmssp".parse::<SspAlgorithm>(),
            Err(GraphError::UnknownAlgorithm(_))
        ));
        assert_eq!(SspAlgorithm::Indexed.to_string(), "indexed");
    }

    #[test]
    fn both_algorithms_find_the_same_path() {
        let g = graph_from(&["A", "B"], &[("A", "B", 7.0)]);
        for algorithm in [SspAlgorithm::Dijkstra, SspAlgorithm::Indexed] {
            let result = algorithm.run(&g, &"A", &"B").unwrap();
            assert_eq!(result.path, vec!["A", "B"]);
            assert_eq!(result.total_cost, 7.0);
        }
    }
}
