use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("unknown node: {0}")]
    UnknownNode(String),
    #[error("invalid edge weight {weight} between {u} and {v}: weights must be finite and non-negative")]
    InvalidWeight { u: String, v: String, weight: f64 },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("algorithm not found for input string: {0}, possible options are: (\"dijkstra\", \"indexed\")")]
    UnknownAlgorithm(String),
}

impl GraphError {
    pub(crate) fn unknown_node<N: std::fmt::Debug>(node: &N) -> Self {
        GraphError::UnknownNode(format!("{:?}", node))
    }
}
