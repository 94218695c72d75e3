/*
Random connected graph generator.

Nodes are labelled A, B, ..., Z, AA, AB, ... A chain through all nodes in label order keeps the
graph connected, then random non-adjacent pairs are joined until the edge count reaches
floor(n * (n - 1) / 2 * density). Weights are uniform integers in [min_weight, max_weight].
*/

use crate::error::GraphError;
use crate::graph::{Cost, Graph};
use rand::Rng;
use tracing::debug;

#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    pub node_count: usize,
    pub density: f64,
    pub min_weight: u32,
    pub max_weight: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            node_count: 8,
            density: 0.3,
            min_weight: 1,
            max_weight: 15,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), GraphError> {
        if self.node_count == 0 {
            return Err(GraphError::InvalidConfig("node count must be at least 1".to_string()));
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(GraphError::InvalidConfig(format!(
                "density {} is outside [0, 1]",
                self.density
            )));
        }
        if self.min_weight > self.max_weight {
            return Err(GraphError::InvalidConfig(format!(
                "min weight {} is greater than max weight {}",
                self.min_weight, self.max_weight
            )));
        }
        Ok(())
    }

    /// Edge count the generator aims for, never below the connecting chain.
    pub fn target_edges(&self) -> usize {
        let n = self.node_count;
        let max_edges = n * n.saturating_sub(1) / 2;
        let target = (max_edges as f64 * self.density).floor() as usize;
        target.clamp(n.saturating_sub(1), max_edges)
    }
}

/// Spreadsheet-style column label for index `i`: 0 -> A, 25 -> Z, 26 -> AA.
pub fn node_label(mut i: usize) -> String {
    let mut label = Vec::new();
    loop {
        label.push(b'A' + (i % 26) as u8);
        if i < 26 {
            break;
        }
        i = i / 26 - 1;
    }
    label.reverse();
    String::from_utf8_lossy(&label).into_owned()
}

fn random_weight<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Cost {
    rng.gen_range(config.min_weight..=config.max_weight) as Cost
}

pub fn generate<R: Rng>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Graph<String>, GraphError> {
    config.validate()?;

    let mut graph = Graph::new();
    let nodes: Vec<String> = (0..config.node_count).map(node_label).collect();
    for node in &nodes {
        graph.add_node(node.clone());
    }

    for pair in nodes.windows(2) {
        let weight = random_weight(config, rng);
        graph.add_edge(pair[0].clone(), pair[1].clone(), weight)?;
    }

    let target = config.target_edges();
    while graph.edge_count() < target {
        let i = rng.gen_range(0..nodes.len());
        let j = rng.gen_range(0..nodes.len());
        if i == j || graph.has_edge(&nodes[i], &nodes[j]) {
            continue;
        }
        let weight = random_weight(config, rng);
        graph.add_edge(nodes[i].clone(), nodes[j].clone(), weight)?;
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "generated random graph"
    );
    Ok(graph)
}
