pub mod algorithm;
pub mod dijkstra;
pub mod error;
pub mod export;
pub mod generator;
pub mod graph;
pub mod indexed;
pub mod layout;
pub mod min_heap;
pub mod replay;

pub use algorithm::SspAlgorithm;
pub use dijkstra::{distances_from, shortest_path, SearchResult};
pub use error::GraphError;
pub use graph::{Cost, Edge, Graph, Neighbor};
pub use min_heap::MinHeap;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs a fmt subscriber filtered by `RUST_LOG`, `info` when unset.
pub fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init();
}
