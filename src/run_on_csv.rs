use anyhow::{Context, Result};
use clap::Parser;
use csv::{ReaderBuilder, Writer};
use pathviz::export;
use pathviz::{distances_from, Graph, SspAlgorithm};
use std::time::Instant;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "pathviz-csv")]
#[command(about = "Build an undirected graph from a CSV with u,v,weight per row and find the shortest path between two nodes.", long_about = None)]
struct Cli {
    /// Path to the .csv file
    #[arg(short, long)]
    csv: String,

    #[arg(short, long)]
    source: String,

    #[arg(short, long)]
    target: String,

    #[arg(short, long, default_value_t = SspAlgorithm::Dijkstra)]
    algorithm: SspAlgorithm,

    /// Number of timed runs of the same search.
    #[arg(short, long, default_value_t = 1)]
    num_runs: usize,

    /// Output CSV (node_id, distance) with final distances from the source to every node.
    #[arg(short, long)]
    out: Option<String>,

    /// Include unreachable nodes in output with infinite distance
    #[arg(long, default_value_t = false)]
    include_unreachable: bool,
}

fn parse_csv_and_build_graph(path: &str) -> Result<Graph<String>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true) // important: skip header line
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path))?;

    let mut graph = Graph::new();
    for (line, result) in rdr.records().enumerate() {
        let record = result?;
        let field = |i: usize| {
            record
                .get(i)
                .with_context(|| format!("row {}: missing column {}", line + 1, i))
        };
        let u = field(0)?.to_string();
        let v = field(1)?.to_string();
        let weight: f64 = field(2)?
            .parse()
            .with_context(|| format!("row {}: bad weight", line + 1))?;
        graph.add_node(u.clone());
        graph.add_node(v.clone());
        graph
            .add_edge(u, v, weight)
            .with_context(|| format!("row {}", line + 1))?;
    }
    Ok(graph)
}

fn main() -> Result<()> {
    pathviz::init_tracing();
    let cli = Cli::parse();

    let graph = parse_csv_and_build_graph(&cli.csv)?;
    info!(
        "Graph: {} nodes, {} undirected edges",
        graph.node_count(),
        graph.edge_count()
    );

    let mut duration_millis = Vec::with_capacity(cli.num_runs);
    let mut last = None;
    for _ in 0..cli.num_runs.max(1) {
        let now = Instant::now();
        let result = cli.algorithm.run(&graph, &cli.source, &cli.target)?;
        duration_millis.push(now.elapsed().as_secs_f64() * 1000.0);
        last = Some(result);
    }
    info!("run times (ms): {:?}", duration_millis);

    let Some(result) = last else {
        return Ok(());
    };

    if let Some(out_path) = &cli.out {
        // The path search stops at the target, so the export gets its own full search.
        let distances = distances_from(&graph, &cli.source)?;
        let mut wtr =
            Writer::from_path(out_path).with_context(|| format!("creating CSV {}", out_path))?;
        let written = export::write_distances(&mut wtr, &distances, cli.include_unreachable)?;
        println!("Wrote distances for {} nodes to {}", written, out_path);
    }

    if result.is_reachable() {
        println!("Path: {}", result.path.join(" -> "));
        println!("Cost: {}", result.total_cost);
    } else {
        println!("No path exists between {} and {}", cli.source, cli.target);
    }

    Ok(())
}
