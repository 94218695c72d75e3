use anyhow::{bail, Context, Result};
use clap::Parser;
use csv::Writer;
use pathviz::export;
use pathviz::generator::{self, GeneratorConfig};
use pathviz::layout::{self, Canvas, Layout};
use pathviz::replay::{PathReplay, ReplayFrame};
use pathviz::{distances_from, Graph, SspAlgorithm};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "pathviz")]
#[command(about = "Generate a random weighted graph, find the shortest path between two nodes and replay it.", long_about = None)]
struct Cli {
    /// Number of nodes to generate
    #[arg(short, long, default_value_t = 8)]
    nodes: usize,

    /// Fraction of all possible edges to generate, in [0, 1]
    #[arg(short, long, default_value_t = 0.3)]
    density: f64,

    /// Seed for the graph and layout. Random if omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Source node label. Defaults to the first node.
    #[arg(short, long)]
    source: Option<String>,

    /// Target node label. Defaults to the second node.
    #[arg(short, long)]
    target: Option<String>,

    #[arg(short, long, default_value_t = SspAlgorithm::Dijkstra)]
    algorithm: SspAlgorithm,

    /// Delay between replay frames; 0 prints all frames at once.
    #[arg(long, default_value_t = 800)]
    step_delay_ms: u64,

    /// Output CSV (node_id, distance) with final distances from the source to every node.
    #[arg(short, long)]
    out: Option<String>,

    /// Output CSV (node_id, x, y) with the canvas layout.
    #[arg(long)]
    layout_out: Option<String>,

    /// Include unreachable nodes in the distance output with infinite distance
    #[arg(long, default_value_t = false)]
    include_unreachable: bool,
}

/// Resolves source and target, defaulting to the first and second node. They must differ.
fn pick_endpoints(
    graph: &Graph<String>,
    source: Option<String>,
    target: Option<String>,
) -> Result<(String, String)> {
    let pick = |requested: Option<String>, index: usize| -> Result<String> {
        match requested {
            Some(label) => Ok(label),
            None => graph
                .nodes()
                .get(index)
                .cloned()
                .with_context(|| format!("graph has no node at position {}", index)),
        }
    };
    let source = pick(source, 0)?;
    let target = pick(target, 1)?;
    if source == target {
        bail!("source and destination must be different");
    }
    Ok((source, target))
}

fn write_layout<W: io::Write>(
    wtr: &mut Writer<W>,
    graph: &Graph<String>,
    positions: &Layout<String>,
) -> Result<()> {
    wtr.write_record(["node_id", "x", "y"])?;
    for node in graph.nodes() {
        if let Some(p) = positions.get(node) {
            wtr.write_record([node.clone(), format!("{:.2}", p.x), format!("{:.2}", p.y)])?;
        }
    }
    wtr.flush()?;
    Ok(())
}

fn frame_line(frame: &ReplayFrame<'_, String>) -> String {
    match frame.current {
        Some(current) => format!(
            "step {}: [{}] -> {}",
            frame.step,
            frame.visible.join(" -> "),
            current
        ),
        None => format!("done: {}", frame.visible.join(" -> ")),
    }
}

fn replay<W: Write>(out: &mut W, path: &[String], delay: Duration) -> io::Result<()> {
    for frame in PathReplay::new(path) {
        writeln!(out, "{}", frame_line(&frame))?;
        out.flush()?;
        if !frame.is_final() && !delay.is_zero() {
            thread::sleep(delay);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    pathviz::init_tracing();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let config = GeneratorConfig {
        node_count: cli.nodes,
        density: cli.density,
        ..Default::default()
    };
    let graph = generator::generate(&config, &mut rng).context("generating graph")?;
    let positions = layout::circular_layout(graph.nodes(), &Canvas::default(), &mut rng);

    println!("Nodes: {}", graph.node_count());
    println!("Edges: {}", graph.edge_count());
    for edge in graph.edges() {
        println!("  {} - {} ({})", edge.u, edge.v, edge.weight);
    }

    if let Some(layout_path) = &cli.layout_out {
        let mut wtr = Writer::from_path(layout_path)
            .with_context(|| format!("creating CSV {}", layout_path))?;
        write_layout(&mut wtr, &graph, &positions)?;
        info!("wrote layout for {} nodes to {}", positions.len(), layout_path);
    }

    let (source, target) = pick_endpoints(&graph, cli.source, cli.target)?;

    let now = Instant::now();
    let result = cli
        .algorithm
        .run(&graph, &source, &target)
        .with_context(|| format!("searching from {} to {}", source, target))?;
    info!("{} search took {} s", cli.algorithm, now.elapsed().as_secs_f64());

    if let Some(out_path) = &cli.out {
        // The path search stops at the target, so the export gets its own full search.
        let distances = distances_from(&graph, &source)?;
        let mut wtr =
            Writer::from_path(out_path).with_context(|| format!("creating CSV {}", out_path))?;
        let written = export::write_distances(&mut wtr, &distances, cli.include_unreachable)?;
        info!("wrote distances for {} nodes to {}", written, out_path);
    }

    if !result.is_reachable() {
        println!("No path exists between {} and {}", source, target);
        return Ok(());
    }

    println!("Path length: {}", result.path.len());
    println!("Path cost: {:.1}", result.total_cost);
    replay(
        &mut io::stdout().lock(),
        &result.path,
        Duration::from_millis(cli.step_delay_ms),
    )?;

    Ok(())
}
