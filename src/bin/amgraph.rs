//! Console front end: builds a graph, prints it, runs a depth-first search and
//! reports connectivity.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use amgraph::{GraphSpec, SearchTree};

#[derive(Parser, Debug)]
#[command(name = "amgraph")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON graph description (`{"vertices": N, "edges": [[u, v], ...]}`).
    /// Defaults to the built-in 13-vertex sample graph.
    #[arg(short, long)]
    graph: Option<PathBuf>,

    /// Show each edge's label initial in the adjacency matrix.
    #[arg(short, long)]
    labels: bool,

    /// Also build a binary search tree from these values and print it in order.
    #[arg(short, long, num_args = 1.., allow_negative_numbers = true)]
    tree: Vec<i64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let spec = match &args.graph {
        Some(path) => GraphSpec::from_path(path)
            .with_context(|| format!("failed to load graph description {}", path.display()))?,
        None => GraphSpec::sample(),
    };
    tracing::info!(vertices = spec.vertices, edges = spec.edges.len(), "loaded graph description");

    let mut graph = spec.build().context("invalid graph description")?;

    println!("Edges: {}", graph.edge_count());
    for e in graph.edges() {
        println!("{e}");
    }
    println!();

    println!("Vertices: {}", graph.vertex_count());
    for v in graph.vertices() {
        println!("{v}");
    }
    println!();

    let n = graph.vertex_count();
    println!("Adjacency matrix: {n}x{n}");
    if args.labels {
        print!("{:#}", graph.display_matrix());
    } else {
        print!("{}", graph.display_matrix());
    }
    println!();

    let forest = graph.depth_first_search();
    println!("DFS edges:");
    for &id in forest.discovery_edges() {
        println!("{}", graph.edge(id));
    }
    println!();

    if args.labels {
        println!("Adjacency matrix after DFS:");
        print!("{:#}", graph.display_matrix());
        println!();
    }

    println!("Graph is connected: {}", forest.is_spanning_tree(n));

    if !args.tree.is_empty() {
        let tree: SearchTree<i64> = args.tree.iter().copied().collect();
        println!();
        println!("Search tree: {} node(s)", tree.len());
        println!("{tree}");
    }

    Ok(())
}
