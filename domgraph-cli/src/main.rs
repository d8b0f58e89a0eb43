//! Command-line driver for the domgraph library.
//!
//! Reads a graph from standard input in the line-oriented declaration
//! format (vertex first, successors after, blank line terminates), writes
//! the DOT export of the graph to stdout or a file, and optionally writes
//! dominator- and post-dominator-tree exports to files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use domgraph::prelude::*;

/// domgraph - directed-graph analysis: topological order, dominator and
/// post-dominator trees, DOT export
#[derive(Debug, Parser)]
#[command(name = "domgraph", version, about, long_about = None)]
struct Cli {
    /// Write the graph DOT export to FILE instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Write the dominator tree DOT export to FILE.
    #[arg(long, value_name = "FILE")]
    domtree: Option<PathBuf>,

    /// Write the post-dominator tree DOT export to FILE.
    #[arg(long, value_name = "FILE")]
    pdomtree: Option<PathBuf>,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long)]
    verbose: bool,
}

fn write_dot(path: &Path, dot: &str) -> anyhow::Result<()> {
    fs::write(path, dot).with_context(|| format!("could not write {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Library logs go to stderr; --verbose enables debug; RUST_LOG overrides.
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_module("domgraph", level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let stdin = io::stdin();
    let graph: DirectedGraph<u64> =
        read_graph(stdin.lock()).context("could not read graph from stdin")?;
    log::debug!(
        "read graph: {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let dot = graph.to_dot("Graph", true);
    match &cli.output {
        Some(path) => write_dot(path, &dot)?,
        None => print!("{dot}"),
    }

    if let Some(path) = &cli.domtree {
        let tree = graph.dominator_tree();
        write_dot(path, &tree.to_dot("Dominator Tree", false))?;
    }

    if let Some(path) = &cli.pdomtree {
        let tree = graph.post_dominator_tree();
        write_dot(path, &tree.to_dot("Post Dominator Tree", false))?;
    }

    Ok(())
}
