use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use graphx::{Bfs, Dijkstra, Distance, Graph, ShortestPaths};

/// Reads an edge list from stdin and prints the hop and weighted distance between two nodes.
///
/// Input: `n m`, then `m` pairs `u v` of integer node keys, then `start end`. Every edge has
/// weight one. Prints the BFS distance and then the Dijkstra distance, one per line, with `0`
/// standing for an unreachable target.
#[derive(Parser, Debug)]
#[command(name = "graphx")]
#[command(about = "Shortest hop and weighted distance between two nodes", long_about = None)]
struct Args {
    /// Treat edges as one-way instead of undirected
    #[arg(long)]
    directed: bool,

    /// Log filter, overrides RUST_LOG (logs go to stderr)
    #[arg(long)]
    log_level: Option<String>,
}

/// Whitespace separated integers of the input.
struct Tokens<'a>(std::str::SplitWhitespace<'a>);

impl<'a> Tokens<'a> {
    fn next_int(&mut self, what: &str) -> Result<Option<i64>> {
        self.0
            .next()
            .map(|token| {
                token
                    .parse::<i64>()
                    .with_context(|| format!("invalid {what}: {token:?}"))
            })
            .transpose()
    }

    fn expect_int(&mut self, what: &str) -> Result<i64> {
        self.next_int(what)?
            .with_context(|| format!("unexpected end of input, expected {what}"))
    }
}

/// Solves one input. Returns `None` if the input does not start with an integer.
fn solve(input: &str, directed: bool) -> Result<Option<(Distance, Distance)>> {
    let mut tokens = Tokens(input.split_whitespace());

    let Some(Ok(nodes)) = tokens.0.next().map(str::parse::<i64>) else {
        return Ok(None);
    };
    let edges = tokens.expect_int("edge count")?;

    // The declared counts are untrusted; no more nodes can appear than there are tokens left.
    let remaining = i64::try_from(tokens.0.clone().count()).unwrap_or(i64::MAX);
    let hint = nodes.clamp(0, edges.max(0).saturating_mul(2).min(remaining));
    let mut graph = Graph::with_capacity(usize::try_from(hint).unwrap_or(0), directed);
    for i in 0..edges {
        let u = tokens.expect_int(&format!("source of edge {i}"))?;
        let v = tokens.expect_int(&format!("target of edge {i}"))?;
        graph.add_unit_edge(u, v);
    }

    let start = tokens.expect_int("start node")?;
    let end = tokens.expect_int("end node")?;
    tracing::info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        start,
        end,
        "graph loaded"
    );

    let mut bfs = Bfs::new(&graph);
    bfs.run(start);
    let hops = bfs.min_dist(end);

    let mut dijkstra = Dijkstra::new(&graph);
    dijkstra.run(start);
    let weighted = dijkstra.min_dist(end);

    // Unreachable prints as 0, the same as a zero-length path.
    Ok(Some((hops.unwrap_or(0), weighted.unwrap_or(0))))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = match &args.log_level {
        Some(level) => EnvFilter::try_new(level)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    if let Some((hops, weighted)) = solve(&input, args.directed)? {
        let mut out = io::stdout().lock();
        writeln!(out, "{hops}")?;
        writeln!(out, "{weighted}")?;
    }

    Ok(())
}
