//! Command-line argument definitions and conversions.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use isomatch::{EdgeBudget, MatchConfig};

/// Graph isomorphism checker — compare two graph files or generate test data
#[derive(Parser, Debug)]
#[command(name = "isomatch")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decide whether two graph files are isomorphic
    Check {
        /// Path to the left graph file
        graph_a: PathBuf,
        /// Path to the right graph file
        graph_b: PathBuf,
        /// Wall-clock search budget in milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,
        /// Upper bound on search steps
        #[arg(long)]
        step_limit: Option<u64>,
        /// Emit the report as JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Generate a random graph in the text format
    Gen {
        /// Number of vertices
        order: usize,
        /// Edge density in [0, 1]
        #[arg(long, default_value_t = 0.5, conflicts_with = "edges")]
        density: f64,
        /// Exact edge count instead of a density
        #[arg(long)]
        edges: Option<usize>,
        /// PRNG seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Convert check options into an engine configuration.
pub fn to_config(timeout_ms: Option<u64>, step_limit: Option<u64>) -> MatchConfig {
    let mut builder = MatchConfig::builder();
    if let Some(ms) = timeout_ms {
        builder = builder.time_budget(Duration::from_millis(ms));
    }
    if let Some(limit) = step_limit {
        builder = builder.step_limit(limit);
    }
    builder.build()
}

/// Convert gen options into an edge budget; `--edges` wins over `--density`.
pub fn to_edge_budget(density: f64, edges: Option<usize>) -> EdgeBudget {
    match edges {
        Some(count) => EdgeBudget::Count(count),
        None => EdgeBudget::Density(density),
    }
}
