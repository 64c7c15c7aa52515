//! Graph isomorphism checker CLI.
//!
//! Entry point for the `isomatch` command-line tool. Loads two graph files
//! and decides whether they are isomorphic, or generates random graphs in
//! the same text format for test data.

mod args;

use std::fs;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use isomatch::{IsoMatcher, parse_graph, random_graph, write_graph};

use args::{Args, Command};

/// Executes the isomorphism checker.
///
/// This function:
/// 1. Initializes logging
/// 2. Parses command-line arguments
/// 3. Runs the requested subcommand
/// 4. Renders the verdict or the generated graph
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let parsed = Args::parse();

    match parsed.command {
        Command::Check {
            graph_a,
            graph_b,
            timeout_ms,
            step_limit,
            json,
        } => {
            info!("Loading graph: {}", graph_a.display());
            let left = parse_graph(&fs::read_to_string(&graph_a)?)?;
            info!("Loading graph: {}", graph_b.display());
            let right = parse_graph(&fs::read_to_string(&graph_b)?)?;

            let config = args::to_config(timeout_ms, step_limit);
            let report = IsoMatcher::compare(&left, &right, &config)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{report}");
            }
        }
        Command::Gen {
            order,
            density,
            edges,
            seed,
        } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let graph = random_graph(order, args::to_edge_budget(density, edges), &mut rng);
            print!("{}", write_graph(&graph));
        }
    }

    Ok(())
}
