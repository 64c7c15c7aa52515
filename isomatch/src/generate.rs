//! Random simple-graph synthesis.
//!
//! The pseudo-random source is injected by the caller so test data stays
//! reproducible; nothing here reaches for an ambient global generator.

use rand::Rng;
use rand::seq::index;

use crate::graph::Graph;

/// Target edge volume for [`random_graph`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EdgeBudget {
    /// Fraction of all `order * (order - 1) / 2` vertex pairs, clamped to
    /// `[0, 1]`.
    Density(f64),
    /// Absolute edge count, clamped to `order * (order - 1) / 2`.
    Count(usize),
}

/// Generates a graph on `order` vertices by uniform selection without
/// replacement among all vertex pairs until the target edge count is met.
pub fn random_graph<R: Rng + ?Sized>(order: usize, budget: EdgeBudget, rng: &mut R) -> Graph {
    let pairs: Vec<(usize, usize)> = (0..order)
        .flat_map(|u| ((u + 1)..order).map(move |v| (u, v)))
        .collect();

    let target = match budget {
        EdgeBudget::Density(density) => {
            (density.clamp(0.0, 1.0) * pairs.len() as f64).round() as usize
        }
        EdgeBudget::Count(count) => count.min(pairs.len()),
    };

    let chosen: Vec<(usize, usize)> = index::sample(rng, pairs.len(), target)
        .into_iter()
        .map(|i| pairs[i])
        .collect();

    Graph::build(order, &chosen).expect("sampled pairs are distinct, in range and loop-free")
}
