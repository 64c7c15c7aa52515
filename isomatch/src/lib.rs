//! Graph isomorphism decision procedure.
//!
//! Given two undirected, loop-free simple graphs of equal order, decide
//! whether an adjacency-preserving bijection between their vertex sets exists
//! and produce one witness mapping when it does. The pipeline:
//!
//! 1. [`Graph`] — immutable adjacency structure built from an edge list.
//! 2. [`quickly_distinguishable`] — cheap necessary-condition screening
//!    (order, edge count, degree sequence, neighbor-degree signatures).
//! 3. [`IsoMatcher::compare`] — backtracking search over partial vertex
//!    assignments with degree/signature candidate pruning and incremental
//!    consistency checks, under an optional [`MatchConfig`] budget.
//! 4. [`IsoReport`] — the verdict plus the witness pairs.
//!
//! Comparison calls are pure and self-contained; graphs are immutable after
//! construction, so concurrent calls on different pairs need no coordination.
//!
//! # Example
//!
//! ```
//! use isomatch::{Graph, IsoMatcher, MatchConfig};
//!
//! let square = Graph::build(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
//! let relabeled = Graph::build(4, &[(0, 2), (2, 1), (1, 3), (3, 0)]).unwrap();
//!
//! let report = IsoMatcher::compare(&square, &relabeled, &MatchConfig::unbounded()).unwrap();
//! assert!(report.is_isomorphic);
//! assert!(report.validates(&square, &relabeled));
//! ```

mod config;
mod engine;
mod generate;
mod graph;
mod invariants;
mod parse;
mod report;

pub use config::{MatchConfig, MatchConfigBuilder};
pub use engine::{IsoMatcher, MatchError};
pub use generate::{EdgeBudget, random_graph};
pub use graph::{Graph, GraphError, VertexId};
pub use invariants::quickly_distinguishable;
pub use parse::{ParseError, parse_graph, write_graph};
pub use report::IsoReport;
