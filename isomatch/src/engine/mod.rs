//! Isomorphism decision engine.
//!
//! [`IsoMatcher::compare`] is the single entry point: it validates the order
//! precondition, runs the invariant screener, and only then pays for the
//! backtracking search. Each call is self-contained — indices, assignment and
//! budget are allocated per call and released on return, so concurrent calls
//! on different graph pairs need no coordination.

mod assignment;
mod budget;
mod search;

use thiserror::Error;
use tracing::debug;

use crate::config::MatchConfig;
use crate::graph::Graph;
use crate::invariants::{self, GraphIndex};
use crate::report::IsoReport;

use assignment::Assignment;
use budget::SearchBudget;
use search::SearchCtx;

/// Failures of a comparison call, distinct from a negative verdict.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MatchError {
    /// The graphs have different vertex counts. A precondition violation;
    /// never silently reported as "not isomorphic".
    #[error("cannot compare graphs of different order ({left} vs {right})")]
    OrderMismatch {
        /// Order of the left graph.
        left: usize,
        /// Order of the right graph.
        right: usize,
    },

    /// The search exceeded its budget before reaching a verdict. The call is
    /// inconclusive; retry with a larger budget if a verdict is required.
    #[error("search budget exhausted after {steps} steps")]
    Timeout {
        /// Selection steps taken before the budget ran out.
        steps: u64,
    },
}

/// Isomorphism decision procedure over two graphs of equal order.
pub struct IsoMatcher<'g> {
    left: &'g Graph,
    right: &'g Graph,
    left_index: GraphIndex,
    right_index: GraphIndex,
}

impl<'g> IsoMatcher<'g> {
    /// Decides whether `left` and `right` are isomorphic, producing a witness
    /// mapping on success.
    ///
    /// The verdict and the witness are deterministic for a fixed input pair:
    /// no randomization is used anywhere in the search.
    ///
    /// # Errors
    ///
    /// [`MatchError::OrderMismatch`] when the orders differ;
    /// [`MatchError::Timeout`] when `config`'s budget runs out first.
    pub fn compare(
        left: &'g Graph,
        right: &'g Graph,
        config: &MatchConfig,
    ) -> Result<IsoReport, MatchError> {
        let matcher = Self::prepare(left, right)?;
        matcher.run(config)
    }

    fn prepare(left: &'g Graph, right: &'g Graph) -> Result<Self, MatchError> {
        if left.order() != right.order() {
            return Err(MatchError::OrderMismatch {
                left: left.order(),
                right: right.order(),
            });
        }
        Ok(Self {
            left,
            right,
            left_index: GraphIndex::build(left),
            right_index: GraphIndex::build(right),
        })
    }

    fn run(&self, config: &MatchConfig) -> Result<IsoReport, MatchError> {
        if invariants::distinguishable_by_index(&self.left_index, &self.right_index) {
            debug!("screener rejected the pair without search");
            return Ok(IsoReport::not_isomorphic());
        }

        let ctx = SearchCtx {
            left: self.left,
            right: self.right,
            left_index: &self.left_index,
            right_index: &self.right_index,
            selection: search::selection_order(&self.left_index),
        };

        let mut st = Assignment::new(self.left.order());
        let mut budget = SearchBudget::new(config);
        let mut witness = None;

        let found = search::backtrack(&ctx, &mut st, 0, &mut budget, &mut witness)?;
        debug!(steps = budget.steps(), found, "search finished");

        Ok(match witness {
            Some(pairs) => IsoReport::isomorphic(pairs),
            None => IsoReport::not_isomorphic(),
        })
    }
}
