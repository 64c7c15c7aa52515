//! Cooperative search budget.
//!
//! The engine calls [`SearchBudget::tick`] once per vertex-selection step, so
//! a caller-supplied deadline or step limit bounds the worst-case factorial
//! search. The step limit is exact; the wall-clock deadline is polled every
//! [`DEADLINE_POLL_INTERVAL`] steps to keep `Instant::now` off the hot path.

use std::time::Instant;

use crate::config::MatchConfig;
use crate::engine::MatchError;

const DEADLINE_POLL_INTERVAL: u64 = 1024;

#[derive(Debug)]
pub(crate) struct SearchBudget {
    deadline: Option<Instant>,
    step_limit: Option<u64>,
    steps: u64,
}

impl SearchBudget {
    pub(crate) fn new(config: &MatchConfig) -> Self {
        Self {
            deadline: config.time_budget.map(|budget| Instant::now() + budget),
            step_limit: config.step_limit,
            steps: 0,
        }
    }

    /// Accounts for one selection step.
    ///
    /// # Errors
    ///
    /// Fails with [`MatchError::Timeout`] once either limit is exceeded.
    pub(crate) fn tick(&mut self) -> Result<(), MatchError> {
        self.steps += 1;

        if self.step_limit.is_some_and(|limit| self.steps > limit) {
            return Err(MatchError::Timeout { steps: self.steps });
        }

        if self.steps % DEADLINE_POLL_INTERVAL == 0
            && self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
        {
            return Err(MatchError::Timeout { steps: self.steps });
        }

        Ok(())
    }

    pub(crate) const fn steps(&self) -> u64 {
        self.steps
    }
}
