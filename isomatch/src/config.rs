//! Comparison configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Resource bounds for one comparison call.
///
/// The default configuration is unbounded; callers that compare untrusted or
/// large inputs should set at least one of the two limits, since the search
/// is factorial in the worst case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Wall-clock budget for the search phase. `None` means unbounded.
    pub time_budget: Option<Duration>,
    /// Upper bound on vertex-selection steps. `None` means unbounded.
    pub step_limit: Option<u64>,
}

impl MatchConfig {
    /// Starts building a configuration.
    #[must_use]
    pub fn builder() -> MatchConfigBuilder {
        MatchConfigBuilder::default()
    }

    /// A configuration with no limits.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }
}

/// Builder for [`MatchConfig`].
#[derive(Debug, Default)]
pub struct MatchConfigBuilder {
    time_budget: Option<Duration>,
    step_limit: Option<u64>,
}

impl MatchConfigBuilder {
    /// Sets the wall-clock budget.
    #[must_use]
    pub fn time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }

    /// Sets the step limit.
    #[must_use]
    pub fn step_limit(mut self, limit: u64) -> Self {
        self.step_limit = Some(limit);
        self
    }

    /// Finishes the configuration.
    #[must_use]
    pub fn build(self) -> MatchConfig {
        MatchConfig {
            time_budget: self.time_budget,
            step_limit: self.step_limit,
        }
    }
}
