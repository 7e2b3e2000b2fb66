//! Settings for consuming the results of a query.

use crate::core::atom::Atomic;
use crate::core::goal::Goal;
use crate::core::state::State;
use crate::error::Result;
use tracing::debug;

/// How many answers to collect and how much work to spend on them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of answers (None = all answers)
    pub limit: Option<usize>,
    /// Maximum number of suspensions forced (None = unbounded)
    pub step_budget: Option<usize>,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_step_budget(mut self, budget: usize) -> Self {
        self.step_budget = Some(budget);
        self
    }
}

/// Apply `goal` to the initial state and collect answers as configured.
///
/// Fails with `Error::BudgetExhausted` if the step budget runs out before
/// the search ends or the limit is reached.
pub fn run_with<A: Atomic>(config: &SearchConfig, goal: &impl Goal<A>) -> Result<Vec<State<A>>> {
    debug!(?config, "running goal");
    let limit = config.limit.unwrap_or(usize::MAX);
    match config.step_budget {
        Some(budget) => goal.iter().with_budget(budget).take(limit).collect(),
        None => Ok(goal.iter().take(limit).collect()),
    }
}
