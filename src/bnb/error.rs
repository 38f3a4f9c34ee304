//! Errors reported before (or after) a search, never during one.

use thiserror::Error;

/// Reasons a solve request or a reported result is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BnbError {
    /// The shared budget is negative.
    #[error("budget must be non-negative, got {budget}")]
    InvalidBudget { budget: i64 },

    /// A project record cannot be searched.
    #[error("project {index}: {reason}")]
    InvalidProject { index: usize, reason: String },

    /// The runner configuration is rejected by [`BnbConfig::validate`](super::BnbConfig::validate).
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A selection does not have one entry per project.
    #[error("selection has {actual} entries, expected {expected}")]
    SelectionMismatch { expected: usize, actual: usize },

    /// A selection spends more than the budget.
    #[error("selection costs {cost} days, budget is {budget}")]
    OverBudget { cost: u64, budget: u64 },
}
