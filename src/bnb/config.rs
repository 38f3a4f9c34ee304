//! Branch-and-bound configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Order in which the bound estimator (and the search) scans projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BoundOrder {
    /// Scan by descending revenue density (revenue / cost).
    ///
    /// Projects are sorted once before the search; the fractional bound is
    /// then a true upper bound and the search is exact. Results are still
    /// reported in input order.
    #[default]
    Density,

    /// Scan in the caller's input order.
    ///
    /// Reproduces the historical behavior. The fractional bound is only
    /// admissible when the input already happens to be density-ordered, so
    /// this mode can prune the subtree holding the optimum.
    Input,
}

/// Configuration for the branch-and-bound runner.
///
/// # Examples
///
/// ```
/// use u_knapsack::bnb::{BnbConfig, BoundOrder};
///
/// let config = BnbConfig::default()
///     .with_bound_order(BoundOrder::Input)
///     .with_max_nodes(10_000)
///     .with_time_limit_ms(500);
/// assert_eq!(config.bound_order, BoundOrder::Input);
/// assert_eq!(config.max_nodes, Some(10_000));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BnbConfig {
    /// Scan order for bounding and branching.
    pub bound_order: BoundOrder,

    /// Maximum number of search nodes to visit. `None` = no limit.
    ///
    /// When the limit trips, the best solution found so far is returned
    /// with [`SearchStatus::Truncated`](super::SearchStatus::Truncated).
    pub max_nodes: Option<u64>,

    /// Optional wall-clock limit in milliseconds. `None` = no limit.
    ///
    /// Checked once per node, so a run overshoots by at most one bound
    /// evaluation.
    pub time_limit_ms: Option<u64>,
}

impl Default for BnbConfig {
    fn default() -> Self {
        Self {
            bound_order: BoundOrder::Density,
            max_nodes: None,
            time_limit_ms: None,
        }
    }
}

impl BnbConfig {
    /// Sets the project scan order.
    pub fn with_bound_order(mut self, order: BoundOrder) -> Self {
        self.bound_order = order;
        self
    }

    /// Sets the node limit.
    pub fn with_max_nodes(mut self, n: u64) -> Self {
        self.max_nodes = Some(n);
        self
    }

    /// Sets the wall-clock limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_nodes == Some(0) {
            return Err("max_nodes must be positive".into());
        }
        if self.time_limit_ms == Some(0) {
            return Err("time_limit_ms must be positive".into());
        }
        Ok(())
    }
}
