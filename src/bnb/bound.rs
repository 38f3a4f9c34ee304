//! Fractional relaxation bound.
//!
//! The estimate walks the remaining projects in scan order, taking each
//! project whole while it fits and a fraction of the first one that does
//! not. When the scan order is by descending density this is the classic
//! Dantzig bound and never underestimates the best completion; in any other
//! order it is only a heuristic.

use super::types::ProjectSet;

/// Optimistic revenue estimate for a subtree of the search.
#[derive(Debug, Clone, Copy)]
pub struct BoundEstimator<'a> {
    projects: &'a ProjectSet,
    budget: u64,
    stop_at_negative: bool,
}

impl<'a> BoundEstimator<'a> {
    /// Creates an estimator that scans `projects` exactly as given.
    pub fn new(projects: &'a ProjectSet, budget: u64) -> Self {
        Self {
            projects,
            budget,
            stop_at_negative: false,
        }
    }

    /// Creates an estimator for a density-sorted set.
    ///
    /// Once the scan reaches a negative-revenue project every later project
    /// has non-positive density, so the walk stops there instead of
    /// charging those losses against the estimate.
    pub fn density_sorted(projects: &'a ProjectSet, budget: u64) -> Self {
        Self {
            projects,
            budget,
            stop_at_negative: true,
        }
    }

    pub fn budget(&self) -> u64 {
        self.budget
    }

    /// Upper estimate of total revenue for the subtree rooted at `index`.
    ///
    /// `accumulated_cost` must not exceed the budget.
    pub fn bound(&self, index: usize, accumulated_revenue: f64, accumulated_cost: u64) -> f64 {
        let mut remaining = self.budget.saturating_sub(accumulated_cost);
        let mut estimate = accumulated_revenue;

        for project in self.projects.iter().skip(index) {
            if self.stop_at_negative && project.revenue < 0.0 {
                break;
            }
            if project.cost <= remaining {
                remaining -= project.cost;
                estimate += project.revenue;
            } else {
                // cost > remaining >= 0, so the division is safe
                estimate += project.revenue * (remaining as f64 / project.cost as f64);
                break;
            }
        }

        estimate
    }
}
