//! Depth-first branch-and-bound search.
//!
//! # Algorithm
//!
//! At each node (the next undecided project `index` plus the revenue and
//! cost accumulated so far):
//!
//! 1. At a leaf (`index == n`), record the assignment if its revenue is
//!    strictly better than the incumbent
//! 2. Otherwise compute the fractional bound; if it is `<=` the incumbent,
//!    discard the node (the bound covers both children)
//! 3. Include the project if it still fits in the budget, and recurse
//! 4. Exclude the project and recurse
//!
//! The include branch is always explored first, so for a fixed input and
//! configuration the search visits the same nodes in the same order.
//!
//! # Reference
//!
//! Kellerer, Pferschy & Pisinger (2004), *Knapsack Problems*, ch. 2.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use super::bound::BoundEstimator;
use super::config::{BnbConfig, BoundOrder};
use super::tracker::SolutionTracker;
use super::types::{Assignment, Decision, ProjectSet};

/// How the search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// The whole tree was explored or pruned.
    Complete,
    /// A node limit, time limit, or cancellation stopped the search early.
    Truncated,
}

/// Counters collected during one search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Search nodes visited, leaves included.
    pub nodes: u64,
    /// Complete assignments reached.
    pub leaves: u64,
    /// Nodes discarded because their bound could not beat the incumbent.
    pub bound_prunes: u64,
    /// Include branches skipped because the project did not fit.
    pub capacity_skips: u64,
    /// Times the incumbent was replaced.
    pub improvements: u64,
}

/// Result of a branch-and-bound run.
///
/// `assignment` and `selected` are in the caller's project order regardless
/// of the scan order used internally.
#[derive(Debug, Clone)]
pub struct BnbResult {
    /// Best assignment found, one decision per input project.
    pub assignment: Assignment,
    /// `assignment` as booleans (`true` = selected).
    pub selected: Vec<bool>,
    /// Revenue of the selected projects.
    pub total_revenue: f64,
    /// Days used by the selected projects.
    pub total_cost: u64,
    /// Whether the search ran to completion.
    pub status: SearchStatus,
    /// Search counters.
    pub stats: SearchStats,
    /// Wall-clock solve time in milliseconds.
    pub solve_time_ms: u64,
}

impl BnbResult {
    /// Indices (in input order) of the selected projects.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.selected
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.status == SearchStatus::Complete
    }
}

/// Branch-and-bound runner.
///
/// # Examples
///
/// ```
/// use u_knapsack::bnb::{BnbConfig, BnbRunner, ProjectSet};
///
/// let projects = ProjectSet::from_pairs(&[
///     (15.0, 51), (20.0, 60), (5.0, 35), (25.0, 60), (22.0, 53), (17.0, 10),
/// ]);
/// let result = BnbRunner::run(&projects, 90, &BnbConfig::default());
/// assert_eq!(result.selected, vec![false, false, false, true, false, true]);
/// assert_eq!(result.total_revenue, 42.0);
/// ```
pub struct BnbRunner;

impl BnbRunner {
    /// Runs the search over `projects` with capacity `budget`.
    pub fn run(projects: &ProjectSet, budget: u64, config: &BnbConfig) -> BnbResult {
        Self::run_with_cancel(projects, budget, config, None)
    }

    /// Runs the search with an optional cancellation flag.
    ///
    /// If `cancel` is set to `true` while the search is running, it stops
    /// at the next node and returns the best solution found so far with
    /// [`SearchStatus::Truncated`].
    pub fn run_with_cancel(
        projects: &ProjectSet,
        budget: u64,
        config: &BnbConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> BnbResult {
        let start_time = Instant::now();
        let n = projects.len();

        debug!(
            projects = n,
            budget,
            order = ?config.bound_order,
            "starting branch-and-bound"
        );

        // `order[k]` is the input position of the k-th scanned project.
        let order: Vec<usize> = match config.bound_order {
            BoundOrder::Density => projects.density_order(),
            BoundOrder::Input => (0..n).collect(),
        };
        let sorted;
        let (scan, estimator) = match config.bound_order {
            BoundOrder::Density => {
                sorted = projects.permuted(&order);
                (&sorted, BoundEstimator::density_sorted(&sorted, budget))
            }
            BoundOrder::Input => (projects, BoundEstimator::new(projects, budget)),
        };

        let mut search = Search {
            projects: scan,
            budget,
            estimator,
            tracker: SolutionTracker::new(),
            assignment: vec![Decision::Excluded; n],
            stats: SearchStats::default(),
            max_nodes: config.max_nodes,
            deadline: config
                .time_limit_ms
                .map(|ms| start_time + Duration::from_millis(ms)),
            cancel,
            stopped: false,
        };
        search.search(0, 0.0, 0);

        let status = if search.stopped {
            SearchStatus::Truncated
        } else {
            SearchStatus::Complete
        };
        let mut stats = search.stats;
        stats.improvements = search.tracker.improvements();

        // A truncated search may end before any leaf; excluding everything
        // is always feasible.
        let (best, total_revenue) = match search.tracker.into_result() {
            (Some(best), revenue) => (best, revenue),
            (None, _) => (vec![Decision::Excluded; n], 0.0),
        };

        let mut assignment = vec![Decision::Excluded; n];
        for (k, decision) in best.into_iter().enumerate() {
            assignment[order[k]] = decision;
        }
        let selected: Vec<bool> = assignment.iter().map(|d| d.is_included()).collect();
        let total_cost: u64 = selected
            .iter()
            .zip(projects.iter())
            .filter(|&(&s, _)| s)
            .map(|(_, p)| p.cost)
            .sum();

        debug!(
            revenue = total_revenue,
            cost = total_cost,
            nodes = stats.nodes,
            prunes = stats.bound_prunes,
            ?status,
            "branch-and-bound finished"
        );

        BnbResult {
            assignment,
            selected,
            total_revenue,
            total_cost,
            status,
            stats,
            solve_time_ms: start_time.elapsed().as_millis() as u64,
        }
    }
}

/// Mutable state of one search; dropped when the run returns.
struct Search<'a> {
    projects: &'a ProjectSet,
    budget: u64,
    estimator: BoundEstimator<'a>,
    tracker: SolutionTracker,
    /// Decisions for indices below the current node, in scan order.
    assignment: Assignment,
    stats: SearchStats,
    max_nodes: Option<u64>,
    deadline: Option<Instant>,
    cancel: Option<Arc<AtomicBool>>,
    stopped: bool,
}

impl Search<'_> {
    fn search(&mut self, index: usize, revenue: f64, cost: u64) {
        if self.should_stop() {
            return;
        }
        self.stats.nodes += 1;

        if index == self.projects.len() {
            self.stats.leaves += 1;
            if cost <= self.budget && self.tracker.update(&self.assignment, revenue) {
                trace!(revenue, nodes = self.stats.nodes, "new incumbent");
            }
            return;
        }

        if self.estimator.bound(index, revenue, cost) <= self.tracker.best_revenue() {
            self.stats.bound_prunes += 1;
            return;
        }

        match cost.checked_add(self.projects.cost_at(index)) {
            Some(next_cost) if next_cost <= self.budget => {
                self.assignment[index] = Decision::Included;
                self.search(
                    index + 1,
                    revenue + self.projects.revenue_at(index),
                    next_cost,
                );
            }
            _ => self.stats.capacity_skips += 1,
        }

        self.assignment[index] = Decision::Excluded;
        self.search(index + 1, revenue, cost);
    }

    fn should_stop(&mut self) -> bool {
        if self.stopped {
            return true;
        }
        let hit = self.max_nodes.is_some_and(|max| self.stats.nodes >= max)
            || self.deadline.is_some_and(|d| Instant::now() >= d)
            || self
                .cancel
                .as_ref()
                .is_some_and(|flag| flag.load(Ordering::Relaxed));
        if hit {
            debug!(nodes = self.stats.nodes, "search limit reached");
            self.stopped = true;
        }
        hit
    }
}
