//! Project data and search decisions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A candidate project: the revenue it earns and the days it consumes.
///
/// `id` is the project's position in the caller's input, kept stable even
/// when the runner scans projects in a different order internally.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Project {
    /// Position of this project in the caller's input.
    pub id: usize,
    /// Revenue earned when the project is selected.
    pub revenue: f64,
    /// Days of budget the project consumes.
    pub cost: u64,
}

impl Project {
    pub fn new(id: usize, revenue: f64, cost: u64) -> Self {
        Self { id, revenue, cost }
    }

    /// Revenue per unit of cost.
    ///
    /// Zero-cost projects map to `+inf` (or `-inf` for negative revenue)
    /// and zero-revenue projects to `0.0`, so the result is never NaN.
    pub fn density(&self) -> f64 {
        if self.revenue == 0.0 {
            0.0
        } else if self.cost == 0 {
            if self.revenue > 0.0 {
                f64::INFINITY
            } else {
                f64::NEG_INFINITY
            }
        } else {
            self.revenue / self.cost as f64
        }
    }
}

/// Whether a project is part of the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Decision {
    Included,
    Excluded,
}

impl Decision {
    pub fn is_included(self) -> bool {
        self == Decision::Included
    }
}

/// One decision per project, in scan order.
pub type Assignment = Vec<Decision>;

/// Immutable ordered view over the projects of one solve.
///
/// Construction performs no validation; costs are already unsigned, and
/// revenue checks belong to [`SolveRequest::validate`](super::SolveRequest::validate).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectSet {
    projects: Vec<Project>,
}

impl ProjectSet {
    /// Builds a set from `(revenue, cost)` pairs, assigning ids by position.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::bnb::ProjectSet;
    ///
    /// let set = ProjectSet::from_pairs(&[(15.0, 51), (17.0, 10)]);
    /// assert_eq!(set.len(), 2);
    /// assert_eq!(set.cost_at(1), 10);
    /// ```
    pub fn from_pairs(pairs: &[(f64, u64)]) -> Self {
        let projects = pairs
            .iter()
            .enumerate()
            .map(|(id, &(revenue, cost))| Project::new(id, revenue, cost))
            .collect();
        Self { projects }
    }

    /// Wraps projects as given, keeping their ids.
    pub fn from_projects(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    #[inline]
    pub fn revenue_at(&self, i: usize) -> f64 {
        self.projects[i].revenue
    }

    #[inline]
    pub fn cost_at(&self, i: usize) -> u64 {
        self.projects[i].cost
    }

    pub fn get(&self, i: usize) -> Option<&Project> {
        self.projects.get(i)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }

    /// Sum of all project costs, saturating at `u64::MAX`.
    pub fn total_cost(&self) -> u64 {
        self.projects
            .iter()
            .fold(0u64, |acc, p| acc.saturating_add(p.cost))
    }

    pub fn total_revenue(&self) -> f64 {
        self.projects.iter().map(|p| p.revenue).sum()
    }

    /// Positions of the projects by descending density.
    ///
    /// The sort is stable, so equal densities keep their input order and
    /// the result is deterministic.
    pub(crate) fn density_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.projects.len()).collect();
        order.sort_by(|&a, &b| {
            self.projects[b]
                .density()
                .total_cmp(&self.projects[a].density())
        });
        order
    }

    /// Returns a copy holding `self[order[k]]` at position `k`.
    pub(crate) fn permuted(&self, order: &[usize]) -> Self {
        let projects = order.iter().map(|&i| self.projects[i]).collect();
        Self { projects }
    }
}
