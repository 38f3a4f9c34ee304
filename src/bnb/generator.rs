//! Seeded random instances for tests and benchmarks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::request::{ProjectSpec, SolveRequest};

/// Shape of a generated instance.
///
/// Revenues are drawn from `[1, max_revenue]`, costs from `[1, max_cost]`,
/// and the budget is `budget_ratio` times the total cost, rounded down.
///
/// # Examples
///
/// ```
/// use u_knapsack::bnb::InstanceConfig;
///
/// let request = InstanceConfig::new(20).with_budget_ratio(0.3).generate(7);
/// assert_eq!(request.projects.len(), 20);
/// assert_eq!(request, InstanceConfig::new(20).with_budget_ratio(0.3).generate(7));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceConfig {
    /// Number of projects.
    pub num_projects: usize,
    /// Upper end of the revenue range.
    pub max_revenue: u32,
    /// Upper end of the cost range (days).
    pub max_cost: u32,
    /// Budget as a fraction of the total cost, in `[0, 1]`.
    pub budget_ratio: f64,
}

impl InstanceConfig {
    pub fn new(num_projects: usize) -> Self {
        Self {
            num_projects,
            max_revenue: 100,
            max_cost: 50,
            budget_ratio: 0.5,
        }
    }

    pub fn with_max_revenue(mut self, max: u32) -> Self {
        self.max_revenue = max.max(1);
        self
    }

    pub fn with_max_cost(mut self, max: u32) -> Self {
        self.max_cost = max.max(1);
        self
    }

    pub fn with_budget_ratio(mut self, ratio: f64) -> Self {
        self.budget_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Generates an instance; the same seed always yields the same request.
    pub fn generate(&self, seed: u64) -> SolveRequest {
        let mut rng = StdRng::seed_from_u64(seed);

        let projects: Vec<ProjectSpec> = (0..self.num_projects)
            .map(|_| {
                let revenue = rng.random_range(1..=self.max_revenue);
                let cost = rng.random_range(1..=self.max_cost);
                ProjectSpec::new(revenue as f64, cost as i64)
            })
            .collect();

        let total_cost: i64 = projects.iter().map(|p| p.cost).sum();
        let budget = (total_cost as f64 * self.budget_ratio).floor() as i64;

        SolveRequest::new(projects, budget)
    }
}
