//! Solve requests and results exchanged with callers.
//!
//! A [`SolveRequest`] carries raw, signed input as a table editor would
//! collect it. [`SolveRequest::validate`] turns it into a [`ProjectSet`]
//! and an unsigned budget once, before any search begins; the search itself
//! never fails.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::config::BnbConfig;
use super::error::BnbError;
use super::runner::{BnbResult, BnbRunner};
use super::types::{Project, ProjectSet};

/// A project record as supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProjectSpec {
    pub revenue: f64,
    /// Days required. Negative values are rejected by validation.
    pub cost: i64,
}

impl ProjectSpec {
    pub fn new(revenue: f64, cost: i64) -> Self {
        Self { revenue, cost }
    }
}

/// Projects in caller-chosen order plus the shared budget.
///
/// # Examples
///
/// ```
/// use u_knapsack::bnb::{solve, SolveRequest};
///
/// let request = SolveRequest::from_pairs(
///     &[(15.0, 51), (20.0, 60), (5.0, 35), (25.0, 60), (22.0, 53), (17.0, 10)],
///     90,
/// );
/// let result = solve(&request).unwrap();
/// assert_eq!(result.selected, vec![false, false, false, true, false, true]);
/// assert_eq!(result.total_revenue, 42.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolveRequest {
    pub projects: Vec<ProjectSpec>,
    pub budget: i64,
}

impl SolveRequest {
    pub fn new(projects: Vec<ProjectSpec>, budget: i64) -> Self {
        Self { projects, budget }
    }

    /// Builds a request from `(revenue, cost)` pairs.
    pub fn from_pairs(pairs: &[(f64, i64)], budget: i64) -> Self {
        let projects = pairs
            .iter()
            .map(|&(revenue, cost)| ProjectSpec::new(revenue, cost))
            .collect();
        Self { projects, budget }
    }

    /// Checks the request and returns the validated projects and budget.
    ///
    /// Revenue may be zero or negative; it must be finite.
    pub fn validate(&self) -> Result<(ProjectSet, u64), BnbError> {
        let budget = u64::try_from(self.budget).map_err(|_| BnbError::InvalidBudget {
            budget: self.budget,
        })?;

        let projects = self
            .projects
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                let cost = u64::try_from(spec.cost).map_err(|_| BnbError::InvalidProject {
                    index,
                    reason: format!("cost must be non-negative, got {}", spec.cost),
                })?;
                if !spec.revenue.is_finite() {
                    return Err(BnbError::InvalidProject {
                        index,
                        reason: format!("revenue must be finite, got {}", spec.revenue),
                    });
                }
                Ok(Project::new(index, spec.revenue, cost))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok((ProjectSet::from_projects(projects), budget))
    }

    /// Validates the request and runs the search, returning full details.
    pub fn run(&self, config: &BnbConfig) -> Result<BnbResult, BnbError> {
        config.validate().map_err(BnbError::InvalidConfig)?;
        let (projects, budget) = self.validate()?;
        Ok(BnbRunner::run(&projects, budget, config))
    }
}

/// Selection in input order and its total revenue.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolveResult {
    pub selected: Vec<bool>,
    pub total_revenue: f64,
}

impl From<BnbResult> for SolveResult {
    fn from(result: BnbResult) -> Self {
        Self {
            selected: result.selected,
            total_revenue: result.total_revenue,
        }
    }
}

impl SolveResult {
    /// Checks that this selection is feasible for `request`.
    ///
    /// Returns the recomputed total revenue of the selection.
    pub fn verify(&self, request: &SolveRequest) -> Result<f64, BnbError> {
        let (projects, budget) = request.validate()?;
        if self.selected.len() != projects.len() {
            return Err(BnbError::SelectionMismatch {
                expected: projects.len(),
                actual: self.selected.len(),
            });
        }

        let mut cost = 0u64;
        let mut revenue = 0.0;
        for (project, _) in projects.iter().zip(&self.selected).filter(|&(_, &s)| s) {
            cost = cost.saturating_add(project.cost);
            revenue += project.revenue;
        }
        if cost > budget {
            return Err(BnbError::OverBudget { cost, budget });
        }
        Ok(revenue)
    }
}

/// Solves `request` with the default configuration.
pub fn solve(request: &SolveRequest) -> Result<SolveResult, BnbError> {
    solve_with_config(request, &BnbConfig::default())
}

/// Solves `request` with an explicit configuration.
pub fn solve_with_config(
    request: &SolveRequest,
    config: &BnbConfig,
) -> Result<SolveResult, BnbError> {
    request.run(config).map(SolveResult::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bnb::BoundOrder;
    use proptest::prelude::*;

    fn scenario() -> SolveRequest {
        SolveRequest::from_pairs(
            &[
                (15.0, 51),
                (20.0, 60),
                (5.0, 35),
                (25.0, 60),
                (22.0, 53),
                (17.0, 10),
            ],
            90,
        )
    }

    fn brute_force(request: &SolveRequest) -> f64 {
        let n = request.projects.len();
        let mut best = 0.0f64;
        for mask in 0u32..(1 << n) {
            let (cost, revenue) = request
                .projects
                .iter()
                .enumerate()
                .filter(|&(i, _)| mask & (1 << i) != 0)
                .fold((0i64, 0.0), |(c, r), (_, p)| (c + p.cost, r + p.revenue));
            if cost <= request.budget && revenue > best {
                best = revenue;
            }
        }
        best
    }

    #[test]
    fn test_solve_scenario() {
        let result = solve(&scenario()).unwrap();
        assert_eq!(result.selected, vec![false, false, false, true, false, true]);
        assert_eq!(result.total_revenue, 42.0);
        assert_eq!(result.verify(&scenario()).unwrap(), 42.0);
    }

    #[test]
    fn test_empty_input_is_not_an_error() {
        let result = solve(&SolveRequest::new(vec![], 30)).unwrap();
        assert!(result.selected.is_empty());
        assert_eq!(result.total_revenue, 0.0);
    }

    #[test]
    fn test_negative_budget_rejected() {
        let request = SolveRequest::from_pairs(&[(1.0, 1)], -1);
        assert_eq!(
            solve(&request).unwrap_err(),
            BnbError::InvalidBudget { budget: -1 }
        );
    }

    #[test]
    fn test_negative_cost_rejected() {
        let request = SolveRequest::from_pairs(&[(1.0, 1), (2.0, -3)], 10);
        match solve(&request).unwrap_err() {
            BnbError::InvalidProject { index, reason } => {
                assert_eq!(index, 1);
                assert!(reason.contains("-3"), "{reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_revenue_rejected() {
        let request = SolveRequest::from_pairs(&[(f64::NAN, 1)], 10);
        assert!(matches!(
            solve(&request),
            Err(BnbError::InvalidProject { index: 0, .. })
        ));
    }

    #[test]
    fn test_negative_revenue_accepted() {
        let request = SolveRequest::from_pairs(&[(-2.0, 1), (3.0, 1)], 10);
        let result = solve(&request).unwrap();
        assert_eq!(result.selected, vec![false, true]);
        assert_eq!(result.total_revenue, 3.0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = BnbConfig::default().with_max_nodes(0);
        assert!(matches!(
            solve_with_config(&scenario(), &config),
            Err(BnbError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_legacy_order_through_request() {
        let config = BnbConfig::default().with_bound_order(BoundOrder::Input);
        let result = solve_with_config(&scenario(), &config).unwrap();
        assert_eq!(result.total_revenue, 32.0);
        assert!(result.verify(&scenario()).is_ok());
    }

    #[test]
    fn test_run_exposes_details() {
        let result = scenario().run(&BnbConfig::default()).unwrap();
        assert!(result.is_complete());
        assert_eq!(result.total_cost, 70);
        assert!(result.stats.nodes > 0);
    }

    #[test]
    fn test_verify_rejects_wrong_length() {
        let result = SolveResult {
            selected: vec![true],
            total_revenue: 15.0,
        };
        assert_eq!(
            result.verify(&scenario()).unwrap_err(),
            BnbError::SelectionMismatch {
                expected: 6,
                actual: 1
            }
        );
    }

    #[test]
    fn test_verify_rejects_over_budget() {
        let result = SolveResult {
            selected: vec![true, true, false, false, false, false],
            total_revenue: 35.0,
        };
        assert_eq!(
            result.verify(&scenario()).unwrap_err(),
            BnbError::OverBudget {
                cost: 111,
                budget: 90
            }
        );
    }

    fn request_strategy() -> impl Strategy<Value = SolveRequest> {
        (
            prop::collection::vec((0u32..50, 0i64..30), 0..=12),
            0i64..120,
        )
            .prop_map(|(items, budget)| {
                let projects = items
                    .into_iter()
                    .map(|(revenue, cost)| ProjectSpec::new(revenue as f64, cost))
                    .collect();
                SolveRequest::new(projects, budget)
            })
    }

    proptest! {
        #[test]
        fn prop_matches_exhaustive_enumeration(request in request_strategy()) {
            let result = solve(&request).unwrap();
            let expected = brute_force(&request);
            prop_assert!((result.total_revenue - expected).abs() < 1e-9,
                "got {}, expected {}", result.total_revenue, expected);
        }

        #[test]
        fn prop_selection_is_feasible(request in request_strategy()) {
            for order in [BoundOrder::Density, BoundOrder::Input] {
                let config = BnbConfig::default().with_bound_order(order);
                let result = solve_with_config(&request, &config).unwrap();
                prop_assert_eq!(result.selected.len(), request.projects.len());
                let revenue = result.verify(&request).unwrap();
                prop_assert!((revenue - result.total_revenue).abs() < 1e-9);
            }
        }

        #[test]
        fn prop_input_order_never_beats_density_order(request in request_strategy()) {
            let legacy = solve_with_config(
                &request,
                &BnbConfig::default().with_bound_order(BoundOrder::Input),
            ).unwrap();
            let exact = solve(&request).unwrap();
            prop_assert!(legacy.total_revenue <= exact.total_revenue + 1e-9);
        }

        #[test]
        fn prop_deterministic(request in request_strategy()) {
            prop_assert_eq!(solve(&request).unwrap(), solve(&request).unwrap());
        }

        #[test]
        fn prop_monotone_in_budget(request in request_strategy(), extra in 0i64..50) {
            let base = solve(&request).unwrap();
            let mut larger = request.clone();
            larger.budget += extra;
            let more = solve(&larger).unwrap();
            prop_assert!(more.total_revenue + 1e-9 >= base.total_revenue);
        }

        #[test]
        fn prop_zero_budget_takes_only_free_projects(request in request_strategy()) {
            let mut request = request;
            request.budget = 0;
            let result = solve(&request).unwrap();
            for (spec, &s) in request.projects.iter().zip(&result.selected) {
                if s {
                    prop_assert_eq!(spec.cost, 0);
                }
            }
            let free: f64 = request.projects.iter()
                .filter(|p| p.cost == 0)
                .map(|p| p.revenue)
                .sum();
            prop_assert!((result.total_revenue - free).abs() < 1e-9);
        }
    }
}
