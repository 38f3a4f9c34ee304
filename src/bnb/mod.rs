//! Branch-and-bound project selection (0/1 knapsack).
//!
//! Chooses the subset of projects with the highest total revenue whose
//! combined cost (days) fits a single shared budget. The search enumerates
//! include/exclude decisions depth-first and discards every subtree whose
//! fractional relaxation bound cannot beat the best selection found so far.
//!
//! # Key Components
//!
//! - [`ProjectSet`]: immutable, ordered projects for one solve
//! - [`BoundEstimator`]: fractional upper bound for a partial selection
//! - [`SolutionTracker`]: best complete selection seen so far
//! - [`BnbRunner`]: the depth-first search itself
//! - [`SolveRequest`] / [`solve`]: validated one-call entry point
//!
//! # Scan Order
//!
//! By default projects are scanned by descending revenue density, which
//! makes the bound exact and the search optimal. [`BoundOrder::Input`]
//! scans in the caller's order instead, matching older results at the cost
//! of possibly pruning the optimum.
//!
//! # References
//!
//! - Horowitz & Sahni (1974), "Computing partitions with applications to the
//!   knapsack problem", *JACM* 21(2), 277-292.
//! - Dantzig (1957), "Discrete-variable extremum problems", *Operations
//!   Research* 5(2), 266-288.

mod bound;
mod config;
mod error;
mod generator;
mod request;
mod runner;
mod tracker;
mod types;

pub use bound::BoundEstimator;
pub use config::{BnbConfig, BoundOrder};
pub use error::BnbError;
pub use generator::InstanceConfig;
pub use request::{solve, solve_with_config, ProjectSpec, SolveRequest, SolveResult};
pub use runner::{BnbResult, BnbRunner, SearchStats, SearchStatus};
pub use tracker::SolutionTracker;
pub use types::{Assignment, Decision, Project, ProjectSet};
