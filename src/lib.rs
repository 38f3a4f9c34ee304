//! Exact project selection under a shared budget.
//!
//! Given candidate projects, each with a revenue and a cost in days, and a
//! total number of available days, finds the revenue-maximizing subset that
//! fits the budget (the 0/1 knapsack problem) by depth-first
//! branch-and-bound.
//!
//! - **Branch-and-bound (BnB)**: include/exclude enumeration with a
//!   fractional relaxation bound; see [`bnb`].
//!
//! # Architecture
//!
//! The crate is a pure computational core: it takes an ordered project
//! list and a budget and returns a selection. Collecting, editing and
//! displaying project records is left to the caller.
//!
//! # Logging
//!
//! Solve boundaries are reported through [`tracing`] at `debug` level and
//! incumbent improvements at `trace` level. No subscriber is installed.

pub mod bnb;
