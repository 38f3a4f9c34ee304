//! Best-so-far solution for one search.

use super::types::{Assignment, Decision};

/// Holds the best complete assignment found and its revenue.
///
/// A tracker lives for exactly one search. Its revenue starts at `-inf`
/// and only ever increases: a candidate replaces the incumbent only when
/// it is strictly better, so ties keep the first assignment found.
#[derive(Debug, Clone)]
pub struct SolutionTracker {
    best: Option<Assignment>,
    best_revenue: f64,
    improvements: u64,
}

impl Default for SolutionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl SolutionTracker {
    pub fn new() -> Self {
        Self {
            best: None,
            best_revenue: f64::NEG_INFINITY,
            improvements: 0,
        }
    }

    /// Current best revenue, `-inf` until the first leaf is recorded.
    #[inline]
    pub fn best_revenue(&self) -> f64 {
        self.best_revenue
    }

    pub fn has_solution(&self) -> bool {
        self.best.is_some()
    }

    /// Number of times the incumbent was replaced.
    pub fn improvements(&self) -> u64 {
        self.improvements
    }

    /// Records `candidate` if `revenue` strictly exceeds the incumbent.
    ///
    /// Returns whether the incumbent changed.
    pub fn update(&mut self, candidate: &[Decision], revenue: f64) -> bool {
        if revenue > self.best_revenue {
            match &mut self.best {
                Some(best) => {
                    best.clear();
                    best.extend_from_slice(candidate);
                }
                None => self.best = Some(candidate.to_vec()),
            }
            self.best_revenue = revenue;
            self.improvements += 1;
            true
        } else {
            false
        }
    }

    /// Returns the stored best, or `(None, -inf)` if nothing was recorded.
    pub fn result(&self) -> (Option<&Assignment>, f64) {
        (self.best.as_ref(), self.best_revenue)
    }

    pub fn into_result(self) -> (Option<Assignment>, f64) {
        (self.best, self.best_revenue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bnb::types::Decision::{Excluded, Included};

    #[test]
    fn test_empty_tracker() {
        let tracker = SolutionTracker::new();
        let (best, revenue) = tracker.result();
        assert!(best.is_none());
        assert_eq!(revenue, f64::NEG_INFINITY);
        assert!(!tracker.has_solution());
    }

    #[test]
    fn test_update_strictly_better() {
        let mut tracker = SolutionTracker::new();
        assert!(tracker.update(&[Included, Excluded], 5.0));
        assert!(tracker.update(&[Excluded, Included], 7.0));
        let (best, revenue) = tracker.result();
        assert_eq!(best, Some(&vec![Excluded, Included]));
        assert_eq!(revenue, 7.0);
        assert_eq!(tracker.improvements(), 2);
    }

    #[test]
    fn test_tie_keeps_incumbent() {
        let mut tracker = SolutionTracker::new();
        tracker.update(&[Included, Excluded], 5.0);
        assert!(!tracker.update(&[Excluded, Included], 5.0));
        assert!(!tracker.update(&[Included, Included], 4.0));
        let (best, revenue) = tracker.into_result();
        assert_eq!(best, Some(vec![Included, Excluded]));
        assert_eq!(revenue, 5.0);
    }

    #[test]
    fn test_empty_assignment_is_a_solution() {
        let mut tracker = SolutionTracker::new();
        assert!(tracker.update(&[], 0.0));
        assert_eq!(tracker.result(), (Some(&Vec::new()), 0.0));
    }
}
