//! Ranking policy and match results
//!
//! Prefix matches always outrank plain distance matches; within each group
//! lower edit distance wins and ties keep their input order.

use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Hard cap on results per query; config may lower it but never raise it
pub const MAX_RESULTS: usize = 5;

/// Tunable constants for the filter and truncation steps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchPolicy {
    /// Minimum distance threshold, applied to short queries
    pub threshold_floor: usize,
    /// Query length is divided by this to scale the threshold
    pub threshold_divisor: usize,
    /// Maximum number of results returned per query
    pub max_results: usize,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            threshold_floor: 2,
            threshold_divisor: 2,
            max_results: MAX_RESULTS,
        }
    }
}

impl MatchPolicy {
    /// Reject policies that would divide by zero, never return anything or
    /// return more than [`MAX_RESULTS`]
    pub fn validate(&self) -> Result<(), AppError> {
        if self.threshold_divisor == 0 {
            return Err(AppError::InvalidConfig(
                "threshold_divisor must be positive".to_string(),
            ));
        }
        if self.max_results == 0 {
            return Err(AppError::InvalidConfig(
                "max_results must be positive".to_string(),
            ));
        }
        if self.max_results > MAX_RESULTS {
            return Err(AppError::InvalidConfig(format!(
                "max_results must be at most {}, got {}",
                MAX_RESULTS, self.max_results
            )));
        }
        Ok(())
    }
}

/// A candidate that survived the threshold filter
#[derive(Debug)]
pub struct MatchResult<'a, T> {
    /// The matched candidate
    pub item: &'a T,
    /// Smallest edit distance across the candidate's labels
    pub distance: usize,
    /// Whether any label starts with the query
    pub starts_with_query: bool,
}

// Manual impls so `T` itself need not be Clone/Copy.
impl<T> Clone for MatchResult<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for MatchResult<'_, T> {}

impl<T> MatchResult<'_, T> {
    /// Filter step: keep prefix matches and anything within the threshold
    pub fn is_retained(&self, threshold: usize) -> bool {
        self.starts_with_query || self.distance <= threshold
    }
}

/// Stable ordering: prefix matches first, then ascending distance
pub fn order_matches<T>(matches: &mut [MatchResult<'_, T>]) {
    matches.sort_by(|a, b| {
        b.starts_with_query
            .cmp(&a.starts_with_query)
            .then(a.distance.cmp(&b.distance))
    });
}
