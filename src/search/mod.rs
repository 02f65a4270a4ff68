//! Fuzzy search-as-you-type
//!
//! Edit-distance ranking for ticker and client autocomplete. One module
//! serves every call site so thresholds and ordering cannot drift apart.

pub mod distance;
pub mod fuzzy;
pub mod ranking;


pub use distance::{levenshtein, threshold};
pub use fuzzy::{distance, normalize_label, rank, FuzzyMatcher, LabelSelector, Labeled};
pub use ranking::{order_matches, MatchPolicy, MatchResult, MAX_RESULTS};
