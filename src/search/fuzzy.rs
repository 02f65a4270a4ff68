//! Fuzzy Matching Engine
//!
//! Edit-distance search-as-you-type over caller supplied candidates. The
//! matcher owns nothing but its policy: every call gets a fresh candidate
//! snapshot and returns fresh results, so repeated calls with the same
//! arguments always agree.

use super::distance::{levenshtein, threshold};
use super::ranking::{order_matches, MatchPolicy, MatchResult, MAX_RESULTS};
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

/// Extracts one comparable label from a candidate
pub type LabelSelector<T> = fn(&T) -> &str;

/// Records that know their own match labels
pub trait Labeled {
    /// Labels compared against the query, in no particular priority
    fn labels(&self) -> Vec<&str>;
}

/// Normalize text for matching
/// - Unicode NFC normalization
/// - Lower-case
pub fn normalize_label(text: &str) -> String {
    text.nfc().collect::<String>().to_lowercase()
}

/// Fuzzy matcher with its ranking policy
#[derive(Debug, Clone, Default)]
pub struct FuzzyMatcher {
    policy: MatchPolicy,
}

impl FuzzyMatcher {
    /// Create a matcher with a custom policy
    pub fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    /// Policy this matcher ranks with
    pub fn policy(&self) -> &MatchPolicy {
        &self.policy
    }

    /// Rank candidates by the labels the selectors pick out, best first
    pub fn rank<'a, T>(
        &self,
        query: &str,
        candidates: &'a [T],
        selectors: &[LabelSelector<T>],
    ) -> Vec<&'a T> {
        self.matches(query, candidates, selectors)
            .into_iter()
            .map(|m| m.item)
            .collect()
    }

    /// Rank candidates that expose their own labels
    pub fn rank_labeled<'a, T: Labeled>(&self, query: &str, candidates: &'a [T]) -> Vec<&'a T> {
        self.matches_labeled(query, candidates)
            .into_iter()
            .map(|m| m.item)
            .collect()
    }

    /// Same as [`FuzzyMatcher::rank`] but keeps distance and prefix flag
    pub fn matches<'a, T>(
        &self,
        query: &str,
        candidates: &'a [T],
        selectors: &[LabelSelector<T>],
    ) -> Vec<MatchResult<'a, T>> {
        self.collect(query, candidates, |item: &'a T| {
            selectors.iter().map(|select| select(item)).collect()
        })
    }

    pub fn matches_labeled<'a, T: Labeled>(
        &self,
        query: &str,
        candidates: &'a [T],
    ) -> Vec<MatchResult<'a, T>> {
        self.collect(query, candidates, |item: &'a T| item.labels())
    }

    fn collect<'a, T, F>(&self, query: &str, candidates: &'a [T], labels: F) -> Vec<MatchResult<'a, T>>
    where
        F: Fn(&'a T) -> Vec<&'a str>,
    {
        if query.trim().is_empty() {
            return Vec::new();
        }

        // Only blankness is decided on the trimmed query; scoring uses it as typed.
        // The threshold counts the raw query's chars, before NFC composition.
        let needle = normalize_label(query);
        let limit = threshold(query.chars().count(), &self.policy);

        let mut results: Vec<MatchResult<'a, T>> = candidates
            .iter()
            .filter_map(|item| Self::score(&needle, item, &labels(item)))
            .filter(|m| m.is_retained(limit))
            .collect();

        let retained = results.len();
        order_matches(&mut results);
        results.truncate(self.policy.max_results.min(MAX_RESULTS));

        debug!(
            candidates = candidates.len(),
            retained,
            returned = results.len(),
            threshold = limit,
            "ranked fuzzy matches"
        );

        results
    }

    /// Score one candidate; `None` when it has no labels at all
    fn score<'a, T>(needle: &str, item: &'a T, labels: &[&str]) -> Option<MatchResult<'a, T>> {
        let mut distance: Option<usize> = None;
        let mut starts_with_query = false;

        for label in labels {
            let label = normalize_label(label);
            let d = levenshtein(needle, &label);
            distance = Some(distance.map_or(d, |best| best.min(d)));
            starts_with_query |= label.starts_with(needle);
        }

        distance.map(|distance| MatchResult {
            item,
            distance,
            starts_with_query,
        })
    }
}

/// Rank with the default policy
pub fn rank<'a, T>(query: &str, candidates: &'a [T], selectors: &[LabelSelector<T>]) -> Vec<&'a T> {
    FuzzyMatcher::default().rank(query, candidates, selectors)
}

/// Standalone edit distance for other fuzzy-matching needs
pub fn distance(a: &str, b: &str) -> usize {
    levenshtein(a, b)
}
