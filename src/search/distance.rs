//! Levenshtein edit distance
//!
//! Case-sensitive and operating on Unicode scalar values. Callers that want
//! case-insensitive matching normalize both sides first (see
//! [`super::fuzzy::normalize_label`]).

use super::ranking::MatchPolicy;

/// Minimum number of single-character insertions, deletions or
/// substitutions needed to turn `a` into `b`.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (m, n) = (a.len(), b.len());

    let mut table = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=n {
        table[0][j] = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            table[i][j] = if a[i - 1] == b[j - 1] {
                table[i - 1][j - 1]
            } else {
                // deletion, insertion, substitution
                1 + table[i - 1][j].min(table[i][j - 1]).min(table[i - 1][j - 1])
            };
        }
    }

    table[m][n]
}

/// Largest distance a non-prefix candidate may have and still be kept.
///
/// Grows with the query length so longer queries tolerate more typos, but
/// never drops below the policy floor.
pub fn threshold(query_len: usize, policy: &MatchPolicy) -> usize {
    policy
        .threshold_floor
        .max(query_len / policy.threshold_divisor.max(1))
}
