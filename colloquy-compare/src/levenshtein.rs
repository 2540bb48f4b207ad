use colloquy_core::constants::{MAX_COMPARISON_SCORE, MIN_COMPARISON_SCORE};
use colloquy_core::errors::ColloquyResult;
use colloquy_core::statement::Statement;
use colloquy_core::traits::IComparator;

/// Levenshtein-ratio comparator on lowercased text.
///
/// Identical normalized texts score 100; texts sharing nothing score 0.
/// Two empty texts are considered identical.
#[derive(Debug, Default, Clone, Copy)]
pub struct LevenshteinComparator;

impl LevenshteinComparator {
    pub fn new() -> Self {
        Self
    }
}

impl IComparator for LevenshteinComparator {
    fn compare(&self, a: &Statement, b: &Statement) -> ColloquyResult<f64> {
        let left = a.text.to_lowercase();
        let right = b.text.to_lowercase();

        if left == right {
            return Ok(MAX_COMPARISON_SCORE);
        }

        let max_len = left.chars().count().max(right.chars().count());
        if max_len == 0 {
            return Ok(MAX_COMPARISON_SCORE);
        }

        let dist = levenshtein(&left, &right);
        let ratio = 1.0 - (dist as f64 / max_len as f64);
        Ok((ratio * MAX_COMPARISON_SCORE).max(MIN_COMPARISON_SCORE))
    }
}

/// Simple Levenshtein distance.
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (m, n) = (a.len(), b.len());
    let mut dp = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in dp.iter_mut().enumerate().take(m + 1) {
        row[0] = i;
    }
    for (j, val) in dp[0].iter_mut().enumerate().take(n + 1) {
        *val = j;
    }
    for i in 1..=m {
        for j in 1..=n {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            dp[i][j] = (dp[i - 1][j] + 1)
                .min(dp[i][j - 1] + 1)
                .min(dp[i - 1][j - 1] + cost);
        }
    }
    dp[m][n]
}
