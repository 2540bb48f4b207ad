use crate::errors::ColloquyResult;
use crate::statement::Statement;

/// Pairwise text-similarity scorer.
///
/// Convention: 0–100 for a single comparison, 100 meaning an exact match.
/// Failures propagate to the caller as fatal for the current request; the
/// matching core never retries a comparison.
pub trait IComparator: Send + Sync {
    fn compare(&self, a: &Statement, b: &Statement) -> ColloquyResult<f64>;
}
