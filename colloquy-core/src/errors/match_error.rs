/// Matching subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("comparison failed: {reason}")]
    ComparisonFailed { reason: String },

    #[error("search failed: {reason}")]
    SearchFailed { reason: String },
}
