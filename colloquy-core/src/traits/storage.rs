use crate::errors::ColloquyResult;
use crate::statement::Statement;

/// Statement store: exact lookup + containment filtering + full enumeration,
/// plus the mutating surface used by training.
///
/// The matching core only calls the read side; all writes happen during
/// training, outside a matching request. Results must be stable across calls
/// within one request. No snapshot isolation is taken during a corpus scan,
/// so concurrent writers racing a scan is the caller's problem to exclude.
pub trait IStatementStorage: Send + Sync {
    // --- Lookup ---
    /// Exact-text lookup. `Ok(None)` when the statement is unknown.
    fn find(&self, text: &str) -> ColloquyResult<Option<Statement>>;
    /// All stored statements whose `in_response_to` contains `text`,
    /// deduplicated by the store.
    fn responses_to(&self, text: &str) -> ColloquyResult<Vec<Statement>>;

    // --- Enumeration ---
    /// Every stored statement.
    fn all(&self) -> ColloquyResult<Vec<Statement>>;
    fn count(&self) -> ColloquyResult<usize>;

    // --- Training ---
    /// Insert or merge a statement. Implementations merge `in_response_to`
    /// keys union-wise with any existing record for the same text.
    fn upsert(&self, statement: &Statement) -> ColloquyResult<()>;
    fn remove(&self, text: &str) -> ColloquyResult<()>;
}
