//! Default values for configuration fields.

/// Candidate list cap per query turn (the ranker's K).
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Levels of children expanded beyond the root set during best-match search.
pub const DEFAULT_SEARCH_DEPTH: usize = 2;
