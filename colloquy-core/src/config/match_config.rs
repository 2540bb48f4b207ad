use serde::{Deserialize, Serialize};

use super::defaults;

/// Matching subsystem configuration.
///
/// Both knobs are threaded all the way into the graph search: `max_results`
/// caps each query turn's candidate list, and `search_depth` bounds how many
/// levels of children the best-match expansion walks beyond its roots.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Maximum candidates retained per query turn by the ranker.
    pub max_results: usize,
    /// Levels of children expanded beyond the roots in best-match search.
    pub search_depth: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_results: defaults::DEFAULT_MAX_RESULTS,
            search_depth: defaults::DEFAULT_SEARCH_DEPTH,
        }
    }
}
