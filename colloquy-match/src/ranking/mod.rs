//! CandidateRanker: one corpus pass producing capped per-turn candidate
//! lists, flattened in query order.

pub mod candidates;

pub use candidates::{BoundedCandidateList, ScoredCandidate};

use colloquy_core::errors::ColloquyResult;
use colloquy_core::statement::Statement;
use colloquy_core::traits::{IComparator, IStatementStorage};
use tracing::debug;

/// Scans the whole corpus once per request, comparing every stored
/// statement against every query turn and keeping at most `max_results`
/// candidates per turn.
///
/// The per-turn lists are approximate top-K: when scores tie at the
/// eviction boundary, which entry survives depends on corpus enumeration
/// order. Cost is O(corpus × queries × comparator).
pub struct CandidateRanker {
    max_results: usize,
}

impl CandidateRanker {
    pub fn new(max_results: usize) -> Self {
        Self { max_results }
    }

    /// Rank the corpus against `queries`. Output is the concatenation of
    /// the per-query capped lists, grouped by `query_index`.
    pub fn rank(
        &self,
        storage: &dyn IStatementStorage,
        comparator: &dyn IComparator,
        queries: &[Statement],
    ) -> ColloquyResult<Vec<ScoredCandidate>> {
        if queries.is_empty() {
            return Ok(Vec::new());
        }

        let mut lists: Vec<BoundedCandidateList> = queries
            .iter()
            .map(|_| BoundedCandidateList::new(self.max_results))
            .collect();

        for known in storage.all()? {
            for (index, query) in queries.iter().enumerate() {
                let score = comparator.compare(query, &known)?;
                lists[index].push(score, known.clone());
            }
        }

        let mut flattened = Vec::new();
        for (query_index, list) in lists.into_iter().enumerate() {
            for (score, statement) in list.into_entries() {
                flattened.push(ScoredCandidate {
                    score,
                    statement,
                    query_index,
                });
            }
        }

        debug!(candidates = flattened.len(), "candidate ranking complete");
        Ok(flattened)
    }
}
