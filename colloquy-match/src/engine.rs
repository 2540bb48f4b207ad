//! MatchEngine: implements ISequenceMatcher, orchestrates the full match.
//!
//! Stage 1: candidate ranking (corpus scan → capped top-K per query turn)
//! Stage 2: greedy alignment from every candidate → highest combined score

use colloquy_core::config::MatchConfig;
use colloquy_core::errors::ColloquyResult;
use colloquy_core::models::SequenceMatch;
use colloquy_core::statement::{Conversation, Statement};
use colloquy_core::traits::{IComparator, ISequenceMatcher, IStatementStorage};
use tracing::{debug, info};

use crate::align::SequenceAligner;
use crate::graph::StatementGraph;
use crate::ranking::CandidateRanker;

/// The main matching engine. Borrows its collaborators for the duration of
/// a request and keeps no state between calls.
pub struct MatchEngine<'a> {
    storage: &'a dyn IStatementStorage,
    comparator: &'a dyn IComparator,
    config: MatchConfig,
}

impl<'a> MatchEngine<'a> {
    pub fn new(storage: &'a dyn IStatementStorage, comparator: &'a dyn IComparator) -> Self {
        Self::with_config(storage, comparator, MatchConfig::default())
    }

    pub fn with_config(
        storage: &'a dyn IStatementStorage,
        comparator: &'a dyn IComparator,
        config: MatchConfig,
    ) -> Self {
        Self {
            storage,
            comparator,
            config,
        }
    }

    /// Find the closest previously observed path for `conversation`.
    ///
    /// `Ok(None)` when the conversation is empty, the corpus is empty, or
    /// no candidate scores positively.
    pub fn find_closest(
        &self,
        conversation: &Conversation,
    ) -> ColloquyResult<Option<SequenceMatch>> {
        let turns = conversation.statements();
        if turns.is_empty() {
            debug!("empty conversation, nothing to match");
            return Ok(None);
        }

        // Stage 1: candidate starting points across the whole corpus.
        let ranker = CandidateRanker::new(self.config.max_results);
        let candidates = ranker.rank(self.storage, self.comparator, turns)?;
        if candidates.is_empty() {
            debug!("empty corpus, no candidates");
            return Ok(None);
        }

        // Stage 2: align each candidate against the remaining turns; the
        // candidate is taken as matching the first turn.
        let graph = StatementGraph::new(self.storage, self.comparator);
        let aligner = SequenceAligner::new(&graph, self.config.search_depth);
        let remaining = &turns[1..];

        let mut best: Option<(f64, Vec<Statement>)> = None;
        for candidate in &candidates {
            let alignment = aligner.align(&candidate.statement, remaining)?;
            let combined = candidate.score + alignment.score;

            // Strictly greater to replace: the earliest-seen candidate wins
            // ties.
            let replace = match &best {
                Some((max, _)) => combined > *max,
                None => true,
            };
            if replace {
                best = Some((combined, alignment.path));
            }
        }

        match best {
            Some((confidence, statements)) if confidence > 0.0 => {
                info!(
                    confidence,
                    path_len = statements.len(),
                    "closest sequence selected"
                );
                Ok(Some(SequenceMatch::new(statements, confidence)))
            }
            _ => {
                debug!("no candidate scored positively");
                Ok(None)
            }
        }
    }
}

impl ISequenceMatcher for MatchEngine<'_> {
    fn find_closest(&self, conversation: &Conversation) -> ColloquyResult<Option<SequenceMatch>> {
        MatchEngine::find_closest(self, conversation)
    }
}
