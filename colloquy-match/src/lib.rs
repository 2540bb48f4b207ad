//! # colloquy-match
//!
//! The matching engine: given an ongoing conversation, find the closest
//! previously observed conversational path in the stored corpus.
//!
//! Pipeline: conversation turns → candidate ranking (capped top-K per turn)
//! → greedy alignment from each candidate through the statement graph →
//! highest combined score wins.
//!
//! The engine is a pure function of its store and comparator: it holds no
//! cache and no mutable state between calls, and it never writes to the
//! store.

pub mod align;
pub mod engine;
pub mod graph;
pub mod ranking;
pub mod subsequence;

pub use align::{Alignment, SequenceAligner};
pub use engine::MatchEngine;
pub use graph::{max_comparison, StatementGraph};
pub use ranking::{BoundedCandidateList, CandidateRanker, ScoredCandidate};
pub use subsequence::ordered_contiguous_subsequences;
