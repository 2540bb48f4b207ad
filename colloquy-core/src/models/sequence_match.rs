use serde::{Deserialize, Serialize};

use crate::statement::Statement;

/// The result of matching a conversation against the stored corpus: the
/// closest known conversational path plus the combined confidence score.
///
/// `confidence` is the winning candidate's comparison score plus the sum of
/// per-turn alignment scores; single comparisons sit on a 0–100 scale but
/// the sum across turns is unbounded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceMatch {
    /// The matched stored statements, in conversational order.
    pub statements: Vec<Statement>,
    /// Combined candidate + alignment score of the winning path.
    pub confidence: f64,
}

impl SequenceMatch {
    pub fn new(statements: Vec<Statement>, confidence: f64) -> Self {
        Self {
            statements,
            confidence,
        }
    }

    /// Number of turns in the matched path.
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
