//! Greedy sequence alignment: a single forward walk through the statement
//! graph, one level of children per conversation turn, no backtracking.
//!
//! Optimality is traded for cost linear in conversation length; the
//! branching factor of conversational corpora is typically small and recent
//! context dominates relevance.

use colloquy_core::errors::ColloquyResult;
use colloquy_core::statement::Statement;

use crate::graph::StatementGraph;

/// The outcome of aligning one candidate start against the remaining turns.
#[derive(Debug, Clone)]
pub struct Alignment {
    /// Sum of per-turn best-match scores along the walk.
    pub score: f64,
    /// The walked path, starting with the candidate statement.
    pub path: Vec<Statement>,
}

/// Walks the graph forward from a start statement, matching each remaining
/// turn against a bounded-depth expansion of the current node's children.
pub struct SequenceAligner<'a> {
    graph: &'a StatementGraph<'a>,
    search_depth: usize,
}

impl<'a> SequenceAligner<'a> {
    pub fn new(graph: &'a StatementGraph<'a>, search_depth: usize) -> Self {
        Self {
            graph,
            search_depth,
        }
    }

    /// Align `remaining` turns starting from `start`.
    ///
    /// Each matched turn advances the walk to its best-matching node. When
    /// the current node has no children the walk stops extending entirely:
    /// under a node-advancing walk no later turn can re-attach, so the
    /// remaining turns contribute neither score nor path. The returned path
    /// holds at most `remaining.len() + 1` statements.
    pub fn align(&self, start: &Statement, remaining: &[Statement]) -> ColloquyResult<Alignment> {
        let mut path = Vec::with_capacity(remaining.len() + 1);
        path.push(start.clone());

        let mut current = start.clone();
        let mut total = 0.0;

        for turn in remaining {
            let children = self.graph.children(&current)?;
            if children.is_empty() {
                break;
            }

            let Some((score, node)) =
                self.graph
                    .best_match_among_descendants(turn, &children, self.search_depth)?
            else {
                break;
            };

            total += score;
            current = node.clone();
            path.push(node);
        }

        Ok(Alignment { score: total, path })
    }
}
