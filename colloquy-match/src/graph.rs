//! Statement graph: a stateless traversal view over the statement store.
//!
//! "Child of S" means any stored statement whose `in_response_to` contains
//! S's text; "parent of S" is the predecessor set of the stored statement
//! matching S's text exactly. Both are computed from the store on every
//! call; the view keeps no cache. The relation may be a DAG (multiple
//! parents, diamonds), never a strict tree.

use std::collections::HashSet;

use colloquy_core::errors::ColloquyResult;
use colloquy_core::statement::Statement;
use colloquy_core::traits::{IComparator, IStatementStorage};
use tracing::trace;

/// Traversal view over `(store, comparator)`.
pub struct StatementGraph<'a> {
    storage: &'a dyn IStatementStorage,
    comparator: &'a dyn IComparator,
}

impl<'a> StatementGraph<'a> {
    pub fn new(storage: &'a dyn IStatementStorage, comparator: &'a dyn IComparator) -> Self {
        Self {
            storage,
            comparator,
        }
    }

    /// All stored statements observed in response to `statement`.
    pub fn children(&self, statement: &Statement) -> ColloquyResult<Vec<Statement>> {
        self.storage.responses_to(&statement.text)
    }

    /// The statements `statement` has been observed responding to.
    ///
    /// A statement unknown to the store has no parents: it is treated as a
    /// conversation root, not an error. Predecessor keys without a stored
    /// record resolve to bare statements carrying just the key.
    pub fn parents(&self, statement: &Statement) -> ColloquyResult<Vec<Statement>> {
        let Some(stored) = self.storage.find(&statement.text)? else {
            return Ok(Vec::new());
        };

        let mut parents = Vec::with_capacity(stored.in_response_to.len());
        for key in &stored.in_response_to {
            match self.storage.find(key)? {
                Some(parent) => parents.push(parent),
                None => parents.push(Statement::new(key.clone())),
            }
        }
        Ok(parents)
    }

    /// Expand `roots` through `max_depth` additional levels of children,
    /// then return the accumulated node scoring highest against `target`.
    ///
    /// Expansion is iterative and deduplicated by text key, accumulating
    /// nodes in discovery order (roots first, then level by level), so the
    /// first-seen-wins tie rule of [`max_comparison`] is reproducible.
    /// Empty roots yield `Ok(None)`.
    pub fn best_match_among_descendants(
        &self,
        target: &Statement,
        roots: &[Statement],
        max_depth: usize,
    ) -> ColloquyResult<Option<(f64, Statement)>> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut accumulated: Vec<Statement> = Vec::new();
        let mut frontier: Vec<Statement> = Vec::new();

        for root in roots {
            if seen.insert(root.text.clone()) {
                accumulated.push(root.clone());
                frontier.push(root.clone());
            }
        }

        for depth in 0..max_depth {
            if frontier.is_empty() {
                break;
            }
            let mut next = Vec::new();
            for node in &frontier {
                for child in self.children(node)? {
                    if seen.insert(child.text.clone()) {
                        accumulated.push(child.clone());
                        next.push(child);
                    }
                }
            }
            trace!(depth, frontier = next.len(), "expanded descendant level");
            frontier = next;
        }

        max_comparison(self.comparator, target, &accumulated)
    }
}

/// Fold over `candidates` returning the one scoring highest against
/// `target`, with its score.
///
/// Replacement requires a strictly greater score, so the first-encountered
/// maximum wins ties. Empty input yields `Ok(None)`.
pub fn max_comparison(
    comparator: &dyn IComparator,
    target: &Statement,
    candidates: &[Statement],
) -> ColloquyResult<Option<(f64, Statement)>> {
    let mut best: Option<(f64, &Statement)> = None;

    for candidate in candidates {
        let score = comparator.compare(target, candidate)?;
        match best {
            Some((max, _)) if score <= max => {}
            _ => best = Some((score, candidate)),
        }
    }

    Ok(best.map(|(score, statement)| (score, statement.clone())))
}
