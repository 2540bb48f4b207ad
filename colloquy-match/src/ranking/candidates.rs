use colloquy_core::statement::Statement;

/// A candidate starting point for sequence alignment: how closely a stored
/// statement matched one of the query turns.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    /// Comparison score against the query turn, 0–100.
    pub score: f64,
    /// The stored statement that matched.
    pub statement: Statement,
    /// Index of the query turn this candidate was scored against.
    pub query_index: usize,
}

/// A per-query-turn candidate list capped at a fixed number of entries.
///
/// Pushing beyond capacity sorts ascending by score and evicts the current
/// minimum. The sort is stable, so among tied scores the earliest-pushed
/// entry is the one evicted; across a whole corpus scan this makes the
/// retained set dependent on enumeration order when scores tie (non-strict
/// top-K).
#[derive(Debug)]
pub struct BoundedCandidateList {
    cap: usize,
    entries: Vec<(f64, Statement)>,
}

impl BoundedCandidateList {
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            entries: Vec::with_capacity(cap.saturating_add(1)),
        }
    }

    /// Append a scored statement, evicting the minimum if the list now
    /// exceeds capacity.
    pub fn push(&mut self, score: f64, statement: Statement) {
        self.entries.push((score, statement));
        if self.entries.len() > self.cap {
            self.entries
                .sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
            self.entries.remove(0);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the list, yielding the retained (score, statement) pairs.
    pub fn into_entries(self) -> Vec<(f64, Statement)> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statement(text: &str) -> Statement {
        Statement::new(text)
    }

    #[test]
    fn stays_within_capacity() {
        let mut list = BoundedCandidateList::new(3);
        for i in 0..10 {
            list.push(i as f64, statement(&format!("s{i}")));
        }
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn evicts_the_minimum_score() {
        let mut list = BoundedCandidateList::new(2);
        list.push(50.0, statement("mid"));
        list.push(10.0, statement("low"));
        list.push(90.0, statement("high"));

        let texts: Vec<String> = list.into_entries().into_iter().map(|(_, s)| s.text).collect();
        assert!(texts.contains(&"mid".to_string()));
        assert!(texts.contains(&"high".to_string()));
        assert!(!texts.contains(&"low".to_string()));
    }

    #[test]
    fn tied_scores_evict_the_earliest_pushed() {
        let mut list = BoundedCandidateList::new(2);
        list.push(30.0, statement("first"));
        list.push(30.0, statement("second"));
        list.push(30.0, statement("third"));

        let texts: Vec<String> = list.into_entries().into_iter().map(|(_, s)| s.text).collect();
        assert_eq!(texts, ["second", "third"]);
    }

    #[test]
    fn zero_capacity_retains_nothing() {
        let mut list = BoundedCandidateList::new(0);
        list.push(100.0, statement("anything"));
        assert!(list.is_empty());
    }
}
