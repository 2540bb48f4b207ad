use dashmap::DashMap;

use colloquy_core::errors::{ColloquyResult, StorageError};
use colloquy_core::statement::Statement;
use colloquy_core::traits::IStatementStorage;

/// In-memory statement store keyed by statement text.
///
/// Reads may run concurrently with other reads. A corpus scan takes no
/// snapshot, so writers racing a scan can surface a mix of old and new
/// records; callers needing consistency must exclude writers externally.
#[derive(Debug, Default)]
pub struct MemoryStore {
    statements: DashMap<String, Statement>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IStatementStorage for MemoryStore {
    fn find(&self, text: &str) -> ColloquyResult<Option<Statement>> {
        Ok(self.statements.get(text).map(|entry| entry.clone()))
    }

    fn responses_to(&self, text: &str) -> ColloquyResult<Vec<Statement>> {
        Ok(self
            .statements
            .iter()
            .filter(|entry| entry.responds_to(text))
            .map(|entry| entry.clone())
            .collect())
    }

    fn all(&self) -> ColloquyResult<Vec<Statement>> {
        Ok(self.statements.iter().map(|entry| entry.clone()).collect())
    }

    fn count(&self) -> ColloquyResult<usize> {
        Ok(self.statements.len())
    }

    fn upsert(&self, statement: &Statement) -> ColloquyResult<()> {
        self.statements
            .entry(statement.text.clone())
            .and_modify(|existing| {
                // Training may observe the same statement after different
                // predecessors; keep the union of predecessor keys.
                existing
                    .in_response_to
                    .extend(statement.in_response_to.iter().cloned());
                existing
                    .extra_data
                    .extend(statement.extra_data.clone());
            })
            .or_insert_with(|| statement.clone());
        Ok(())
    }

    fn remove(&self, text: &str) -> ColloquyResult<()> {
        self.statements
            .remove(text)
            .map(|_| ())
            .ok_or_else(|| StorageError::NotFound {
                text: text.to_string(),
            })?;
        Ok(())
    }
}
