use tracing::debug;

use colloquy_core::errors::ColloquyResult;
use colloquy_core::statement::Statement;
use colloquy_core::traits::IStatementStorage;

/// Trains a store from ordered lists of conversation turns.
///
/// Each turn is linked to the turn before it: the statement for turn `n`
/// gains turn `n - 1`'s text in its `in_response_to` set, then is upserted.
/// Training the same texts along different orderings accumulates predecessor
/// links, which is how the stored relation becomes a DAG.
pub struct ListTrainer<'a> {
    storage: &'a dyn IStatementStorage,
}

impl<'a> ListTrainer<'a> {
    pub fn new(storage: &'a dyn IStatementStorage) -> Self {
        Self { storage }
    }

    /// Ingest one conversation given as ordered turn texts.
    pub fn train<I, S>(&self, turns: I) -> ColloquyResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut previous: Option<String> = None;
        let mut count = 0usize;

        for text in turns {
            let mut statement = Statement::new(text);
            if let Some(previous_text) = previous.take() {
                statement.add_response(previous_text);
            }
            previous = Some(statement.text.clone());
            self.storage.upsert(&statement)?;
            count += 1;
        }

        debug!(turns = count, "trained conversation");
        Ok(())
    }
}
