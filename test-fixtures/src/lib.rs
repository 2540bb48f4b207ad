//! Shared corpus builders for colloquy integration tests.
//!
//! Helpers here panic on failure; they are only compiled into test targets.

use colloquy_core::statement::{Conversation, Statement};
use colloquy_core::traits::IStatementStorage;
use colloquy_storage::{ListTrainer, MemoryStore};

/// Build a conversation from ordered turn texts, each linked to the
/// previous one.
pub fn conversation(turns: &[&str]) -> Conversation {
    Conversation::from_texts(turns.iter().copied())
}

/// Train one ordered sequence of turns into `storage`.
///
/// # Panics
/// Panics if the store rejects an upsert.
pub fn train_sequence(storage: &dyn IStatementStorage, turns: &[&str]) {
    ListTrainer::new(storage)
        .train(turns.iter().copied())
        .expect("training fixture sequence");
}

/// A fresh in-memory store seeded with the given sequences.
pub fn seeded_store(sequences: &[&[&str]]) -> MemoryStore {
    let store = MemoryStore::new();
    for sequence in sequences {
        train_sequence(&store, sequence);
    }
    store
}

/// The canonical greeting corpus used across the matching tests: two
/// conversations sharing a first turn, so the graph branches.
pub fn greeting_store() -> MemoryStore {
    seeded_store(&[
        &[
            "Hi, how are you?",
            "I am good, how about you?",
            "I am also good.",
        ],
        &["Hi, how are you?", "I am great!", "That is good to hear."],
    ])
}

/// A single statement with no predecessors.
pub fn statement(text: &str) -> Statement {
    Statement::new(text)
}
