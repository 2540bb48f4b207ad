//! # colloquy-storage
//!
//! Reference statement store for the colloquy matching system: an in-memory,
//! concurrent-read-safe implementation of `IStatementStorage`, plus the
//! list trainer that seeds it from ordered conversations.
//!
//! Any durable storage technology can stand in for `MemoryStore` by
//! implementing the same trait; the matching core never depends on this
//! crate.

pub mod memory_store;
pub mod trainer;

pub use memory_store::MemoryStore;
pub use trainer::ListTrainer;
