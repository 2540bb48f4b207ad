//! # colloquy-core
//!
//! Foundation crate for the colloquy conversational matching system.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod statement;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{ColloquyConfig, MatchConfig};
pub use errors::{ColloquyError, ColloquyResult};
pub use models::SequenceMatch;
pub use statement::{Conversation, Statement};
