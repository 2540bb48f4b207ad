//! # colloquy-compare
//!
//! Reference `IComparator` implementation: Levenshtein distance ratio on
//! normalized text, scaled to the 0–100 convention the matching core
//! expects. Any scorer (embedding cosine, token overlap, a remote service)
//! can replace it by implementing the same trait.

pub mod levenshtein;

pub use levenshtein::LevenshteinComparator;
