pub mod sequence_match;

pub use sequence_match::SequenceMatch;
