pub mod comparator;
pub mod matcher;
pub mod storage;

pub use comparator::IComparator;
pub use matcher::ISequenceMatcher;
pub use storage::IStatementStorage;
