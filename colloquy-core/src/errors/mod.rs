pub mod match_error;
pub mod storage_error;

pub use match_error::MatchError;
pub use storage_error::StorageError;

/// Top-level error type for the colloquy workspace.
#[derive(Debug, thiserror::Error)]
pub enum ColloquyError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Match(#[from] MatchError),

    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience result alias used across all colloquy crates.
pub type ColloquyResult<T> = Result<T, ColloquyError>;
