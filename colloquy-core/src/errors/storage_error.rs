/// Statement-store errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage backend error: {message}")]
    Backend { message: String },

    #[error("statement not found: {text}")]
    NotFound { text: String },
}
