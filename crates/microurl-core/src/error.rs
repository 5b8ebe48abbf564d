use thiserror::Error;

/// Errors raised by a mapping store backend.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// A record with this micro already exists. Transient from the
    /// shortener's point of view: registration regenerates and retries.
    #[error("micro already exists: {0}")]
    DuplicateKey(String),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
}

/// Errors surfaced by the [`Shortener`](crate::Shortener) operations.
#[derive(Debug, Clone, Error)]
pub enum ShortenerError {
    #[error("micro not found: {0}")]
    NotFound(String),
    #[error("no free micro after {attempts} attempts")]
    GenerationExhausted { attempts: usize },
    #[error("invalid micro: {0}")]
    InvalidMicro(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
