use crate::error::StorageError;
use crate::micro::Micro;
use async_trait::async_trait;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// A stored micro -> URL mapping.
///
/// Records are created once and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MicroRecord {
    /// The short identifier, unique across all records.
    pub micro: Micro,
    /// The original URL, stored verbatim.
    pub url: String,
    /// When the record was created.
    pub created_at: Timestamp,
}

impl MicroRecord {
    /// Creates a record stamped with the current time.
    pub fn new(micro: Micro, url: impl Into<String>) -> Self {
        Self {
            micro,
            url: url.into(),
            created_at: Timestamp::now(),
        }
    }
}

/// A read-only view of a repository.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Retrieves the record for a given micro.
    /// Returns `None` if the micro does not exist.
    async fn get(&self, micro: &Micro) -> Result<Option<MicroRecord>>;

    /// Returns every stored record, in no particular order.
    async fn list(&self) -> Result<Vec<MicroRecord>>;
}

#[async_trait]
pub trait Repository: ReadRepository {
    /// Inserts a new record if its micro is free.
    ///
    /// The existence check and the write are atomic: of two concurrent
    /// inserts for the same micro exactly one succeeds, the other gets
    /// `Err(DuplicateKey)`. An existing record is never overwritten.
    async fn insert(&self, record: MicroRecord) -> Result<()>;
}
