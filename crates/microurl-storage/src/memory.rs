use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use microurl_core::repository::{MicroRecord, ReadRepository, Repository, Result};
use microurl_core::{Micro, StorageError};

/// In-memory implementation of the Repository trait using DashMap.
///
/// DashMap provides better concurrency than RwLock<HashMap> because it
/// uses sharded locks, allowing concurrent reads and writes to different
/// buckets without blocking. Nothing is persisted: the records live as long
/// as the repository does.
#[derive(Debug)]
pub struct InMemoryRepository {
    storage: DashMap<Micro, MicroRecord>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn get(&self, micro: &Micro) -> Result<Option<MicroRecord>> {
        Ok(self.storage.get(micro).map(|entry| entry.value().clone()))
    }

    async fn list(&self) -> Result<Vec<MicroRecord>> {
        Ok(self
            .storage
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn insert(&self, record: MicroRecord) -> Result<()> {
        // The entry guard holds the shard's write lock, so the vacancy check
        // and the write cannot interleave with another insert of this key.
        match self.storage.entry(record.micro.clone()) {
            Entry::Occupied(_) => Err(StorageError::DuplicateKey(record.micro.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }
}
