pub mod memory;
pub mod sqlite;

pub use memory::InMemoryRepository;
pub use sqlite::SqliteRepository;

pub use microurl_core::repository::{MicroRecord, ReadRepository, Repository, Result};
pub use microurl_core::StorageError;
