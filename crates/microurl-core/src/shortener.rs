use crate::micro::Micro;
use crate::repository::MicroRecord;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, crate::error::ShortenerError>;

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Registers a URL under a freshly generated micro and returns it.
    ///
    /// The record is committed before this returns.
    async fn register(&self, url: String) -> Result<Micro>;

    /// Resolves a micro to the URL it was registered with.
    /// Fails with `NotFound` if the micro was never registered.
    async fn resolve(&self, micro: &Micro) -> Result<String>;

    /// Returns every registered record. Empty when nothing is registered.
    async fn list_all(&self) -> Result<Vec<MicroRecord>>;
}
