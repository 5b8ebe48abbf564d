pub mod random;

pub use random::{random_micro, RandomGenerator, ALPHABET, DEFAULT_MICRO_LENGTH};

use microurl_core::Micro;

/// Trait for generating candidate micros.
///
/// Implementations are pure generators that don't interact with storage.
/// They make no uniqueness promise: the mapping store rejects a taken
/// candidate and the caller asks for another one.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<Micro>;

    /// Generates a candidate micro.
    fn generate(&self) -> Self::Output;
}
