use crate::settings::{ShortenerSettings, DEFAULT_MAX_ATTEMPTS};
use async_trait::async_trait;
use microurl_core::{Micro, MicroRecord, Repository, Shortener, ShortenerError, StorageError};
use microurl_generator::{Generator, RandomGenerator};
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

/// A concrete implementation of the `Shortener` trait.
///
/// This service wraps a `Repository` and a `Generator`. The generator makes
/// no uniqueness promise; the repository's atomic insert-if-absent does.
/// A taken candidate is answered with a fresh one, up to `max_attempts`
/// candidates per registration.
#[derive(Debug)]
pub struct ShortenerService<R, G> {
    repository: Arc<R>,
    generator: Arc<G>,
    max_attempts: usize,
}

impl<R, G> Clone for ShortenerService<R, G> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            generator: Arc::clone(&self.generator),
            max_attempts: self.max_attempts,
        }
    }
}

impl<R: Repository> ShortenerService<R, RandomGenerator> {
    /// Creates a service drawing random micros of `settings.micro_length`.
    pub fn from_settings(
        repository: R,
        settings: ShortenerSettings,
    ) -> Result<Self, ShortenerError> {
        let generator = RandomGenerator::new(settings.micro_length)?;
        Ok(Self::new(repository, generator).with_max_attempts(settings.max_attempts))
    }
}

impl<R: Repository, G: Generator> ShortenerService<R, G> {
    /// Creates a new `ShortenerService` with a custom generator.
    pub fn new(repository: R, generator: G) -> Self {
        Self {
            repository: Arc::new(repository),
            generator: Arc::new(generator),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Sets how many candidates one registration may try.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Returns a reference to the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    fn generate_micro(&self) -> Micro {
        self.generator.generate().into()
    }
}

#[async_trait]
impl<R: Repository, G: Generator> Shortener for ShortenerService<R, G> {
    async fn register(&self, url: String) -> Result<Micro, ShortenerError> {
        for attempt in 1..=self.max_attempts {
            let micro = self.generate_micro();
            let record = MicroRecord::new(micro.clone(), url.clone());

            match self.repository.insert(record).await {
                Ok(()) => {
                    info!(micro = %micro, attempt, "registered micro");
                    return Ok(micro);
                }
                Err(StorageError::DuplicateKey(_)) => {
                    debug!(micro = %micro, attempt, "candidate micro already taken");
                }
                Err(err) => return Err(ShortenerError::Storage(err)),
            }
        }

        warn!(attempts = self.max_attempts, "no free micro found");
        Err(ShortenerError::GenerationExhausted {
            attempts: self.max_attempts,
        })
    }

    async fn resolve(&self, micro: &Micro) -> Result<String, ShortenerError> {
        trace!(micro = %micro, "resolving micro");

        match self.repository.get(micro).await? {
            Some(record) => Ok(record.url),
            None => {
                trace!(micro = %micro, "micro not found");
                Err(ShortenerError::NotFound(micro.to_string()))
            }
        }
    }

    async fn list_all(&self) -> Result<Vec<MicroRecord>, ShortenerError> {
        Ok(self.repository.list().await?)
    }
}
