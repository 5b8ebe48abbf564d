use crate::Generator;
use microurl_core::micro::MAX_LENGTH;
use microurl_core::{Micro, ShortenerError};
use rand::Rng;

/// The 62 symbols a micro is drawn from.
pub const ALPHABET: &[u8; 62] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Default micro length. 62^6 gives roughly 5.7e10 codes.
pub const DEFAULT_MICRO_LENGTH: usize = 6;

/// Returns `length` characters, each drawn independently and uniformly
/// from [`ALPHABET`].
pub fn random_micro(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Generates random fixed-length micros over [`ALPHABET`].
///
/// Stateless apart from the configured length; every call draws fresh
/// randomness from the thread-local RNG.
#[derive(Debug, Clone, Copy)]
pub struct RandomGenerator {
    length: usize,
}

impl RandomGenerator {
    /// Creates a generator producing micros of `length` characters.
    pub fn new(length: usize) -> Result<Self, ShortenerError> {
        if length == 0 || length > MAX_LENGTH {
            return Err(ShortenerError::InvalidMicro(format!(
                "micro length must be between 1 and {}, got {}",
                MAX_LENGTH, length
            )));
        }
        Ok(Self { length })
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self {
            length: DEFAULT_MICRO_LENGTH,
        }
    }
}

impl Generator for RandomGenerator {
    type Output = Micro;

    fn generate(&self) -> Self::Output {
        Micro::new_unchecked(random_micro(self.length))
    }
}
