use crate::error::ShortenerError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A validated micro: the short identifier that stands in for a long URL.
///
/// Micros are 1-64 characters long and contain only ASCII letters and
/// digits.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Micro(String);

pub const MAX_LENGTH: usize = 64;

impl Micro {
    /// Creates a new `Micro` after validating the input.
    pub fn new(micro: impl Into<String>) -> std::result::Result<Self, ShortenerError> {
        let micro = micro.into();
        Self::validate(&micro)?;
        Ok(Self(micro))
    }

    /// Creates a `Micro` without validation.
    ///
    /// Use this only for values produced by trusted internal sources
    /// (the code generator, or rows read back from the mapping store).
    pub fn new_unchecked(micro: impl Into<String>) -> Self {
        Self(micro.into())
    }

    /// Returns the micro as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(micro: &str) -> std::result::Result<(), ShortenerError> {
        if micro.is_empty() || micro.len() > MAX_LENGTH {
            return Err(ShortenerError::InvalidMicro(format!(
                "length must be between 1 and {}, got {}",
                MAX_LENGTH,
                micro.len()
            )));
        }

        if !micro.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ShortenerError::InvalidMicro(format!(
                "must contain only ASCII letters and digits: '{}'",
                micro
            )));
        }

        Ok(())
    }
}

impl Display for Micro {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Micro {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Micro {
    type Error = ShortenerError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Micro> for String {
    fn from(value: Micro) -> Self {
        value.0
    }
}
