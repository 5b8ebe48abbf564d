pub use microurl_generator::DEFAULT_MICRO_LENGTH;
use typed_builder::TypedBuilder;

/// Default number of candidates tried before registration gives up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 8;

/// Tuning knobs for [`ShortenerService`](crate::ShortenerService).
#[derive(Debug, Clone, Copy, PartialEq, Eq, TypedBuilder)]
pub struct ShortenerSettings {
    /// Length of generated micros.
    #[builder(default = DEFAULT_MICRO_LENGTH)]
    pub micro_length: usize,
    /// How many candidate micros one registration may try. Zero is treated
    /// as one.
    #[builder(default = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,
}

impl Default for ShortenerSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = ShortenerSettings::default();
        assert_eq!(settings.micro_length, 6);
        assert_eq!(settings.max_attempts, DEFAULT_MAX_ATTEMPTS);
    }

    #[test]
    fn builder_overrides() {
        let settings = ShortenerSettings::builder()
            .micro_length(8)
            .max_attempts(3)
            .build();
        assert_eq!(settings.micro_length, 8);
        assert_eq!(settings.max_attempts, 3);
    }
}
