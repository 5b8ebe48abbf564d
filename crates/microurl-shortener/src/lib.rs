//! URL shortener service implementation.
//!
//! This crate ties a [`Generator`](microurl_generator::Generator) to a
//! [`Repository`](microurl_core::Repository): registration draws candidate
//! micros until the store accepts one, resolution is a point lookup. Core
//! types are re-exported from `microurl_core`.

pub mod service;
pub mod settings;

pub use microurl_core::{Micro, MicroRecord, Shortener, ShortenerError};
pub use service::ShortenerService;
pub use settings::ShortenerSettings;
