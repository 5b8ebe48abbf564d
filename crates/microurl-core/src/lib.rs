//! Core types and traits for the microurl shortener.
//!
//! This crate provides the types shared by the code generator, the
//! mapping store backends, the shortener service and the HTTP gateway.

pub mod error;
pub mod micro;
pub mod repository;
pub mod shortener;

pub use error::{ShortenerError, StorageError};
pub use micro::Micro;
pub use repository::{MicroRecord, ReadRepository, Repository};
pub use shortener::Shortener;
