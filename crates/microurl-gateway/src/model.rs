mod health;
mod micro;

pub use health::HealthResponse;
pub use micro::{GenerateMicroForm, MicroEntry};
