mod health;
mod micro;

pub use health::health_handler;
pub use micro::{generate_micro_handler, list_micros_handler, not_found_handler, redirect_handler};
