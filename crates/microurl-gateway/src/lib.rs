//! HTTP gateway for the microurl shortener.
//!
//! A thin presentation layer: it registers URLs, lists every mapping and
//! turns a micro into an HTTP redirect. All state lives behind the
//! [`Shortener`](microurl_core::Shortener) held by [`AppState`].

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod redirect;
pub mod state;

pub use app::App;
pub use state::AppState;
