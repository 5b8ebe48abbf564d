use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    generate_micro_handler, health_handler, list_micros_handler, not_found_handler,
    redirect_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/generate_micro", post(generate_micro_handler))
            .route("/all", get(list_micros_handler))
            .route("/{micro}", get(redirect_handler))
            .fallback(not_found_handler)
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
