use crate::error::{AppError, Result};
use crate::model::{GenerateMicroForm, MicroEntry};
use crate::redirect::redirect_target;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use microurl_core::Micro;
use tracing::debug;

/// Registers the submitted URL and answers with the bare micro.
pub async fn generate_micro_handler(
    State(state): State<AppState>,
    Form(form): Form<GenerateMicroForm>,
) -> Result<String> {
    let micro = state.shortener().register(form.url).await?;
    Ok(micro.to_string())
}

pub async fn list_micros_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<MicroEntry>>> {
    let records = state.shortener().list_all().await?;
    Ok(Json(records.into_iter().map(MicroEntry::from).collect()))
}

/// Redirects to the URL registered under `micro` with a `302 Found`.
pub async fn redirect_handler(
    Path(micro): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    let micro = Micro::new(micro)?;
    let stored = state.shortener().resolve(&micro).await?;

    match redirect_target(&stored) {
        Some(location) => {
            debug!(micro = %micro, location = %location, "redirecting");
            Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
        }
        None => {
            debug!(micro = %micro, stored = %stored, "stored target is not redirectable");
            Err(AppError::InvalidUrl)
        }
    }
}

pub async fn not_found_handler() -> AppError {
    AppError::InvalidUrl
}
