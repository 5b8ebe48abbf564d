use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use microurl_core::ShortenerError;
use tracing::error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Body returned for every micro that cannot be redirected.
pub const INVALID_URL_BODY: &str = "invalid url";

const INTERNAL_ERROR_BODY: &str = "something went wrong";

#[derive(Debug)]
pub enum AppError {
    /// Unknown micro, malformed micro, or a stored target that is not
    /// redirectable.
    InvalidUrl,
    /// Any other failure of the shortener.
    Internal(ShortenerError),
}

impl From<ShortenerError> for AppError {
    fn from(value: ShortenerError) -> Self {
        match value {
            ShortenerError::NotFound(_) | ShortenerError::InvalidMicro(_) => Self::InvalidUrl,
            other => Self::Internal(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidUrl => (StatusCode::NOT_FOUND, INVALID_URL_BODY).into_response(),
            AppError::Internal(err) => {
                error!(error = %err, "shortener request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY).into_response()
            }
        }
    }
}
