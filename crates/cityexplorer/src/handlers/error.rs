use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Body of every failure response. Details only go to the log.
pub const FAILURE_MESSAGE: &str = "Sorry, something went wrong";

/// Application error type that wraps `anyhow::Error`.
///
/// This allows using `?` on lookup results and query rejections alike; every
/// failure collapses into the same generic 500.
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "Request failed");

        (StatusCode::INTERNAL_SERVER_ERROR, FAILURE_MESSAGE).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
