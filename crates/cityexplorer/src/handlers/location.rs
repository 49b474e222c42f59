//! Location handler.

use std::{future::Future, time::Duration};

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;

use cityexplorer_core::{lookup::LookupError, records::Location};

use crate::{handlers::AppError, state::AppState};

/// `?data=<search query>`, shared by every lookup endpoint.
///
/// The value is the location's identity and is used exactly as sent.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub data: String,
}

/// Extracts a non-empty search query or fails the request.
pub fn search_query(
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<String, AppError> {
    let Query(params) = params?;
    if params.data.is_empty() {
        return Err(anyhow::anyhow!("empty search query").into());
    }
    Ok(params.data)
}

/// Runs a lookup on its own task and waits at most `timeout` for the answer.
///
/// When the wait elapses the request fails with the generic error, but the
/// task keeps going so a batch being persisted is never cut short.
pub async fn within_timeout<T, F>(timeout: Duration, lookup: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: Future<Output = Result<T, LookupError>> + Send + 'static,
{
    let task = tokio::spawn(lookup);
    match tokio::time::timeout(timeout, task).await {
        Ok(joined) => Ok(joined??),
        Err(_) => Err(anyhow::anyhow!("lookup timed out after {timeout:?}").into()),
    }
}

/// Resolve a search query to a location (GET /location?data=).
#[axum::debug_handler]
pub async fn get_location(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Location>, AppError> {
    let query = search_query(params)?;
    let aggregator = state.aggregator.clone();
    let location = within_timeout(state.request_timeout, async move {
        aggregator.resolve_location(&query).await
    })
    .await?;
    Ok(Json(location))
}
