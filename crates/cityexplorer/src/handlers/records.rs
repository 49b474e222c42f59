//! Per-domain record handlers.
//!
//! Each endpoint resolves `?data=` to a location and returns that location's
//! records for one domain, fetching them on first use. A query that was never
//! sent to `/location` is geocoded and stored here as well.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};

use cityexplorer_core::records::{BusinessEntry, EventEntry, MovieEntry, WeatherEntry};

use super::location::{search_query, within_timeout, SearchParams};
use crate::{handlers::AppError, state::AppState};

/// GET /weather?data=
#[axum::debug_handler]
pub async fn get_weather(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<WeatherEntry>>, AppError> {
    let query = search_query(params)?;
    let aggregator = state.aggregator.clone();
    let weather = within_timeout(state.request_timeout, async move {
        aggregator.get_weather(&query).await
    })
    .await?;
    Ok(Json(weather))
}

/// GET /yelp?data=
#[axum::debug_handler]
pub async fn get_businesses(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<BusinessEntry>>, AppError> {
    let query = search_query(params)?;
    let aggregator = state.aggregator.clone();
    let businesses = within_timeout(state.request_timeout, async move {
        aggregator.get_businesses(&query).await
    })
    .await?;
    Ok(Json(businesses))
}

/// GET /movies?data=
#[axum::debug_handler]
pub async fn get_movies(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<MovieEntry>>, AppError> {
    let query = search_query(params)?;
    let aggregator = state.aggregator.clone();
    let movies = within_timeout(state.request_timeout, async move {
        aggregator.get_movies(&query).await
    })
    .await?;
    Ok(Json(movies))
}

/// GET /meetup?data=
#[axum::debug_handler]
pub async fn get_events(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<EventEntry>>, AppError> {
    let query = search_query(params)?;
    let aggregator = state.aggregator.clone();
    let events = within_timeout(state.request_timeout, async move {
        aggregator.get_events(&query).await
    })
    .await?;
    Ok(Json(events))
}
