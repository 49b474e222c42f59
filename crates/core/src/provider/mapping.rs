//! Pure functions mapping raw provider payloads into canonical records.
//!
//! Each function takes one element of a provider result array plus the query
//! context and never fails: missing fields become `None` or an empty string.

use chrono::DateTime;

use crate::records::{BusinessEntry, EventEntry, Location, MovieEntry, WeatherEntry};

use super::payloads::{
    GeocodeResponse, RawBusiness, RawEvent, RawForecastDay, RawGeocodeResult, RawMovie,
};
use super::{ProviderError, Result};

/// Prefix TMDB poster paths are resolved against.
pub const TMDB_POSTER_BASE: &str = "https://image.tmdb.org/t/p/w200_and_h300_bestv2";

/// Maps a single geocoding result into a [`Location`].
///
/// Returns `None` when the result has no coordinates. A missing formatted
/// address falls back to the search query itself.
pub fn map_location(query: &str, result: &RawGeocodeResult) -> Option<Location> {
    let lat_lng = result.geometry.as_ref()?.location.as_ref()?;
    let (latitude, longitude) = (lat_lng.lat?, lat_lng.lng?);

    let formatted_query = result
        .formatted_address
        .clone()
        .unwrap_or_else(|| query.to_string());

    Some(Location::new(query, formatted_query, latitude, longitude))
}

/// Takes the top match of a geocoding response.
///
/// The first result carrying coordinates wins; later results are discarded.
pub fn first_location(
    provider: &'static str,
    query: &str,
    response: &GeocodeResponse,
) -> Result<Location> {
    response
        .results
        .iter()
        .find_map(|result| map_location(query, result))
        .ok_or_else(|| ProviderError::NoResults {
            provider,
            query: query.to_string(),
        })
}

/// Renders Unix seconds as `Www Mmm DD YYYY` (UTC).
pub fn format_forecast_day(epoch_seconds: i64) -> Option<String> {
    DateTime::from_timestamp(epoch_seconds, 0).map(|dt| dt.format("%a %b %d %Y").to_string())
}

/// Renders Unix milliseconds as `YYYY-MM-DD` (UTC).
pub fn format_creation_date(epoch_millis: i64) -> Option<String> {
    DateTime::from_timestamp_millis(epoch_millis).map(|dt| dt.format("%Y-%m-%d").to_string())
}

pub fn map_weather(location: &Location, day: &RawForecastDay) -> WeatherEntry {
    WeatherEntry {
        location_id: location.id,
        forecast: day.summary.clone().unwrap_or_default(),
        time: day
            .time
            .and_then(format_forecast_day)
            .unwrap_or_default(),
    }
}

pub fn map_business(location: &Location, business: &RawBusiness) -> BusinessEntry {
    BusinessEntry {
        location_id: location.id,
        name: business.name.clone().unwrap_or_default(),
        image_url: business.image_url.clone(),
        price: business.price.clone(),
        rating: business.rating,
        url: business.url.clone(),
    }
}

pub fn map_movie(location: &Location, movie: &RawMovie) -> MovieEntry {
    MovieEntry {
        location_id: location.id,
        title: movie.title.clone().unwrap_or_default(),
        overview: movie.overview.clone(),
        average_votes: movie.vote_average,
        total_votes: movie.vote_count,
        image_url: movie
            .poster_path
            .as_ref()
            .map(|path| format!("{TMDB_POSTER_BASE}{path}")),
        popularity: movie.popularity,
        released_on: movie.release_date.clone(),
    }
}

/// Maps a Meetup event. The link prefers `event_url` over `link`; the host is
/// the organizing group's name.
pub fn map_event(location: &Location, event: &RawEvent) -> EventEntry {
    EventEntry {
        location_id: location.id,
        link: event.event_url.clone().or_else(|| event.link.clone()),
        name: event.name.clone().unwrap_or_default(),
        creation_date: event.created.and_then(format_creation_date),
        host: event.group.as_ref().and_then(|group| group.name.clone()),
    }
}
