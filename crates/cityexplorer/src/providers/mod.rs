//! HTTP adapters for the upstream providers.
//!
//! Each adapter issues one GET per call, decodes the raw payload and hands
//! every element to the pure mapping functions in `cityexplorer_core::provider`.
//! Transport and decode failures become [`ProviderError`]s; nothing is retried.

mod darksky;
mod google;
mod meetup;
mod tmdb;
mod yelp;

pub use darksky::DarkSkyWeather;
pub use google::GoogleGeocoder;
pub use meetup::MeetupEvents;
pub use tmdb::TmdbMovies;
pub use yelp::YelpBusinesses;

use serde::de::DeserializeOwned;

use cityexplorer_core::provider::{ProviderError, Result};

/// Sends `request` and decodes a JSON body.
///
/// Non-2xx statuses are transport failures carrying the status and body text.
async fn get_json<T: DeserializeOwned>(
    provider: &'static str,
    request: reqwest::RequestBuilder,
) -> Result<T> {
    let response = request
        .send()
        .await
        .map_err(|err| transport_error(provider, err))?;

    let status = response.status();
    if !status.is_success() {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ProviderError::Transport {
            provider,
            status: Some(status.as_u16()),
            message,
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|err| transport_error(provider, err))?;

    serde_json::from_slice(&body).map_err(|err| ProviderError::Decode {
        provider,
        message: err.to_string(),
    })
}

fn transport_error(provider: &'static str, err: reqwest::Error) -> ProviderError {
    ProviderError::Transport {
        provider,
        status: err.status().map(|s| s.as_u16()),
        message: err.to_string(),
    }
}
