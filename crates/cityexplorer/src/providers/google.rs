use async_trait::async_trait;

use cityexplorer_core::provider::{first_location, GeocodeResponse, Geocoder, Result};
use cityexplorer_core::records::Location;

use crate::config::ProviderConfig;

use super::get_json;

const PROVIDER: &str = "google";

/// Google Maps geocoding.
#[derive(Debug, Clone)]
pub struct GoogleGeocoder {
    client: reqwest::Client,
    config: ProviderConfig,
}

impl GoogleGeocoder {
    pub fn new(client: reqwest::Client, config: ProviderConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl Geocoder for GoogleGeocoder {
    async fn geocode(&self, query: &str) -> Result<Location> {
        let request = self
            .client
            .get(format!("{}/maps/api/geocode/json", self.config.api_url))
            .query(&[("address", query), ("key", self.config.api_key.as_str())]);

        let response: GeocodeResponse = get_json(PROVIDER, request).await?;
        tracing::debug!(
            query,
            candidates = response.results.len(),
            "Geocoding response received"
        );

        first_location(PROVIDER, query, &response)
    }
}
