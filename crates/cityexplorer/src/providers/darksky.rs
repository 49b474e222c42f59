use async_trait::async_trait;

use cityexplorer_core::provider::{map_weather, ForecastResponse, RecordProvider, Result};
use cityexplorer_core::records::{Location, WeatherEntry};

use crate::config::ProviderConfig;

use super::get_json;

const PROVIDER: &str = "darksky";

/// Dark Sky daily forecast. One record per forecast day.
#[derive(Debug, Clone)]
pub struct DarkSkyWeather {
    client: reqwest::Client,
    config: ProviderConfig,
}

impl DarkSkyWeather {
    pub fn new(client: reqwest::Client, config: ProviderConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl RecordProvider<WeatherEntry> for DarkSkyWeather {
    async fn fetch(&self, location: &Location) -> Result<Vec<WeatherEntry>> {
        let url = format!(
            "{}/forecast/{}/{},{}",
            self.config.api_url, self.config.api_key, location.latitude, location.longitude
        );

        let response: ForecastResponse = get_json(PROVIDER, self.client.get(url)).await?;

        Ok(response
            .daily
            .map(|daily| daily.data)
            .unwrap_or_default()
            .iter()
            .map(|day| map_weather(location, day))
            .collect())
    }
}
