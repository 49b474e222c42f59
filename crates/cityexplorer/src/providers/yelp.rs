use async_trait::async_trait;

use cityexplorer_core::provider::{map_business, BusinessSearchResponse, RecordProvider, Result};
use cityexplorer_core::records::{BusinessEntry, Location};

use crate::config::ProviderConfig;

use super::get_json;

const PROVIDER: &str = "yelp";

/// Yelp business search around the location's coordinates.
#[derive(Debug, Clone)]
pub struct YelpBusinesses {
    client: reqwest::Client,
    config: ProviderConfig,
}

impl YelpBusinesses {
    pub fn new(client: reqwest::Client, config: ProviderConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl RecordProvider<BusinessEntry> for YelpBusinesses {
    async fn fetch(&self, location: &Location) -> Result<Vec<BusinessEntry>> {
        let request = self
            .client
            .get(format!("{}/v3/businesses/search", self.config.api_url))
            .bearer_auth(&self.config.api_key)
            .query(&[
                ("term", "delis".to_string()),
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
            ]);

        let response: BusinessSearchResponse = get_json(PROVIDER, request).await?;

        Ok(response
            .businesses
            .iter()
            .map(|business| map_business(location, business))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_sends_bearer_and_coordinates() {
        let mock_server = MockServer::start().await;
        let location = Location::new("Seattle, WA", "Seattle, WA, USA", 47.5, -122.25);

        Mock::given(method("GET"))
            .and(path("/v3/businesses/search"))
            .and(header("Authorization", "Bearer test_key"))
            .and(query_param("term", "delis"))
            .and(query_param("latitude", "47.5"))
            .and(query_param("longitude", "-122.25"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "businesses": [
                    {
                        "name": "Bakeman's Restaurant",
                        "image_url": "https://s3-media.yelpcdn.com/bakemans.jpg",
                        "price": "$",
                        "rating": 4.5,
                        "url": "https://www.yelp.com/biz/bakemans-restaurant-seattle"
                    },
                    {"name": "Salumi", "rating": 4.0}
                ],
                "total": 2
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = YelpBusinesses::new(
            reqwest::Client::new(),
            ProviderConfig {
                api_key: "test_key".to_string(),
                api_url: mock_server.uri(),
            },
        );
        let entries = client.fetch(&location).await.unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Bakeman's Restaurant");
        assert_eq!(
            entries[0].url.as_deref(),
            Some("https://www.yelp.com/biz/bakemans-restaurant-seattle")
        );
        assert_eq!(entries[1].name, "Salumi");
        assert!(entries[1].price.is_none());
    }
}
