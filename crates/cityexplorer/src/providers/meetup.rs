use async_trait::async_trait;

use cityexplorer_core::provider::{map_event, EventSearchResponse, RecordProvider, Result};
use cityexplorer_core::records::{EventEntry, Location};

use crate::config::ProviderConfig;

use super::get_json;

const PROVIDER: &str = "meetup";

/// Meetup open events within 25 miles, ordered by start time.
#[derive(Debug, Clone)]
pub struct MeetupEvents {
    client: reqwest::Client,
    config: ProviderConfig,
}

impl MeetupEvents {
    pub fn new(client: reqwest::Client, config: ProviderConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl RecordProvider<EventEntry> for MeetupEvents {
    async fn fetch(&self, location: &Location) -> Result<Vec<EventEntry>> {
        let request = self
            .client
            .get(format!("{}/2/open_events", self.config.api_url))
            .query(&[
                ("lat", location.latitude.to_string()),
                ("lon", location.longitude.to_string()),
                ("radius", "25.0".to_string()),
                ("order", "time".to_string()),
                ("page", "20".to_string()),
                ("key", self.config.api_key.clone()),
            ]);

        let response: EventSearchResponse = get_json(PROVIDER, request).await?;

        Ok(response
            .results
            .iter()
            .map(|event| map_event(location, event))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_maps_events() {
        let mock_server = MockServer::start().await;
        let location = Location::new("Seattle, WA", "Seattle, WA, USA", 47.5, -122.25);

        Mock::given(method("GET"))
            .and(path("/2/open_events"))
            .and(query_param("lat", "47.5"))
            .and(query_param("lon", "-122.25"))
            .and(query_param("radius", "25.0"))
            .and(query_param("order", "time"))
            .and(query_param("page", "20"))
            .and(query_param("key", "test_key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [
                    {
                        "name": "Rust Hack Night",
                        "event_url": "https://www.meetup.com/seattle-rust/events/1/",
                        "created": 1704096000000_i64,
                        "group": {"name": "Seattle Rust User Group"}
                    }
                ],
                "meta": {"count": 1}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = MeetupEvents::new(
            reqwest::Client::new(),
            ProviderConfig {
                api_key: "test_key".to_string(),
                api_url: mock_server.uri(),
            },
        );
        let entries = client.fetch(&location).await.unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Rust Hack Night");
        assert_eq!(
            entries[0].link.as_deref(),
            Some("https://www.meetup.com/seattle-rust/events/1/")
        );
        assert_eq!(entries[0].creation_date.as_deref(), Some("2024-01-01"));
        assert_eq!(entries[0].host.as_deref(), Some("Seattle Rust User Group"));
        assert_eq!(entries[0].location_id, location.id);
    }
}
