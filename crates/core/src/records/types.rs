use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of a persisted [`Location`]. Every domain record points back to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(pub Uuid);

impl LocationId {
    /// Creates a fresh random identity.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LocationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A resolved place. Keyed in the cache by the raw `search_query` it was resolved from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    /// The free-text query exactly as the client sent it.
    pub search_query: String,
    /// The provider's canonical rendering of the place.
    pub formatted_query: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// Creates a new location with a fresh id.
    pub fn new(
        search_query: impl Into<String>,
        formatted_query: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id: LocationId::new(),
            search_query: search_query.into(),
            formatted_query: formatted_query.into(),
            latitude,
            longitude,
        }
    }
}

/// The per-location record domains served by the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Weather,
    Business,
    Movie,
    Event,
}

impl Domain {
    /// Name of the relational table holding this domain's rows.
    pub fn table(&self) -> &'static str {
        match self {
            Domain::Weather => "weather",
            Domain::Business => "yelp",
            Domain::Movie => "movies",
            Domain::Event => "meetup",
        }
    }

    /// Entity name used in repository errors.
    pub fn entity_type(&self) -> &'static str {
        match self {
            Domain::Weather => "WeatherEntry",
            Domain::Business => "BusinessEntry",
            Domain::Movie => "MovieEntry",
            Domain::Event => "EventEntry",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}

/// A canonical record that belongs to exactly one [`Location`].
pub trait Record: Clone + fmt::Debug + Serialize + Send + Sync + 'static {
    const DOMAIN: Domain;

    /// The owning location.
    fn location_id(&self) -> LocationId;
}

/// One forecast day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherEntry {
    pub location_id: LocationId,
    pub forecast: String,
    /// Day of the forecast, rendered as `Www Mmm DD YYYY`.
    pub time: String,
}

/// A nearby business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessEntry {
    pub location_id: LocationId,
    pub name: String,
    pub image_url: Option<String>,
    pub price: Option<String>,
    pub rating: Option<f64>,
    pub url: Option<String>,
}

/// A movie matching the location's search query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieEntry {
    pub location_id: LocationId,
    pub title: String,
    pub overview: Option<String>,
    pub average_votes: Option<f64>,
    pub total_votes: Option<i64>,
    pub image_url: Option<String>,
    pub popularity: Option<f64>,
    pub released_on: Option<String>,
}

/// An upcoming event near the location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEntry {
    pub location_id: LocationId,
    pub link: Option<String>,
    pub name: String,
    /// Creation date of the event listing (`YYYY-MM-DD`).
    pub creation_date: Option<String>,
    pub host: Option<String>,
}

impl Record for WeatherEntry {
    const DOMAIN: Domain = Domain::Weather;

    fn location_id(&self) -> LocationId {
        self.location_id
    }
}

impl Record for BusinessEntry {
    const DOMAIN: Domain = Domain::Business;

    fn location_id(&self) -> LocationId {
        self.location_id
    }
}

impl Record for MovieEntry {
    const DOMAIN: Domain = Domain::Movie;

    fn location_id(&self) -> LocationId {
        self.location_id
    }
}

impl Record for EventEntry {
    const DOMAIN: Domain = Domain::Event;

    fn location_id(&self) -> LocationId {
        self.location_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_new_assigns_distinct_ids() {
        let a = Location::new("Seattle, WA", "Seattle, WA, USA", 47.6, -122.3);
        let b = Location::new("Seattle, WA", "Seattle, WA, USA", 47.6, -122.3);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_location_id_serializes_as_plain_uuid() {
        let id = LocationId(Uuid::nil());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"00000000-0000-0000-0000-000000000000\"");
    }

    #[test]
    fn test_domain_tables() {
        assert_eq!(Domain::Weather.table(), "weather");
        assert_eq!(Domain::Business.table(), "yelp");
        assert_eq!(Domain::Movie.table(), "movies");
        assert_eq!(Domain::Event.table(), "meetup");
    }

    #[test]
    fn test_record_domains() {
        assert_eq!(WeatherEntry::DOMAIN, Domain::Weather);
        assert_eq!(BusinessEntry::DOMAIN, Domain::Business);
        assert_eq!(MovieEntry::DOMAIN, Domain::Movie);
        assert_eq!(EventEntry::DOMAIN, Domain::Event);
    }
}
