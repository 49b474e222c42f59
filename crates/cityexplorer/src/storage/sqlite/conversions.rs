//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use rusqlite::types::Value;
use rusqlite::Row;
use uuid::Uuid;

use cityexplorer_core::records::{
    BusinessEntry, EventEntry, Location, LocationId, MovieEntry, Record, WeatherEntry,
};

use super::schema;

/// A record type with a SQLite table behind it.
pub trait SqlRecord: Record {
    const INSERT: &'static str;
    const SELECT_BY_LOCATION: &'static str;

    /// Convert a row selected by [`SqlRecord::SELECT_BY_LOCATION`].
    fn from_row(row: &Row) -> rusqlite::Result<Self>;

    /// Positional parameters for [`SqlRecord::INSERT`].
    fn to_params(&self) -> Vec<Value>;
}

// ============================================================================
// Location conversions
// ============================================================================

/// Convert a SQLite row to a Location.
///
/// Expected columns: id, search_query, formatted_query, latitude, longitude
pub fn row_to_location(row: &Row) -> rusqlite::Result<Location> {
    let id: String = row.get(0)?;

    Ok(Location {
        id: parse_location_id(&id)?,
        search_query: row.get(1)?,
        formatted_query: row.get(2)?,
        latitude: row.get(3)?,
        longitude: row.get(4)?,
    })
}

pub fn location_to_params(location: &Location) -> Vec<Value> {
    vec![
        location.id.to_string().into(),
        location.search_query.clone().into(),
        location.formatted_query.clone().into(),
        location.latitude.into(),
        location.longitude.into(),
    ]
}

// ============================================================================
// Domain record conversions
// ============================================================================

impl SqlRecord for WeatherEntry {
    const INSERT: &'static str = schema::INSERT_WEATHER;
    const SELECT_BY_LOCATION: &'static str = schema::SELECT_WEATHER_BY_LOCATION;

    /// Expected columns: location_id, forecast, time
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let location_id: String = row.get(0)?;

        Ok(WeatherEntry {
            location_id: parse_location_id(&location_id)?,
            forecast: row.get(1)?,
            time: row.get(2)?,
        })
    }

    fn to_params(&self) -> Vec<Value> {
        vec![
            self.location_id.to_string().into(),
            self.forecast.clone().into(),
            self.time.clone().into(),
        ]
    }
}

impl SqlRecord for BusinessEntry {
    const INSERT: &'static str = schema::INSERT_BUSINESS;
    const SELECT_BY_LOCATION: &'static str = schema::SELECT_BUSINESSES_BY_LOCATION;

    /// Expected columns: location_id, name, image_url, price, rating, url
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let location_id: String = row.get(0)?;

        Ok(BusinessEntry {
            location_id: parse_location_id(&location_id)?,
            name: row.get(1)?,
            image_url: row.get(2)?,
            price: row.get(3)?,
            rating: row.get(4)?,
            url: row.get(5)?,
        })
    }

    fn to_params(&self) -> Vec<Value> {
        vec![
            self.location_id.to_string().into(),
            self.name.clone().into(),
            self.image_url.clone().into(),
            self.price.clone().into(),
            self.rating.into(),
            self.url.clone().into(),
        ]
    }
}

impl SqlRecord for MovieEntry {
    const INSERT: &'static str = schema::INSERT_MOVIE;
    const SELECT_BY_LOCATION: &'static str = schema::SELECT_MOVIES_BY_LOCATION;

    /// Expected columns: location_id, title, overview, average_votes,
    /// total_votes, image_url, popularity, released_on
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let location_id: String = row.get(0)?;

        Ok(MovieEntry {
            location_id: parse_location_id(&location_id)?,
            title: row.get(1)?,
            overview: row.get(2)?,
            average_votes: row.get(3)?,
            total_votes: row.get(4)?,
            image_url: row.get(5)?,
            popularity: row.get(6)?,
            released_on: row.get(7)?,
        })
    }

    fn to_params(&self) -> Vec<Value> {
        vec![
            self.location_id.to_string().into(),
            self.title.clone().into(),
            self.overview.clone().into(),
            self.average_votes.into(),
            self.total_votes.into(),
            self.image_url.clone().into(),
            self.popularity.into(),
            self.released_on.clone().into(),
        ]
    }
}

impl SqlRecord for EventEntry {
    const INSERT: &'static str = schema::INSERT_EVENT;
    const SELECT_BY_LOCATION: &'static str = schema::SELECT_EVENTS_BY_LOCATION;

    /// Expected columns: location_id, link, name, creation_date, host
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let location_id: String = row.get(0)?;

        Ok(EventEntry {
            location_id: parse_location_id(&location_id)?,
            link: row.get(1)?,
            name: row.get(2)?,
            creation_date: row.get(3)?,
            host: row.get(4)?,
        })
    }

    fn to_params(&self) -> Vec<Value> {
        vec![
            self.location_id.to_string().into(),
            self.link.clone().into(),
            self.name.clone().into(),
            self.creation_date.clone().into(),
            self.host.clone().into(),
        ]
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Parse a location id from its TEXT column.
fn parse_location_id(s: &str) -> rusqlite::Result<LocationId> {
    Uuid::parse_str(s).map(LocationId).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_location_id_valid() {
        let id = parse_location_id("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
        assert_eq!(id.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
    }

    #[test]
    fn test_parse_location_id_invalid() {
        assert!(parse_location_id("not-a-uuid").is_err());
    }

    #[test]
    fn test_location_params_order() {
        let location = Location::new("Seattle, WA", "Seattle, WA, USA", 47.6, -122.3);
        let params = location_to_params(&location);

        assert_eq!(params.len(), 5);
        assert_eq!(params[0], Value::Text(location.id.to_string()));
        assert_eq!(params[1], Value::Text("Seattle, WA".to_string()));
        assert_eq!(params[3], Value::Real(47.6));
    }

    #[test]
    fn test_business_missing_fields_become_null() {
        let entry = BusinessEntry {
            location_id: LocationId::new(),
            name: "Salumi".to_string(),
            image_url: None,
            price: None,
            rating: Some(4.0),
            url: None,
        };
        let params = entry.to_params();

        assert_eq!(params[2], Value::Null);
        assert_eq!(params[3], Value::Null);
        assert_eq!(params[4], Value::Real(4.0));
        assert_eq!(params[5], Value::Null);
    }

    #[test]
    fn test_movie_total_votes_is_integer() {
        let entry = MovieEntry {
            location_id: LocationId::new(),
            title: "Sleepless in Seattle".to_string(),
            overview: None,
            average_votes: None,
            total_votes: Some(1523),
            image_url: None,
            popularity: None,
            released_on: None,
        };

        assert_eq!(entry.to_params()[4], Value::Integer(1523));
    }

    #[test]
    fn test_param_counts_match_inserts() {
        let location_id = LocationId::new();
        let weather = WeatherEntry {
            location_id,
            forecast: "Rain".to_string(),
            time: "Mon Jan 01 2024".to_string(),
        };
        let event = EventEntry {
            location_id,
            link: None,
            name: "Hack Night".to_string(),
            creation_date: None,
            host: None,
        };

        assert_eq!(weather.to_params().len(), 3);
        assert_eq!(event.to_params().len(), 5);
    }
}
