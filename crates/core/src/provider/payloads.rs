//! Raw provider payload shapes.
//!
//! Only the fields the mapping functions read are declared. Every field is
//! optional or defaulted so a sparse element never fails the whole batch.

use serde::Deserialize;

use crate::serde::{
    deserialize_lenient_f64, deserialize_lenient_i64, deserialize_null_as_default,
    deserialize_optional_string,
};

// ============================================================================
// Geocoding (Google Maps)
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub results: Vec<RawGeocodeResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGeocodeResult {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub geometry: Option<RawGeometry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGeometry {
    #[serde(default)]
    pub location: Option<RawLatLng>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLatLng {
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub lng: Option<f64>,
}

// ============================================================================
// Weather (Dark Sky)
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub daily: Option<RawDaily>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDaily {
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub data: Vec<RawForecastDay>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawForecastDay {
    /// Unix seconds.
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub time: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub summary: Option<String>,
}

// ============================================================================
// Businesses (Yelp)
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BusinessSearchResponse {
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub businesses: Vec<RawBusiness>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBusiness {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub price: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub url: Option<String>,
}

// ============================================================================
// Movies (TMDB)
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieSearchResponse {
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub results: Vec<RawMovie>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMovie {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub overview: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub vote_average: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub vote_count: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub poster_path: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub popularity: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub release_date: Option<String>,
}

// ============================================================================
// Events (Meetup)
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventSearchResponse {
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub results: Vec<RawEvent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEvent {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub event_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub link: Option<String>,
    /// Unix milliseconds.
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub created: Option<i64>,
    #[serde(default)]
    pub group: Option<RawEventGroup>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEventGroup {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,
}
