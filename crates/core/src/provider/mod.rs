//! Provider adapter contract.
//!
//! An adapter translates one external provider's wire format into canonical
//! records. The HTTP side lives in the binary crate; this module holds the
//! traits, the error type, the raw payload shapes and the pure mapping
//! functions from payload to record.

mod error;
mod mapping;
mod payloads;
mod traits;

pub use error::{ProviderError, Result};
pub use mapping::{
    first_location, format_creation_date, format_forecast_day, map_business, map_event,
    map_location, map_movie, map_weather, TMDB_POSTER_BASE,
};
pub use payloads::{
    BusinessSearchResponse, EventSearchResponse, ForecastResponse, GeocodeResponse,
    MovieSearchResponse, RawBusiness, RawDaily, RawEvent, RawEventGroup, RawForecastDay,
    RawGeocodeResult, RawGeometry, RawLatLng, RawMovie,
};
pub use traits::{Geocoder, RecordProvider};
