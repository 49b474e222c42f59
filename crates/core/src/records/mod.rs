//! Canonical record types returned to clients and stored in the cache.

mod types;

pub use types::{
    BusinessEntry, Domain, EventEntry, Location, LocationId, MovieEntry, Record, WeatherEntry,
};
