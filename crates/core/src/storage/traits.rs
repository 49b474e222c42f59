use async_trait::async_trait;

use crate::records::{
    BusinessEntry, EventEntry, Location, LocationId, MovieEntry, Record, WeatherEntry,
};

use super::Result;

/// Repository for resolved locations, keyed by the raw search query.
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Gets the location previously resolved from `search_query`.
    async fn get_location(&self, search_query: &str) -> Result<Option<Location>>;

    /// Persists a newly resolved location.
    ///
    /// Fails with `AlreadyExists` when the search query is already stored.
    async fn create_location(&self, location: &Location) -> Result<()>;
}

/// Repository for the records of one domain, keyed by owning location.
#[async_trait]
pub trait RecordRepository<R: Record>: Send + Sync {
    /// Gets every record stored for `location_id`, in insertion order.
    async fn get_records(&self, location_id: LocationId) -> Result<Vec<R>>;

    /// Appends a single record. The owning location must already exist.
    async fn create_record(&self, record: &R) -> Result<()>;
}

/// Combined trait for stores that hold every table the aggregator needs.
pub trait Store:
    LocationRepository
    + RecordRepository<WeatherEntry>
    + RecordRepository<BusinessEntry>
    + RecordRepository<MovieEntry>
    + RecordRepository<EventEntry>
{
}

impl<T> Store for T where
    T: LocationRepository
        + RecordRepository<WeatherEntry>
        + RecordRepository<BusinessEntry>
        + RecordRepository<MovieEntry>
        + RecordRepository<EventEntry>
{
}
