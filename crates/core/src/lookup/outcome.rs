use crate::records::{Location, LocationId, Record};
use crate::storage::{LocationRepository, RecordRepository, Result};

/// Result of the CHECK_CACHE step.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheOutcome<T> {
    /// The cache holds the answer; the provider must not be consulted.
    Hit(T),
    /// Nothing stored yet for this key.
    Miss,
}

/// Checks the cache for a location resolved from `search_query`.
pub async fn check_location<S>(store: &S, search_query: &str) -> Result<CacheOutcome<Location>>
where
    S: LocationRepository + ?Sized,
{
    Ok(match store.get_location(search_query).await? {
        Some(location) => CacheOutcome::Hit(location),
        None => CacheOutcome::Miss,
    })
}

/// Checks the cache for the records of one domain.
///
/// Zero rows is a miss: "never fetched" and "fetched but empty" look the same
/// because empty results are never stored.
pub async fn check_records<R, S>(store: &S, location_id: LocationId) -> Result<CacheOutcome<Vec<R>>>
where
    R: Record,
    S: RecordRepository<R> + ?Sized,
{
    let rows = store.get_records(location_id).await?;
    Ok(if rows.is_empty() {
        CacheOutcome::Miss
    } else {
        CacheOutcome::Hit(rows)
    })
}
