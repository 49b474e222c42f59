use crate::provider::{Geocoder, RecordProvider};
use crate::records::{Location, Record};
use crate::storage::{LocationRepository, RecordRepository};

use super::outcome::{check_location, check_records, CacheOutcome};
use super::LookupError;

/// Resolves a free-text query into a persisted [`Location`].
///
/// On a miss the geocoder is called once and its top match persisted. If the
/// insert loses a race against a concurrent request for the same query, the
/// stored location wins so that every caller agrees on its id. Any other
/// persistence failure is logged and the fetched location is still returned.
pub async fn resolve_location<S, G>(
    store: &S,
    geocoder: &G,
    search_query: &str,
) -> Result<Location, LookupError>
where
    S: LocationRepository + ?Sized,
    G: Geocoder + ?Sized,
{
    if let CacheOutcome::Hit(location) = check_location(store, search_query).await? {
        tracing::debug!(search_query, location_id = %location.id, "Cache hit for location");
        return Ok(location);
    }

    tracing::debug!(search_query, "Cache miss for location");
    let location = geocoder.geocode(search_query).await?;

    match store.create_location(&location).await {
        Ok(()) => {
            tracing::info!(
                search_query,
                location_id = %location.id,
                formatted_query = %location.formatted_query,
                "Location resolved and cached"
            );
            Ok(location)
        }
        Err(err) if err.is_already_exists() => {
            match store.get_location(search_query).await {
                Ok(Some(existing)) => {
                    tracing::debug!(
                        search_query,
                        location_id = %existing.id,
                        "Location cached concurrently, using stored copy"
                    );
                    Ok(existing)
                }
                Ok(None) => Ok(location),
                Err(read_err) => {
                    tracing::warn!(search_query, error = %read_err, "Failed to re-read location");
                    Ok(location)
                }
            }
        }
        Err(err) => {
            tracing::warn!(search_query, error = %err, "Failed to cache location");
            Ok(location)
        }
    }
}

/// Runs the lookup-or-fetch protocol for one domain of `location`.
///
/// A hit returns the stored rows verbatim without touching the provider. A
/// miss fetches once, persists the batch in provider order and returns the
/// full fetched sequence. Empty results are returned but not cached.
pub async fn lookup_or_fetch<R, S, P>(
    store: &S,
    provider: &P,
    location: &Location,
) -> Result<Vec<R>, LookupError>
where
    R: Record,
    S: RecordRepository<R> + ?Sized,
    P: RecordProvider<R> + ?Sized,
{
    let domain = R::DOMAIN;

    if let CacheOutcome::Hit(rows) = check_records::<R, S>(store, location.id).await? {
        tracing::debug!(%domain, location_id = %location.id, rows = rows.len(), "Cache hit");
        return Ok(rows);
    }

    tracing::debug!(%domain, location_id = %location.id, "Cache miss, fetching from provider");
    let records = provider.fetch(location).await?;

    if let Some(foreign) = records.iter().find(|r| r.location_id() != location.id) {
        return Err(LookupError::LocationMismatch {
            domain,
            expected: location.id,
            found: foreign.location_id(),
        });
    }

    if records.is_empty() {
        tracing::debug!(%domain, location_id = %location.id, "Provider returned no records, nothing cached");
        return Ok(records);
    }

    let persisted = persist_records(store, &records).await;
    tracing::info!(
        %domain,
        location_id = %location.id,
        fetched = records.len(),
        persisted,
        "Fetched records from provider"
    );

    Ok(records)
}

/// Inserts `records` one at a time, in order, without a transaction.
///
/// Stops at the first failure: earlier rows stay stored, later ones are
/// dropped. Returns how many rows were written.
pub async fn persist_records<R, S>(store: &S, records: &[R]) -> usize
where
    R: Record,
    S: RecordRepository<R> + ?Sized,
{
    for (index, record) in records.iter().enumerate() {
        if let Err(err) = store.create_record(record).await {
            tracing::warn!(
                domain = %R::DOMAIN,
                location_id = %record.location_id(),
                failed_at = index,
                dropped = records.len() - index,
                error = %err,
                "Failed to cache record batch"
            );
            return index;
        }
    }
    records.len()
}
