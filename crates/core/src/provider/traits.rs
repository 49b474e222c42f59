use async_trait::async_trait;

use crate::records::{Location, Record};

use super::Result;

/// Resolves free text into a single [`Location`].
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Geocodes `query`, keeping only the top match.
    ///
    /// Fails with [`ProviderError::NoResults`](super::ProviderError::NoResults)
    /// when the provider has nothing usable.
    async fn geocode(&self, query: &str) -> Result<Location>;
}

/// Fetches the records of one domain for a resolved [`Location`].
#[async_trait]
pub trait RecordProvider<R: Record>: Send + Sync {
    /// Fetches records in provider order, each stamped with `location.id`.
    ///
    /// An empty result set is not an error.
    async fn fetch(&self, location: &Location) -> Result<Vec<R>>;
}
