use thiserror::Error;

use crate::provider::ProviderError;
use crate::records::{Domain, LocationId};
use crate::storage::RepositoryError;

/// Errors surfaced by a lookup-or-fetch run.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LookupError {
    #[error("Provider failure: {0}")]
    Provider(#[from] ProviderError),
    #[error("Storage failure: {0}")]
    Storage(#[from] RepositoryError),
    #[error("{domain} record belongs to location {found}, expected {expected}")]
    LocationMismatch {
        domain: Domain,
        expected: LocationId,
        found: LocationId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_provider_error_converts() {
        let error: LookupError = ProviderError::NoResults {
            provider: "google",
            query: "Atlantis".to_string(),
        }
        .into();
        assert_eq!(
            error.to_string(),
            "Provider failure: google returned no results for 'Atlantis'"
        );
    }

    #[test]
    fn test_storage_error_converts() {
        let error: LookupError = RepositoryError::QueryFailed("disk I/O error".to_string()).into();
        assert_eq!(error.to_string(), "Storage failure: Query failed: disk I/O error");
    }

    #[test]
    fn test_location_mismatch_display() {
        let error = LookupError::LocationMismatch {
            domain: Domain::Weather,
            expected: LocationId(Uuid::nil()),
            found: LocationId(Uuid::from_u128(u128::MAX)),
        };
        assert_eq!(
            error.to_string(),
            "weather record belongs to location ffffffff-ffff-ffff-ffff-ffffffffffff, expected 00000000-0000-0000-0000-000000000000"
        );
    }
}
