use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// Returns true when the write lost a race against an identical key.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, RepositoryError::AlreadyExists { .. })
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_already_exists_display() {
        let error = RepositoryError::AlreadyExists {
            entity_type: "Location",
            id: "Seattle, WA".to_string(),
        };
        assert_eq!(error.to_string(), "Location already exists: Seattle, WA");
    }

    #[test]
    fn test_repository_error_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("timeout after 30s".to_string());
        assert_eq!(error.to_string(), "Connection failed: timeout after 30s");
    }

    #[test]
    fn test_repository_error_query_failed_display() {
        let error = RepositoryError::QueryFailed("no such table: weather".to_string());
        assert_eq!(error.to_string(), "Query failed: no such table: weather");
    }

    #[test]
    fn test_repository_error_invalid_data_display() {
        let error = RepositoryError::InvalidData("unknown location".to_string());
        assert_eq!(error.to_string(), "Invalid data: unknown location");
    }

    #[test]
    fn test_is_already_exists() {
        let error = RepositoryError::AlreadyExists {
            entity_type: "Location",
            id: "x".to_string(),
        };
        assert!(error.is_already_exists());
        assert!(!RepositoryError::QueryFailed("x".to_string()).is_already_exists());
    }
}
