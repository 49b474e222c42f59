use thiserror::Error;

/// Errors that can occur while fetching from an external provider.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// Provider unreachable, or it answered with a non-2xx status.
    #[error("{provider} request failed{}: {message}", status_suffix(.status))]
    Transport {
        provider: &'static str,
        status: Option<u16>,
        message: String,
    },
    /// The provider answered but the body could not be read.
    #[error("{provider} returned an unreadable payload: {message}")]
    Decode {
        provider: &'static str,
        message: String,
    },
    /// The provider had no usable match for the query.
    #[error("{provider} returned no results for '{query}'")]
    NoResults {
        provider: &'static str,
        query: String,
    },
}

fn status_suffix(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" with status {code}"),
        None => String::new(),
    }
}

/// Result type for provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;
