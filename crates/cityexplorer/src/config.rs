use std::{env, time::Duration};

/// Credentials and base URL for one upstream provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub api_key: String,
    pub api_url: String,
}

impl ProviderConfig {
    /// Reads `<NAME>_API_KEY` and `<NAME>_API_URL`, falling back to the
    /// provider's public endpoint when no URL is set.
    fn from_env(name: &str, default_url: &str) -> Self {
        Self {
            api_key: env::var(format!("{name}_API_KEY")).unwrap_or_default(),
            api_url: env::var(format!("{name}_API_URL"))
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| default_url.to_string()),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file (default: "cityexplorer.db")
    pub sqlite_path: String,
    /// Overall request timeout in seconds (default: 30)
    pub request_timeout_seconds: u64,
    pub google: ProviderConfig,
    pub weather: ProviderConfig,
    pub yelp: ProviderConfig,
    pub movies: ProviderConfig,
    pub meetup: ProviderConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SQLITE_PATH` - SQLite database path (default: "cityexplorer.db")
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout (default: 30)
    /// - `GOOGLE_API_KEY`, `WEATHER_API_KEY`, `YELP_API_KEY`, `MOVIES_API_KEY`, `MEETUP_API_KEY`
    /// - `<NAME>_API_URL` - Override a provider's base URL
    pub fn from_env() -> Self {
        Self {
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "cityexplorer.db".to_string()),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            google: ProviderConfig::from_env("GOOGLE", "https://maps.googleapis.com"),
            weather: ProviderConfig::from_env("WEATHER", "https://api.darksky.net"),
            yelp: ProviderConfig::from_env("YELP", "https://api.yelp.com"),
            movies: ProviderConfig::from_env("MOVIES", "https://api.themoviedb.org"),
            meetup: ProviderConfig::from_env("MEETUP", "https://api.meetup.com"),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Points every provider at the same base URL. Used by tests that stand up
    /// a single mock server.
    #[cfg(test)]
    pub fn with_provider_url(base_url: &str) -> Self {
        let provider = |key: &str| ProviderConfig {
            api_key: key.to_string(),
            api_url: base_url.to_string(),
        };
        Self {
            sqlite_path: ":memory:".to_string(),
            request_timeout_seconds: 5,
            google: provider("google-key"),
            weather: provider("weather-key"),
            yelp: provider("yelp-key"),
            movies: provider("movies-key"),
            meetup: provider("meetup-key"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_timeout_conversion() {
        let config = Config {
            request_timeout_seconds: 12,
            ..Config::with_provider_url("http://localhost")
        };

        assert_eq!(config.request_timeout(), Duration::from_secs(12));
    }

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        env::remove_var("SQLITE_PATH");
        env::remove_var("REQUEST_TIMEOUT_SECONDS");
        env::remove_var("GOOGLE_API_KEY");
        env::remove_var("GOOGLE_API_URL");

        let config = Config::from_env();

        assert_eq!(config.sqlite_path, "cityexplorer.db");
        assert_eq!(config.request_timeout_seconds, 30);
        assert_eq!(config.google.api_key, "");
        assert_eq!(config.google.api_url, "https://maps.googleapis.com");
    }

    #[test]
    fn test_provider_url_override_strips_trailing_slash() {
        env::set_var("MEETUP_API_URL", "http://127.0.0.1:9999/");
        env::set_var("MEETUP_API_KEY", "secret");

        let meetup = ProviderConfig::from_env("MEETUP", "https://api.meetup.com");

        assert_eq!(meetup.api_url, "http://127.0.0.1:9999");
        assert_eq!(meetup.api_key, "secret");

        env::remove_var("MEETUP_API_URL");
        env::remove_var("MEETUP_API_KEY");
    }
}
