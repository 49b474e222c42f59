use async_trait::async_trait;

use cityexplorer_core::provider::{map_movie, MovieSearchResponse, RecordProvider, Result};
use cityexplorer_core::records::{Location, MovieEntry};

use crate::config::ProviderConfig;

use super::get_json;

const PROVIDER: &str = "tmdb";

/// TMDB movie search. Matches on the raw search query, not on coordinates.
#[derive(Debug, Clone)]
pub struct TmdbMovies {
    client: reqwest::Client,
    config: ProviderConfig,
}

impl TmdbMovies {
    pub fn new(client: reqwest::Client, config: ProviderConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl RecordProvider<MovieEntry> for TmdbMovies {
    async fn fetch(&self, location: &Location) -> Result<Vec<MovieEntry>> {
        let request = self
            .client
            .get(format!("{}/3/search/movie", self.config.api_url))
            .query(&[
                ("api_key", self.config.api_key.as_str()),
                ("query", location.search_query.as_str()),
            ]);

        let response: MovieSearchResponse = get_json(PROVIDER, request).await?;

        Ok(response
            .results
            .iter()
            .map(|movie| map_movie(location, movie))
            .collect())
    }
}
