//! Aggregation facade.
//!
//! Wires the store and the provider adapters into the lookup-or-fetch
//! orchestrator. Every domain call resolves the location first and then keys
//! the record lookup by its id.

use std::sync::Arc;

use cityexplorer_core::lookup::{lookup_or_fetch, resolve_location, LookupError};
use cityexplorer_core::provider::{Geocoder, RecordProvider};
use cityexplorer_core::records::{
    BusinessEntry, EventEntry, Location, MovieEntry, Record, WeatherEntry,
};
use cityexplorer_core::storage::{RecordRepository, Store};

use crate::config::Config;
use crate::providers::{DarkSkyWeather, GoogleGeocoder, MeetupEvents, TmdbMovies, YelpBusinesses};

/// The upstream adapters, one per domain.
#[derive(Clone)]
pub struct Providers {
    pub geocoder: Arc<dyn Geocoder>,
    pub weather: Arc<dyn RecordProvider<WeatherEntry>>,
    pub businesses: Arc<dyn RecordProvider<BusinessEntry>>,
    pub movies: Arc<dyn RecordProvider<MovieEntry>>,
    pub events: Arc<dyn RecordProvider<EventEntry>>,
}

impl Providers {
    /// Builds the HTTP adapters from configuration, sharing one connection pool.
    pub fn from_config(config: &Config) -> Self {
        let client = reqwest::Client::new();

        Self {
            geocoder: Arc::new(GoogleGeocoder::new(client.clone(), config.google.clone())),
            weather: Arc::new(DarkSkyWeather::new(client.clone(), config.weather.clone())),
            businesses: Arc::new(YelpBusinesses::new(client.clone(), config.yelp.clone())),
            movies: Arc::new(TmdbMovies::new(client.clone(), config.movies.clone())),
            events: Arc::new(MeetupEvents::new(client, config.meetup.clone())),
        }
    }
}

/// Entry point for every request: resolve a search query, then serve one domain.
#[derive(Clone)]
pub struct Aggregator {
    store: Arc<dyn Store>,
    providers: Providers,
}

impl Aggregator {
    pub fn new(store: Arc<dyn Store>, providers: Providers) -> Self {
        Self { store, providers }
    }

    pub async fn resolve_location(&self, search_query: &str) -> Result<Location, LookupError> {
        resolve_location(&*self.store, &*self.providers.geocoder, search_query).await
    }

    pub async fn get_weather(&self, search_query: &str) -> Result<Vec<WeatherEntry>, LookupError> {
        self.records(search_query, &*self.providers.weather).await
    }

    pub async fn get_businesses(
        &self,
        search_query: &str,
    ) -> Result<Vec<BusinessEntry>, LookupError> {
        self.records(search_query, &*self.providers.businesses).await
    }

    pub async fn get_movies(&self, search_query: &str) -> Result<Vec<MovieEntry>, LookupError> {
        self.records(search_query, &*self.providers.movies).await
    }

    pub async fn get_events(&self, search_query: &str) -> Result<Vec<EventEntry>, LookupError> {
        self.records(search_query, &*self.providers.events).await
    }

    async fn records<R>(
        &self,
        search_query: &str,
        provider: &dyn RecordProvider<R>,
    ) -> Result<Vec<R>, LookupError>
    where
        R: Record,
        dyn Store: RecordRepository<R>,
    {
        let location = self.resolve_location(search_query).await?;
        lookup_or_fetch(&*self.store, provider, &location).await
    }
}
