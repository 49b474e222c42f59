//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use cityexplorer_core::records::{
    BusinessEntry, EventEntry, Location, LocationId, MovieEntry, Record, WeatherEntry,
};
use cityexplorer_core::storage::{LocationRepository, RecordRepository, RepositoryError, Result};

type Table<R> = Arc<RwLock<HashMap<LocationId, Vec<R>>>>;

/// In-memory storage backend for testing.
///
/// Uses HashMaps wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    locations: Arc<RwLock<HashMap<String, Location>>>,
    weather: Table<WeatherEntry>,
    businesses: Table<BusinessEntry>,
    movies: Table<MovieEntry>,
    events: Table<EventEntry>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            locations: Arc::new(RwLock::new(HashMap::new())),
            weather: Arc::new(RwLock::new(HashMap::new())),
            businesses: Arc::new(RwLock::new(HashMap::new())),
            movies: Arc::new(RwLock::new(HashMap::new())),
            events: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Deletes every cached location and record.
    pub async fn clear(&self) -> Result<()> {
        self.weather.write().await.clear();
        self.businesses.write().await.clear();
        self.movies.write().await.clear();
        self.events.write().await.clear();
        self.locations.write().await.clear();
        Ok(())
    }

    async fn location_exists(&self, id: LocationId) -> bool {
        self.locations
            .read()
            .await
            .values()
            .any(|location| location.id == id)
    }
}

/// A record type with a table in [`InMemoryRepository`].
pub trait InMemoryRecord: Record {
    fn table(repo: &InMemoryRepository) -> &Table<Self>;
}

impl InMemoryRecord for WeatherEntry {
    fn table(repo: &InMemoryRepository) -> &Table<Self> {
        &repo.weather
    }
}

impl InMemoryRecord for BusinessEntry {
    fn table(repo: &InMemoryRepository) -> &Table<Self> {
        &repo.businesses
    }
}

impl InMemoryRecord for MovieEntry {
    fn table(repo: &InMemoryRepository) -> &Table<Self> {
        &repo.movies
    }
}

impl InMemoryRecord for EventEntry {
    fn table(repo: &InMemoryRepository) -> &Table<Self> {
        &repo.events
    }
}

#[async_trait]
impl LocationRepository for InMemoryRepository {
    async fn get_location(&self, search_query: &str) -> Result<Option<Location>> {
        let locations = self.locations.read().await;
        Ok(locations.get(search_query).cloned())
    }

    async fn create_location(&self, location: &Location) -> Result<()> {
        let mut locations = self.locations.write().await;
        if locations.contains_key(&location.search_query) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Location",
                id: location.search_query.clone(),
            });
        }
        locations.insert(location.search_query.clone(), location.clone());
        Ok(())
    }
}

#[async_trait]
impl<R: InMemoryRecord> RecordRepository<R> for InMemoryRepository {
    async fn get_records(&self, location_id: LocationId) -> Result<Vec<R>> {
        let table = R::table(self).read().await;
        Ok(table.get(&location_id).cloned().unwrap_or_default())
    }

    async fn create_record(&self, record: &R) -> Result<()> {
        let location_id = record.location_id();
        if !self.location_exists(location_id).await {
            return Err(RepositoryError::InvalidData(format!(
                "{} references unknown location {location_id}",
                R::DOMAIN.entity_type()
            )));
        }

        let mut table = R::table(self).write().await;
        table.entry(location_id).or_default().push(record.clone());
        Ok(())
    }
}
