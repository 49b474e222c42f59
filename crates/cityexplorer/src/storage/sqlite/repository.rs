//! SQLite repository implementation.
//!
//! Implements the repository traits from `cityexplorer_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use cityexplorer_core::records::{Location, LocationId};
use cityexplorer_core::storage::{LocationRepository, RecordRepository, RepositoryError, Result};

use super::conversions::{location_to_params, row_to_location, SqlRecord};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// Provides async access to SQLite storage for locations and every record domain.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    /// Deletes every cached location and record.
    pub async fn clear(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                tx.execute_batch(schema::CLEAR_TABLES).map_err(wrap_err)?;
                tx.commit().map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Location", "*"))
    }
}

// ============================================================================
// LocationRepository implementation
// ============================================================================

#[async_trait]
impl LocationRepository for SqliteRepository {
    async fn get_location(&self, search_query: &str) -> Result<Option<Location>> {
        let query = search_query.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_LOCATION_BY_QUERY)
                    .map_err(wrap_err)?;
                match stmt.query_row([&query], row_to_location) {
                    Ok(location) => Ok(Some(location)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Location", search_query))
    }

    async fn create_location(&self, location: &Location) -> Result<()> {
        let params = location_to_params(location);

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_LOCATION,
                    rusqlite::params_from_iter(params),
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Location", location.search_query.as_str()))
    }
}

// ============================================================================
// RecordRepository implementation
// ============================================================================

#[async_trait]
impl<R: SqlRecord> RecordRepository<R> for SqliteRepository {
    async fn get_records(&self, location_id: LocationId) -> Result<Vec<R>> {
        let id_str = location_id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(R::SELECT_BY_LOCATION).map_err(wrap_err)?;
                let rows = stmt.query_map([&id_str], R::from_row).map_err(wrap_err)?;

                let mut records = Vec::new();
                for row_result in rows {
                    records.push(row_result.map_err(wrap_err)?);
                }
                Ok(records)
            })
            .await
            .map_err(|e| {
                map_tokio_rusqlite_error(e, R::DOMAIN.entity_type(), location_id.to_string())
            })
    }

    async fn create_record(&self, record: &R) -> Result<()> {
        let params = record.to_params();
        let location_id = record.location_id();

        self.conn
            .call(move |conn| {
                conn.execute(R::INSERT, rusqlite::params_from_iter(params))
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| {
                map_tokio_rusqlite_error(e, R::DOMAIN.entity_type(), location_id.to_string())
            })
    }
}
