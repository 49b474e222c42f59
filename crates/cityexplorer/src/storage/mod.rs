//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository traits
//! defined in `cityexplorer_core::storage`. The implementations are selected
//! at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `sqlite` (default): SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//! - `inmemory`: HashMap-backed storage, nothing survives a restart
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time.
//!
//! # Examples
//!
//! Build with SQLite (default):
//! ```bash
//! cargo build -p cityexplorer
//! ```
//!
//! Build with the in-memory store:
//! ```bash
//! cargo build -p cityexplorer --no-default-features --features inmemory
//! ```

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!(
    "Features 'sqlite' and 'inmemory' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "sqlite", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'sqlite' or 'inmemory' feature. \
    Example: cargo build -p cityexplorer --features sqlite"
);

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "inmemory")]
pub mod inmemory;

use cityexplorer_core::storage::Result;

use crate::config::Config;

/// The repository compiled into this binary.
#[cfg(feature = "sqlite")]
pub type Repository = sqlite::SqliteRepository;

/// The repository compiled into this binary.
#[cfg(feature = "inmemory")]
pub type Repository = inmemory::InMemoryRepository;

/// Opens the configured backend, creating the schema if needed.
#[cfg(feature = "sqlite")]
pub async fn open(config: &Config) -> Result<Repository> {
    tracing::info!(path = %config.sqlite_path, "Opening SQLite store");
    Repository::new(&config.sqlite_path).await
}

/// Opens the configured backend, creating the schema if needed.
#[cfg(feature = "inmemory")]
pub async fn open(_config: &Config) -> Result<Repository> {
    tracing::info!("Using in-memory store");
    Ok(Repository::new())
}

/// A fresh, empty store for tests.
#[cfg(all(test, feature = "sqlite"))]
pub async fn test_store() -> Repository {
    Repository::new_in_memory()
        .await
        .expect("in-memory SQLite should open")
}

/// A fresh, empty store for tests.
#[cfg(all(test, feature = "inmemory"))]
pub async fn test_store() -> Repository {
    Repository::new()
}
