//! In-memory storage backend for testing.
//!
//! Stores locations and records in HashMaps wrapped in `Arc<RwLock<_>>`. The
//! foreign key from records to locations is checked on insert so the backend
//! fails the same way SQLite does.
//!
//! # Example
//!
//! ```rust,ignore
//! use cityexplorer::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
