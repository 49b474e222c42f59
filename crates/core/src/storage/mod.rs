//! Cache store contract.
//!
//! One logical table per record type plus a locations table. The traits only
//! expose lookup and insert: the cache is append-only from the core's point of
//! view, and clearing it is an administrative concern of each backend.

mod error;
mod traits;

pub use error::{RepositoryError, Result};
pub use traits::{LocationRepository, RecordRepository, Store};
