//! Lookup-or-fetch orchestration (cache-aside).
//!
//! Every request runs the same two-state machine: check the cache, and on a
//! miss fetch from the provider, persist what came back, and return it.
//!
//! ```text
//! CHECK_CACHE ──rows > 0──▶ Hit(rows)
//!      │
//!      └──no rows──▶ Miss ──▶ FETCH ──▶ PERSIST ──▶ RETURN
//! ```

mod error;
mod orchestrator;
mod outcome;

pub use error::LookupError;
pub use orchestrator::{lookup_or_fetch, persist_records, resolve_location};
pub use outcome::{check_location, check_records, CacheOutcome};
