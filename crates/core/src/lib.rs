//! cityexplorer_core - canonical records, provider and storage contracts, and the
//! lookup-or-fetch protocol shared by every cityexplorer backend.

pub mod lookup;
pub mod provider;
pub mod records;
pub mod serde;
pub mod storage;
