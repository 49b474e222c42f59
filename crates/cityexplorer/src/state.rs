//! Shared application state.
//!
//! Handlers only see the aggregation facade. The concrete store is chosen at
//! compile time by the storage feature flags.

use std::{sync::Arc, time::Duration};

use anyhow::Result;

use cityexplorer_core::storage::Store;

use crate::{
    aggregator::{Aggregator, Providers},
    config::Config,
    storage,
};

/// Shared application state.
///
/// This is cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<Aggregator>,
    /// Overall time budget for a single request.
    pub request_timeout: Duration,
}

impl AppState {
    /// Opens the configured store and builds the provider adapters.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let store: Arc<dyn Store> = Arc::new(storage::open(config).await?);
        Ok(Self::new(store, Providers::from_config(config), config.request_timeout()))
    }

    pub fn new(store: Arc<dyn Store>, providers: Providers, request_timeout: Duration) -> Self {
        Self {
            aggregator: Arc::new(Aggregator::new(store, providers)),
            request_timeout,
        }
    }
}
