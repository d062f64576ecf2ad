use std::sync::Arc;

use anyhow::Context;

use addressbook_core::DistanceFormula;
use addressbook_infra::{
    AddressStore, Config, InMemoryAddressStore, ProximityFilter, SqliteAddressStore, StoreBackend,
};

/// Type-erased store shared by all handlers.
pub type SharedStore = Arc<dyn AddressStore>;

/// Everything a request handler needs.
pub struct AppServices {
    store: SharedStore,
    proximity: ProximityFilter<SharedStore>,
}

impl AppServices {
    pub fn new(store: SharedStore, formula: DistanceFormula) -> Self {
        let proximity = ProximityFilter::new(store.clone(), formula);
        Self { store, proximity }
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    pub fn proximity(&self) -> &ProximityFilter<SharedStore> {
        &self.proximity
    }
}

pub async fn build_services(config: &Config) -> anyhow::Result<AppServices> {
    let store: SharedStore = match config.store {
        StoreBackend::Memory => {
            tracing::warn!("using in-memory address store; records are lost on restart");
            Arc::new(InMemoryAddressStore::new())
        }
        StoreBackend::Sqlite => Arc::new(
            SqliteAddressStore::connect(&config.database_url)
                .await
                .with_context(|| format!("failed to open address store at {}", config.database_url))?,
        ),
    };

    tracing::info!(formula = %config.distance_formula, "proximity search configured");
    Ok(AppServices::new(store, config.distance_formula))
}
