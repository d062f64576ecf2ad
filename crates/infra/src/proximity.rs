//! Proximity search over stored addresses.
//!
//! There is no spatial index: every query reads the whole store and runs
//! the distance formula once per record.

use addressbook_core::geo::{self, Coordinate, DistanceFormula};
use addressbook_core::{Address, DomainError};

use crate::store::{AddressStore, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum ProximityError {
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The distance formula failed for one of the records.
    #[error(transparent)]
    Numeric(#[from] DomainError),
}

/// Linear-scan radius filter on top of an [`AddressStore`].
#[derive(Debug, Clone)]
pub struct ProximityFilter<S> {
    store: S,
    formula: DistanceFormula,
}

impl<S> ProximityFilter<S>
where
    S: AddressStore,
{
    pub fn new(store: S, formula: DistanceFormula) -> Self {
        Self { store, formula }
    }

    pub fn formula(&self) -> DistanceFormula {
        self.formula
    }

    /// Records within `max_distance_km` of `query` (inclusive), in store order.
    pub async fn find_within(
        &self,
        query: Coordinate,
        max_distance_km: f64,
    ) -> Result<Vec<Address>, ProximityError> {
        let records = self.store.list_all().await?;
        let scanned = records.len();

        let within = geo::filter_within(records, query, max_distance_km, self.formula)?;
        tracing::debug!(
            scanned,
            matched = within.len(),
            formula = %self.formula,
            "proximity scan finished"
        );
        Ok(within)
    }
}
