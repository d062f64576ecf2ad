use std::sync::Arc;

use async_trait::async_trait;

use addressbook_core::{Address, AddressId, NewAddress};

/// Address store error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("address not found: {0}")]
    NotFound(AddressId),
    #[error("storage error: {0}")]
    Storage(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Storage(err.to_string())
    }
}

/// Durable storage for address records.
///
/// Every operation is atomic with respect to the one record it touches.
/// There is no cross-operation consistency: concurrent updates to the same
/// id are last-writer-wins. A `NotFound` outcome never mutates state.
#[async_trait]
pub trait AddressStore: Send + Sync {
    /// Assign a fresh id, persist the record and return it.
    async fn create(&self, address: NewAddress) -> Result<Address, StoreError>;

    /// Fetch one record by id.
    async fn get(&self, id: AddressId) -> Result<Address, StoreError>;

    /// Replace every field of an existing record. The id never changes.
    async fn update(&self, id: AddressId, fields: NewAddress) -> Result<Address, StoreError>;

    /// Remove a record permanently.
    async fn delete(&self, id: AddressId) -> Result<(), StoreError>;

    /// Every stored record. Both implementations yield ascending id order,
    /// but callers must not depend on it.
    async fn list_all(&self) -> Result<Vec<Address>, StoreError>;
}

#[async_trait]
impl<S> AddressStore for Arc<S>
where
    S: AddressStore + ?Sized,
{
    async fn create(&self, address: NewAddress) -> Result<Address, StoreError> {
        (**self).create(address).await
    }

    async fn get(&self, id: AddressId) -> Result<Address, StoreError> {
        (**self).get(id).await
    }

    async fn update(&self, id: AddressId, fields: NewAddress) -> Result<Address, StoreError> {
        (**self).update(id, fields).await
    }

    async fn delete(&self, id: AddressId) -> Result<(), StoreError> {
        (**self).delete(id).await
    }

    async fn list_all(&self) -> Result<Vec<Address>, StoreError> {
        (**self).list_all().await
    }
}
