use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use addressbook_core::{Address, AddressId, NewAddress};

use super::r#trait::{AddressStore, StoreError};

#[derive(Debug, Default)]
struct Inner {
    records: BTreeMap<AddressId, Address>,
    last_id: i64,
}

/// In-memory address store.
///
/// Intended for tests/dev. Ids start at 1 and keep counting up across
/// deletes, so an id is never handed out twice.
#[derive(Debug, Default)]
pub struct InMemoryAddressStore {
    inner: RwLock<Inner>,
}

impl InMemoryAddressStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|i| i.records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> StoreError {
    StoreError::Storage("lock poisoned".to_string())
}

#[async_trait]
impl AddressStore for InMemoryAddressStore {
    async fn create(&self, address: NewAddress) -> Result<Address, StoreError> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        inner.last_id += 1;
        let record = address.with_id(AddressId::new(inner.last_id));
        inner.records.insert(record.id, record.clone());
        Ok(record)
    }

    async fn get(&self, id: AddressId) -> Result<Address, StoreError> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        inner
            .records
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn update(&self, id: AddressId, fields: NewAddress) -> Result<Address, StoreError> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        let record = inner.records.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        record.replace_fields(fields);
        Ok(record.clone())
    }

    async fn delete(&self, id: AddressId) -> Result<(), StoreError> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        inner
            .records
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    async fn list_all(&self) -> Result<Vec<Address>, StoreError> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        Ok(inner.records.values().cloned().collect())
    }
}
