//! Address record storage boundary.
//!
//! `AddressStore` is the contract the HTTP layer and the proximity filter
//! depend on; the in-memory and SQLite implementations are interchangeable.

pub mod in_memory;
pub mod sqlite;
pub mod r#trait;

pub use in_memory::InMemoryAddressStore;
pub use r#trait::{AddressStore, StoreError};
pub use sqlite::SqliteAddressStore;
