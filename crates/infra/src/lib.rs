//! Infrastructure layer: address storage, the proximity scan and configuration.

pub mod config;
pub mod proximity;
pub mod store;


pub use config::{Config, ConfigError, StoreBackend};
pub use proximity::{ProximityError, ProximityFilter};
pub use store::{AddressStore, InMemoryAddressStore, SqliteAddressStore, StoreError};
