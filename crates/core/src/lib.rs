//! `addressbook-core` — domain building blocks for the address book.
//!
//! This crate contains **pure domain** code: the address record, its
//! identifier, coordinates and the distance math. No IO lives here.

pub mod address;
pub mod error;
pub mod geo;
pub mod id;

pub use address::{Address, NewAddress};
pub use error::{DomainError, DomainResult};
pub use geo::{Coordinate, DistanceFormula, EARTH_RADIUS_KM};
pub use id::AddressId;
