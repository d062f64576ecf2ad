//! The address record.

use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;
use crate::id::AddressId;

/// Field values of an address without an identifier.
///
/// Used both for creation and for full-replacement updates: every field is
/// always supplied, there is no partial merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAddress {
    pub address: String,
    /// Degrees, expected in [-90, 90] but not enforced.
    pub latitude: f64,
    /// Degrees, expected in [-180, 180] but not enforced.
    pub longitude: f64,
}

impl NewAddress {
    pub fn new(address: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            address: address.into(),
            latitude,
            longitude,
        }
    }

    /// Attach a store-assigned identifier.
    pub fn with_id(self, id: AddressId) -> Address {
        Address {
            id,
            address: self.address,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// A stored address record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub id: AddressId,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Address {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Replace every non-id field. The identifier never changes.
    pub fn replace_fields(&mut self, fields: NewAddress) {
        self.address = fields.address;
        self.latitude = fields.latitude;
        self.longitude = fields.longitude;
    }

    /// Field values without the identifier.
    pub fn fields(&self) -> NewAddress {
        NewAddress::new(self.address.clone(), self.latitude, self.longitude)
    }
}
