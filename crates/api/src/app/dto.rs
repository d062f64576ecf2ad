//! Wire format of the address API and its mapping to domain types.
//!
//! The mapping is spelled out field by field in both directions.

use serde::{Deserialize, Serialize};

use addressbook_core::{Address, Coordinate, NewAddress};

// -------------------------
// Request DTOs
// -------------------------

/// Body of create and update requests.
///
/// Clients may echo back an `id`; it is accepted and ignored; the store
/// assigns ids on create and never changes them on update.
#[derive(Debug, Deserialize)]
pub struct AddressRequest {
    #[serde(default)]
    pub id: Option<i64>,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl AddressRequest {
    pub fn into_fields(self) -> NewAddress {
        NewAddress {
            address: self.address,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Query string of the proximity search.
#[derive(Debug, Deserialize)]
pub struct WithinDistanceQuery {
    pub latitude: f64,
    pub longitude: f64,
    /// Kilometers, inclusive.
    pub distance: f64,
}

impl WithinDistanceQuery {
    pub fn point(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressResponse {
    pub id: i64,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Address> for AddressResponse {
    fn from(a: Address) -> Self {
        Self {
            id: a.id.get(),
            address: a.address,
            latitude: a.latitude,
            longitude: a.longitude,
        }
    }
}

pub fn addresses_to_response(items: Vec<Address>) -> Vec<AddressResponse> {
    items.into_iter().map(AddressResponse::from).collect()
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

pub const ADDRESS_DELETED: MessageResponse = MessageResponse {
    message: "Address deleted successfully",
};
