//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a stored address record.
///
/// Assigned by the store on creation. Ids are monotonically increasing and
/// are never reused, not even after the record is deleted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressId(i64);

impl AddressId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for AddressId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for AddressId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<AddressId> for i64 {
    fn from(value: AddressId) -> Self {
        value.0
    }
}

impl FromStr for AddressId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|e| DomainError::invalid_id(format!("AddressId: {e}")))?;
        Ok(Self(value))
    }
}
