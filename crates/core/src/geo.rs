//! Great-circle distance on a spherical earth and the proximity scan built on it.
//!
//! Two formulas are available:
//!
//! - [`DistanceFormula::Legacy`] adds `sin(x) * 2` where the textbook
//!   haversine squares the half-angle sine. Results match the distances that
//!   existing clients of this service have always been given, including the
//!   numeric failures the expression produces when the query point lies
//!   south or west of a record.
//! - [`DistanceFormula::Haversine`] is the textbook formula.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::error::{DomainError, DomainResult};

/// Mean earth radius in kilometers (spherical approximation).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point given as latitude/longitude in degrees. Compared by value.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Which expression computes the haversine term `a`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceFormula {
    /// `a = sin(dlat/2)*2 + cos(lat1)*cos(lat2)*sin(dlon/2)*2`
    #[default]
    Legacy,
    /// `a = sin²(dlat/2) + cos(lat1)*cos(lat2)*sin²(dlon/2)`
    Haversine,
}

impl DistanceFormula {
    pub fn as_str(self) -> &'static str {
        match self {
            DistanceFormula::Legacy => "legacy",
            DistanceFormula::Haversine => "haversine",
        }
    }
}

impl core::fmt::Display for DistanceFormula {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistanceFormula {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "legacy" => Ok(DistanceFormula::Legacy),
            "haversine" => Ok(DistanceFormula::Haversine),
            other => Err(DomainError::validation(format!(
                "unknown distance formula '{other}' (expected: legacy, haversine)"
            ))),
        }
    }
}

/// Distance in kilometers from `record` (point 1) to `query` (point 2).
///
/// Operand order matters for [`DistanceFormula::Legacy`]: `dlat` and `dlon`
/// are taken as `query - record`.
///
/// Fails with [`DomainError::Numeric`] when a square-root operand is negative
/// or a trigonometric argument is infinite. NaN inputs yield a NaN distance.
pub fn distance_km(record: Coordinate, query: Coordinate, formula: DistanceFormula) -> DomainResult<f64> {
    let lat1 = record.latitude.to_radians();
    let lon1 = record.longitude.to_radians();
    let lat2 = query.latitude.to_radians();
    let lon2 = query.longitude.to_radians();

    let dlon = lon2 - lon1;
    let dlat = lat2 - lat1;

    let sin_dlat = sin(dlat / 2.0)?;
    let sin_dlon = sin(dlon / 2.0)?;
    let cos_lat1 = cos(lat1)?;
    let cos_lat2 = cos(lat2)?;

    let a = match formula {
        DistanceFormula::Legacy => sin_dlat * 2.0 + cos_lat1 * cos_lat2 * sin_dlon * 2.0,
        // Rounding can push the term a hair outside [0, 1] near antipodes.
        DistanceFormula::Haversine => {
            (sin_dlat * sin_dlat + cos_lat1 * cos_lat2 * (sin_dlon * sin_dlon)).clamp(0.0, 1.0)
        }
    };
    let c = 2.0 * sqrt(a)?.atan2(sqrt(1.0 - a)?);

    Ok(EARTH_RADIUS_KM * c)
}

/// Keep the records whose distance to `query` is at most `max_distance_km`.
///
/// Linear scan; input order is preserved. The first numeric failure aborts
/// the whole scan.
pub fn filter_within<I>(
    records: I,
    query: Coordinate,
    max_distance_km: f64,
    formula: DistanceFormula,
) -> DomainResult<Vec<Address>>
where
    I: IntoIterator<Item = Address>,
{
    let mut within = Vec::new();
    for record in records {
        let distance = distance_km(record.coordinate(), query, formula)?;
        if distance <= max_distance_km {
            within.push(record);
        }
    }
    Ok(within)
}

fn sqrt(x: f64) -> DomainResult<f64> {
    if x < 0.0 {
        return Err(DomainError::numeric(format!("math domain error: sqrt({x})")));
    }
    Ok(x.sqrt())
}

fn sin(x: f64) -> DomainResult<f64> {
    if x.is_infinite() {
        return Err(DomainError::numeric(format!("math domain error: sin({x})")));
    }
    Ok(x.sin())
}

fn cos(x: f64) -> DomainResult<f64> {
    if x.is_infinite() {
        return Err(DomainError::numeric(format!("math domain error: cos({x})")));
    }
    Ok(x.cos())
}
