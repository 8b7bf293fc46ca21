//! Value Objects for fulfillment scoring

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::{Validate, ValidationError};

/// Geographic position in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_coordinates"))]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self { Self { lat, lng } }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "({:.5}, {:.5})", self.lat, self.lng) }
}

fn validate_coordinates(point: &GeoPoint) -> Result<(), ValidationError> {
    if !point.lat.is_finite() || !(-90.0..=90.0).contains(&point.lat) {
        return Err(ValidationError::new("latitude_out_of_range"));
    }
    if !point.lng.is_finite() || !(-180.0..=180.0).contains(&point.lng) {
        return Err(ValidationError::new("longitude_out_of_range"));
    }
    Ok(())
}

/// What sort of site a fulfillment candidate is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateKind { Warehouse, Store }

impl CandidateKind {
    pub fn is_store(&self) -> bool { matches!(self, Self::Store) }
}

impl fmt::Display for CandidateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self { Self::Warehouse => write!(f, "warehouse"), Self::Store => write!(f, "store") }
    }
}

/// Delivery priority requested by the customer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority { Express, #[default] Standard }

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn test_geo_point_validation() {
        assert!(GeoPoint::new(50.45, 30.52).validate().is_ok());
        assert!(GeoPoint::new(90.0, -180.0).validate().is_ok());
        assert!(GeoPoint::new(91.0, 30.0).validate().is_err());
        assert!(GeoPoint::new(50.0, 180.5).validate().is_err());
        assert!(GeoPoint::new(f64::NAN, 30.0).validate().is_err());
        assert!(GeoPoint::new(50.0, f64::INFINITY).validate().is_err());
    }
    #[test]
    fn test_kind_wire_format() {
        assert_eq!(serde_json::to_string(&CandidateKind::Store).unwrap(), "\"store\"");
        assert_eq!(serde_json::from_str::<Priority>("\"express\"").unwrap(), Priority::Express);
    }
}
