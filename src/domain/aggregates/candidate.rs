//! Fulfillment Candidate Aggregate

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::{Validate, ValidationError};
use crate::domain::value_objects::{CandidateKind, GeoPoint};
use crate::domain::aggregates::OrderLineRequest;

/// A warehouse or retail store that could ship an order.
///
/// Built from static network configuration plus the caller's inventory snapshot and
/// treated as read-only while scoring.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_rates"))]
pub struct FulfillmentCandidate {
    #[validate(length(min = 1))]
    pub id: String,
    pub name: String,
    pub kind: CandidateKind,
    #[validate]
    pub location: GeoPoint,
    #[serde(default)]
    pub stock_by_product_id: HashMap<String, u32>,
    pub shipping_cost_per_km: f64,
    pub processing_time_hours: f64,
}

impl FulfillmentCandidate {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: CandidateKind, location: GeoPoint) -> Self {
        Self {
            id: id.into(), name: name.into(), kind, location, stock_by_product_id: HashMap::new(),
            shipping_cost_per_km: 0.0, processing_time_hours: 0.0,
        }
    }

    pub fn warehouse(id: impl Into<String>, name: impl Into<String>, location: GeoPoint) -> Self {
        Self::new(id, name, CandidateKind::Warehouse, location)
    }

    pub fn store(id: impl Into<String>, name: impl Into<String>, location: GeoPoint) -> Self {
        Self::new(id, name, CandidateKind::Store, location)
    }

    pub fn with_stock(mut self, product_id: impl Into<String>, quantity: u32) -> Self {
        self.stock_by_product_id.insert(product_id.into(), quantity);
        self
    }

    pub fn with_shipping_cost_per_km(mut self, rate: f64) -> Self { self.shipping_cost_per_km = rate; self }
    pub fn with_processing_time_hours(mut self, hours: f64) -> Self { self.processing_time_hours = hours; self }

    /// Units on hand for a product; unknown products count as zero.
    pub fn available(&self, product_id: &str) -> u32 {
        self.stock_by_product_id.get(product_id).copied().unwrap_or(0)
    }

    pub fn covers(&self, line: &OrderLineRequest) -> bool { self.available(&line.product_id) >= line.quantity }

    /// True when every line can be shipped in full.
    ///
    /// Lines repeating a product draw on the same stock, so quantities are summed per
    /// product before comparing.
    pub fn covers_all(&self, lines: &[OrderLineRequest]) -> bool {
        let mut requested: HashMap<&str, u64> = HashMap::new();
        for line in lines {
            *requested.entry(line.product_id.as_str()).or_insert(0) += u64::from(line.quantity);
        }
        requested.into_iter().all(|(product_id, qty)| u64::from(self.available(product_id)) >= qty)
    }
}

fn validate_rates(candidate: &FulfillmentCandidate) -> Result<(), ValidationError> {
    if !candidate.shipping_cost_per_km.is_finite() || candidate.shipping_cost_per_km < 0.0 {
        return Err(ValidationError::new("negative_shipping_cost_per_km"));
    }
    if !candidate.processing_time_hours.is_finite() || candidate.processing_time_hours < 0.0 {
        return Err(ValidationError::new("negative_processing_time"));
    }
    Ok(())
}
