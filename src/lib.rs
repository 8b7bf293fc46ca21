//! OpenSASE Fulfillment
//!
//! Fulfillment source scoring for a multi-location retailer.
//!
//! ## Features
//! - Great-circle distance between stores, warehouses and customers
//! - Per-candidate evaluation (stock coverage, shipping cost, delivery days)
//! - Ranked ship-from-store / warehouse source selection
//! - Single-source, split and partial shipment planning
//! - Hot / warm / cold / frozen warehouse zone classification
//!
//! Every scoring operation is a pure function of its inputs: the caller owns
//! the inventory snapshot and passes it in explicitly.

use thiserror::Error;

pub mod config;
pub mod domain;
pub mod http;

pub use config::{AppConfig, ScoringConfig, ScoringWeights, SplitConfig, ZoneThresholds};
pub use domain::aggregates::{FulfillmentCandidate, FulfillmentOrder, OrderLineRequest, ProductTurnover};
pub use domain::scoring::{
    can_ship_from_single, classify_zones, distance_km, evaluate, plan_shipment, rank_candidates,
    select_source, shipment_options, PlannedShipment, ScoreBreakdown, ScoredCandidate, ShipmentPlan,
    ShipmentStrategy, SourceSelection, ZoneClassification, ZoneStat,
};
pub use domain::value_objects::{CandidateKind, GeoPoint, Priority};

// =============================================================================
// Error Types
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FulfillmentError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No fulfillment candidates supplied")]
    NoCandidates,
}

impl From<validator::ValidationErrors> for FulfillmentError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::InvalidInput(errors.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FulfillmentError>;
