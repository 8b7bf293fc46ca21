//! Request and response bodies for the fulfillment API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::aggregates::{FulfillmentCandidate, FulfillmentOrder, ProductTurnover};
use crate::domain::scoring::{ShipmentPlan, ShipmentStrategy, SourceSelection};

#[derive(Debug, Deserialize, Validate)]
pub struct SelectSourceRequest {
    #[validate]
    pub order: FulfillmentOrder,
    /// Restricts scoring to these network candidates; the whole network when absent.
    #[serde(default)]
    pub candidate_ids: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct EvaluateRequest {
    #[validate]
    pub order: FulfillmentOrder,
    #[validate]
    pub candidate: FulfillmentCandidate,
}

#[derive(Debug, Deserialize, Validate)]
pub struct PlanShipmentRequest {
    #[validate]
    pub order: FulfillmentOrder,
    #[serde(default)]
    pub strategy: ShipmentStrategy,
    #[serde(default)]
    pub candidate_ids: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ClassifyZonesRequest {
    #[validate]
    pub products: Vec<ProductTurnover>,
}

/// Response envelope carrying a request id and generation time next to the payload.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub request_id: Uuid,
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self { request_id: Uuid::now_v7(), generated_at: Utc::now(), data }
    }
}

pub type SelectSourceResponse = Envelope<SourceSelection>;

#[derive(Debug, Serialize)]
pub struct ShipmentOptionsResponse {
    pub options: Vec<ShipmentPlan>,
    /// Candidate able to ship the whole order alone, if one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single_source: Option<String>,
}
