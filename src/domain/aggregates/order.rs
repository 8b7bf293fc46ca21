//! Fulfillment Order Aggregate

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::domain::value_objects::{GeoPoint, Priority};

/// One requested product and quantity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct OrderLineRequest {
    #[validate(length(min = 1))]
    pub product_id: String,
    #[serde(default)]
    pub product_name: String,
    #[validate(range(min = 1))]
    pub quantity: u32,
}

impl OrderLineRequest {
    pub fn new(product_id: impl Into<String>, product_name: impl Into<String>, quantity: u32) -> Self {
        Self { product_id: product_id.into(), product_name: product_name.into(), quantity }
    }

    pub(crate) fn with_quantity(&self, quantity: u32) -> Self {
        Self { quantity, ..self.clone() }
    }
}

/// The scoring input: where the order goes, what it contains and how fast it must arrive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_has_lines"))]
pub struct FulfillmentOrder {
    #[serde(default)]
    pub id: Option<String>,
    #[validate]
    pub location: GeoPoint,
    #[validate]
    pub lines: Vec<OrderLineRequest>,
    #[serde(default)]
    pub priority: Priority,
}

impl FulfillmentOrder {
    pub fn new(location: GeoPoint, priority: Priority) -> Self {
        Self { id: None, location, lines: vec![], priority }
    }

    pub fn standard(location: GeoPoint) -> Self { Self::new(location, Priority::Standard) }
    pub fn express(location: GeoPoint) -> Self { Self::new(location, Priority::Express) }

    pub fn with_id(mut self, id: impl Into<String>) -> Self { self.id = Some(id.into()); self }

    pub fn with_line(mut self, product_id: impl Into<String>, product_name: impl Into<String>, quantity: u32) -> Self {
        self.lines.push(OrderLineRequest::new(product_id, product_name, quantity));
        self
    }

    pub fn is_express(&self) -> bool { self.priority == Priority::Express }
    pub fn total_units(&self) -> u64 { self.lines.iter().map(|l| u64::from(l.quantity)).sum() }
}

fn validate_has_lines(order: &FulfillmentOrder) -> Result<(), ValidationError> {
    if order.lines.is_empty() { return Err(ValidationError::new("no_lines")); }
    Ok(())
}
