//! Product turnover snapshot

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Turnover statistics for one product in the zone it is slotted into.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_rates"))]
pub struct ProductTurnover {
    #[validate(length(min = 1))]
    pub zone_id: String,
    #[serde(default)]
    pub product_id: Option<String>,
    /// Stock turns per period.
    pub turnover_rate: f64,
    /// Picks per day.
    pub pick_frequency: f64,
}

impl ProductTurnover {
    pub fn new(zone_id: impl Into<String>, turnover_rate: f64, pick_frequency: f64) -> Self {
        Self { zone_id: zone_id.into(), product_id: None, turnover_rate, pick_frequency }
    }

    pub fn for_product(mut self, product_id: impl Into<String>) -> Self { self.product_id = Some(product_id.into()); self }
}

fn validate_rates(product: &ProductTurnover) -> Result<(), ValidationError> {
    if !product.turnover_rate.is_finite() || product.turnover_rate < 0.0 {
        return Err(ValidationError::new("invalid_turnover_rate"));
    }
    if !product.pick_frequency.is_finite() || product.pick_frequency < 0.0 {
        return Err(ValidationError::new("invalid_pick_frequency"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn test_turnover_validation() {
        assert!(ProductTurnover::new("A", 3.0, 12.0).for_product("P1").validate().is_ok());
        assert!(ProductTurnover::new("A", -1.0, 12.0).validate().is_err());
        assert!(ProductTurnover::new("A", 3.0, f64::NAN).validate().is_err());
        assert!(ProductTurnover::new("", 3.0, 1.0).validate().is_err());
    }
}
