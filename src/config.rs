//! Service and scoring configuration.
//!
//! Every tunable of the scorer lives here as a named default. [`AppConfig::from_env`]
//! overlays `FULFILLMENT_*` environment variables (after `dotenvy` has loaded `.env`).

use anyhow::{anyhow, bail, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Penalty per kilometre between candidate and customer.
pub const W_DISTANCE: f64 = 1.0;
/// Penalty per unit of estimated shipping cost.
pub const W_COST: f64 = 0.5;
/// Penalty per estimated delivery day.
pub const W_DELIVERY: f64 = 10.0;
/// Bonus for a candidate that holds every requested line in full.
pub const W_COMPLETE: f64 = 100.0;
/// Bonus for a retail store when the order is express.
pub const W_EXPRESS_STORE: f64 = 25.0;

pub const DEFAULT_TRANSIT_SPEED_KM_PER_DAY: f64 = 300.0;
pub const DEFAULT_MAX_ALTERNATIVES: usize = 5;

/// Zone turnover at or above which a zone is hot.
pub const HOT_TURNOVER: f64 = 10.0;
/// Zone turnover at or above which a zone is warm.
pub const WARM_TURNOVER: f64 = 5.0;
/// Zone turnover at or above which a zone is cold; anything lower is frozen.
pub const COLD_TURNOVER: f64 = 1.0;

pub const DEFAULT_MAX_SHIPMENTS: usize = 3;
pub const DEFAULT_MIN_LINES_PER_SHIPMENT: usize = 1;

pub const DEFAULT_PORT: u16 = 8083;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub distance: f64,
    pub cost: f64,
    pub delivery: f64,
    pub complete: f64,
    pub express_store: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            distance: W_DISTANCE,
            cost: W_COST,
            delivery: W_DELIVERY,
            complete: W_COMPLETE,
            express_store: W_EXPRESS_STORE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub weights: ScoringWeights,
    /// Average road transit assumed when turning distance into delivery days.
    pub transit_speed_km_per_day: f64,
    /// How many runners-up a selection reports next to the recommendation.
    pub max_alternatives: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            transit_speed_km_per_day: DEFAULT_TRANSIT_SPEED_KM_PER_DAY,
            max_alternatives: DEFAULT_MAX_ALTERNATIVES,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoneThresholds {
    pub hot: f64,
    pub warm: f64,
    pub cold: f64,
}

impl Default for ZoneThresholds {
    fn default() -> Self {
        Self { hot: HOT_TURNOVER, warm: WARM_TURNOVER, cold: COLD_TURNOVER }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SplitConfig {
    pub allow_split: bool,
    pub max_shipments: usize,
    pub min_lines_per_shipment: usize,
    /// Percentage taken off the summed shipping cost of a multi-shipment plan.
    pub combined_shipping_discount_percent: f64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            allow_split: true,
            max_shipments: DEFAULT_MAX_SHIPMENTS,
            min_lines_per_shipment: DEFAULT_MIN_LINES_PER_SHIPMENT,
            combined_shipping_discount_percent: 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub port: u16,
    /// JSON file holding the warehouse and store network served by the API.
    pub candidates_path: Option<PathBuf>,
    pub scoring: ScoringConfig,
    pub zones: ZoneThresholds,
    pub split: SplitConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            candidates_path: None,
            scoring: ScoringConfig::default(),
            zones: ZoneThresholds::default(),
            split: SplitConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let w = defaults.scoring.weights;

        let weights = ScoringWeights {
            distance: parse_or(&lookup, "FULFILLMENT_W_DISTANCE", w.distance)?,
            cost: parse_or(&lookup, "FULFILLMENT_W_COST", w.cost)?,
            delivery: parse_or(&lookup, "FULFILLMENT_W_DELIVERY", w.delivery)?,
            complete: parse_or(&lookup, "FULFILLMENT_W_COMPLETE", w.complete)?,
            express_store: parse_or(&lookup, "FULFILLMENT_W_EXPRESS_STORE", w.express_store)?,
        };
        let scoring = ScoringConfig {
            weights,
            transit_speed_km_per_day: parse_or(
                &lookup,
                "FULFILLMENT_TRANSIT_KM_PER_DAY",
                defaults.scoring.transit_speed_km_per_day,
            )?,
            max_alternatives: parse_or(&lookup, "FULFILLMENT_MAX_ALTERNATIVES", defaults.scoring.max_alternatives)?,
        };
        if !(scoring.transit_speed_km_per_day.is_finite() && scoring.transit_speed_km_per_day > 0.0) {
            bail!("FULFILLMENT_TRANSIT_KM_PER_DAY must be a positive number");
        }

        let zones = ZoneThresholds {
            hot: parse_or(&lookup, "FULFILLMENT_ZONE_HOT", defaults.zones.hot)?,
            warm: parse_or(&lookup, "FULFILLMENT_ZONE_WARM", defaults.zones.warm)?,
            cold: parse_or(&lookup, "FULFILLMENT_ZONE_COLD", defaults.zones.cold)?,
        };
        if !(zones.hot > zones.warm && zones.warm > zones.cold) {
            bail!("zone thresholds must satisfy hot > warm > cold, got {:?}", zones);
        }

        let split = SplitConfig {
            allow_split: parse_or(&lookup, "FULFILLMENT_ALLOW_SPLIT", defaults.split.allow_split)?,
            max_shipments: parse_or(&lookup, "FULFILLMENT_MAX_SHIPMENTS", defaults.split.max_shipments)?,
            min_lines_per_shipment: parse_or(
                &lookup,
                "FULFILLMENT_MIN_LINES_PER_SHIPMENT",
                defaults.split.min_lines_per_shipment,
            )?,
            combined_shipping_discount_percent: parse_or(
                &lookup,
                "FULFILLMENT_COMBINED_DISCOUNT_PERCENT",
                defaults.split.combined_shipping_discount_percent,
            )?,
        };
        if split.max_shipments == 0 {
            bail!("FULFILLMENT_MAX_SHIPMENTS must be at least 1");
        }
        if !(0.0..=100.0).contains(&split.combined_shipping_discount_percent) {
            bail!("FULFILLMENT_COMBINED_DISCOUNT_PERCENT must be between 0 and 100");
        }

        Ok(Self {
            port: parse_or(&lookup, "PORT", defaults.port)?,
            candidates_path: lookup("FULFILLMENT_CANDIDATES_PATH").filter(|p| !p.is_empty()).map(PathBuf::from),
            scoring,
            zones,
            split,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e| anyhow!("{}={:?}: {}", key, raw, e)),
        None => Ok(default),
    }
}
