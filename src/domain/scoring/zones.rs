//! Hot / warm / cold / frozen zone classification from product turnover.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

use crate::config::ZoneThresholds;
use crate::domain::aggregates::ProductTurnover;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneClassification { Hot, Warm, Cold, Frozen }

impl ZoneClassification {
    pub fn from_turnover(turnover: f64, thresholds: &ZoneThresholds) -> Self {
        if turnover >= thresholds.hot { Self::Hot }
        else if turnover >= thresholds.warm { Self::Warm }
        else if turnover >= thresholds.cold { Self::Cold }
        else { Self::Frozen }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Hot => "Fast-moving items",
            Self::Warm => "Medium velocity items",
            Self::Cold => "Slow-moving items",
            Self::Frozen => "Rarely accessed items",
        }
    }

    /// Where pickers should find this zone to keep walking distance short.
    pub fn recommended_location(&self) -> &'static str {
        match self {
            Self::Hot => "Near packing and shipping docks",
            Self::Warm => "Main aisles, mid-level racks",
            Self::Cold => "Back aisles and upper racks",
            Self::Frozen => "Reserve and overflow storage",
        }
    }
}

impl fmt::Display for ZoneClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self { Self::Hot => "hot", Self::Warm => "warm", Self::Cold => "cold", Self::Frozen => "frozen" };
        write!(f, "{}", s)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoneStat {
    pub zone_id: String,
    pub classification: ZoneClassification,
    /// Mean turnover rate of the zone's products.
    pub turnover_rate: f64,
    /// Summed pick frequency of the zone's products.
    pub access_frequency_per_day: f64,
    pub product_count: usize,
    pub description: String,
    pub recommended_location: String,
}

#[derive(Default)]
struct ZoneTotals { turnover: f64, picks: f64, products: usize }

/// Aggregates products per zone and classifies each zone by its mean turnover.
///
/// Output is sorted by zone id. Zones only exist if a product names them, so no zone is
/// ever emitted without data behind it.
#[tracing::instrument(skip_all, fields(products = products.len()))]
pub fn classify_zones(products: &[ProductTurnover], thresholds: &ZoneThresholds) -> Vec<ZoneStat> {
    let mut zones: BTreeMap<&str, ZoneTotals> = BTreeMap::new();
    for p in products {
        let totals = zones.entry(p.zone_id.as_str()).or_default();
        totals.turnover += p.turnover_rate;
        totals.picks += p.pick_frequency;
        totals.products += 1;
    }

    zones
        .into_iter()
        .map(|(zone_id, totals)| {
            let turnover = totals.turnover / totals.products as f64;
            let classification = ZoneClassification::from_turnover(turnover, thresholds);
            debug!(zone_id, turnover, picks = totals.picks, %classification, "zone classified");
            ZoneStat {
                zone_id: zone_id.to_string(),
                classification,
                turnover_rate: turnover,
                access_frequency_per_day: totals.picks,
                product_count: totals.products,
                description: classification.description().to_string(),
                recommended_location: classification.recommended_location().to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::ZoneClassification::*;

    #[test]
    fn test_one_zone_per_band() {
        let products = vec![
            ProductTurnover::new("A", 12.0, 40.0),
            ProductTurnover::new("B", 7.0, 20.0),
            ProductTurnover::new("C", 3.0, 5.0),
            ProductTurnover::new("D", 0.5, 0.2),
        ];
        let classes: Vec<ZoneClassification> = classify_zones(&products, &ZoneThresholds::default()).iter().map(|z| z.classification).collect();
        assert_eq!(classes, vec![Hot, Warm, Cold, Frozen]);
    }

    #[test]
    fn test_threshold_boundaries() {
        let t = ZoneThresholds::default();
        assert_eq!(ZoneClassification::from_turnover(10.0, &t), Hot);
        assert_eq!(ZoneClassification::from_turnover(9.99, &t), Warm);
        assert_eq!(ZoneClassification::from_turnover(5.0, &t), Warm);
        assert_eq!(ZoneClassification::from_turnover(1.0, &t), Cold);
        assert_eq!(ZoneClassification::from_turnover(0.99, &t), Frozen);
        assert_eq!(ZoneClassification::from_turnover(0.0, &t), Frozen);
    }

    #[test]
    fn test_aggregates_per_zone_sorted_by_id() {
        let products = vec![
            ProductTurnover::new("Z-2", 4.0, 3.0).for_product("P1"),
            ProductTurnover::new("A-1", 14.0, 30.0).for_product("P2"),
            ProductTurnover::new("Z-2", 8.0, 9.0).for_product("P3"),
        ];
        let zones = classify_zones(&products, &ZoneThresholds::default());
        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].zone_id, "A-1");
        assert_eq!(zones[1].zone_id, "Z-2");
        assert_eq!(zones[1].product_count, 2);
        assert_eq!(zones[1].turnover_rate, 6.0);
        assert_eq!(zones[1].access_frequency_per_day, 12.0);
        assert_eq!(zones[1].classification, Warm);
        assert_eq!(zones[1].recommended_location, Warm.recommended_location());
    }

    #[test]
    fn test_no_products_no_zones() {
        assert!(classify_zones(&[], &ZoneThresholds::default()).is_empty());
    }

    #[test]
    fn test_custom_thresholds() {
        let t = ZoneThresholds { hot: 20.0, warm: 10.0, cold: 2.0 };
        let zones = classify_zones(&[ProductTurnover::new("A", 12.0, 1.0)], &t);
        assert_eq!(zones[0].classification, Warm);
    }
}
