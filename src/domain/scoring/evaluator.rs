//! Candidate evaluation: one candidate against one order.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ScoringConfig;
use crate::domain::aggregates::{FulfillmentCandidate, FulfillmentOrder};
use crate::domain::value_objects::CandidateKind;
use super::distance::distance_km;

const HOURS_PER_DAY: f64 = 24.0;

/// A candidate scored against a specific order. Recomputed per request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub candidate_id: String,
    pub candidate_name: String,
    pub kind: CandidateKind,
    pub distance_km: f64,
    pub shipping_cost: f64,
    pub estimated_delivery_days: u32,
    /// False means the candidate can only partially fulfil the order.
    pub has_all_items: bool,
    pub lines_covered: usize,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
    pub reason: String,
}

/// Weighted contribution of every feature; `score` is their sum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub distance: f64,
    pub cost: f64,
    pub delivery: f64,
    pub completeness: f64,
    pub express_store: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Penalty { Distance, Cost, Delivery }

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.distance + self.cost + self.delivery + self.completeness + self.express_store
    }

    /// The penalty that drags the score down the most, if any is non-zero.
    fn dominant_penalty(&self) -> Option<Penalty> {
        [(Penalty::Distance, self.distance), (Penalty::Cost, self.cost), (Penalty::Delivery, self.delivery)]
            .into_iter()
            .filter(|(_, v)| *v < 0.0)
            .fold(None, |best: Option<(Penalty, f64)>, (p, v)| match best {
                Some((_, bv)) if bv <= v => best,
                _ => Some((p, v)),
            })
            .map(|(p, _)| p)
    }
}

/// Calendar days to deliver: whole processing days plus whole transit days.
pub fn estimate_delivery_days(processing_time_hours: f64, distance_km: f64, transit_speed_km_per_day: f64) -> u32 {
    let processing = (processing_time_hours / HOURS_PER_DAY).ceil();
    let transit = (distance_km / transit_speed_km_per_day).ceil();
    (processing + transit) as u32
}

/// Scores one candidate for one order. Partial stock is reported through
/// `has_all_items`, never as an error.
pub fn evaluate(order: &FulfillmentOrder, candidate: &FulfillmentCandidate, config: &ScoringConfig) -> ScoredCandidate {
    let w = &config.weights;

    let distance = distance_km(&order.location, &candidate.location);
    let has_all_items = candidate.covers_all(&order.lines);
    let lines_covered = order.lines.iter().filter(|l| candidate.covers(l)).count();
    let shipping_cost = distance * candidate.shipping_cost_per_km;
    let days = estimate_delivery_days(candidate.processing_time_hours, distance, config.transit_speed_km_per_day);

    let breakdown = ScoreBreakdown {
        distance: -w.distance * distance,
        cost: -w.cost * shipping_cost,
        delivery: -w.delivery * f64::from(days),
        completeness: if has_all_items { w.complete } else { 0.0 },
        express_store: if order.is_express() && candidate.kind.is_store() { w.express_store } else { 0.0 },
    };
    let score = breakdown.total();

    let stock = if has_all_items {
        "full stock".to_string()
    } else {
        format!("partial stock ({} of {} lines)", lines_covered, order.lines.len())
    };
    let reason = if breakdown.express_store > 0.0 {
        format!("express ship-from-store with {}, {:.1} km away", stock, distance)
    } else {
        match breakdown.dominant_penalty() {
            Some(Penalty::Distance) => format!("{}, distance dominates ({:.1} km)", stock, distance),
            Some(Penalty::Cost) => format!("{}, shipping cost dominates ({:.2})", stock, shipping_cost),
            Some(Penalty::Delivery) => format!("{}, delivery time dominates ({} days)", stock, days),
            None => format!("{}, no route penalty", stock),
        }
    };

    debug!(candidate_id = %candidate.id, distance_km = distance, shipping_cost, days, has_all_items, score, "candidate evaluated");

    ScoredCandidate {
        candidate_id: candidate.id.clone(),
        candidate_name: candidate.name.clone(),
        kind: candidate.kind,
        distance_km: distance,
        shipping_cost,
        estimated_delivery_days: days,
        has_all_items,
        lines_covered,
        score,
        breakdown,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::GeoPoint;

    const KYIV: GeoPoint = GeoPoint::new(50.45, 30.52);

    fn order() -> FulfillmentOrder {
        FulfillmentOrder::standard(KYIV).with_line("1", "Kettle", 2).with_line("2", "Mug", 1)
    }

    #[test]
    fn test_delivery_days() {
        assert_eq!(estimate_delivery_days(0.0, 0.0, 300.0), 0);
        assert_eq!(estimate_delivery_days(2.0, 0.5, 300.0), 2);
        assert_eq!(estimate_delivery_days(24.0, 300.0, 300.0), 2);
        assert_eq!(estimate_delivery_days(25.0, 301.0, 300.0), 4);
    }

    #[test]
    fn test_full_and_partial_stock() {
        let full = FulfillmentCandidate::warehouse("W1", "DC", GeoPoint::new(50.5, 30.6)).with_stock("1", 2).with_stock("2", 10);
        let short = FulfillmentCandidate::warehouse("W2", "DC2", GeoPoint::new(50.5, 30.6)).with_stock("1", 1).with_stock("2", 10);

        let a = evaluate(&order(), &full, &ScoringConfig::default());
        let b = evaluate(&order(), &short, &ScoringConfig::default());
        assert!(a.has_all_items);
        assert_eq!(a.lines_covered, 2);
        assert!(!b.has_all_items);
        assert_eq!(b.lines_covered, 1);
        assert!(b.reason.starts_with("partial stock (1 of 2 lines)"));
        assert!(a.score > b.score);
    }

    #[test]
    fn test_score_is_sum_of_breakdown() {
        let c = FulfillmentCandidate::warehouse("W1", "DC", GeoPoint::new(49.84, 24.03))
            .with_stock("1", 5).with_stock("2", 5)
            .with_shipping_cost_per_km(2.5).with_processing_time_hours(30.0);
        let config = ScoringConfig::default();
        let s = evaluate(&order(), &c, &config);

        assert!((s.shipping_cost - s.distance_km * 2.5).abs() < 1e-9);
        assert_eq!(s.estimated_delivery_days, 2 + (s.distance_km / 300.0).ceil() as u32);
        let expected = -config.weights.distance * s.distance_km
            - config.weights.cost * s.shipping_cost
            - config.weights.delivery * f64::from(s.estimated_delivery_days)
            + config.weights.complete;
        assert!((s.score - expected).abs() < 1e-9);
        assert_eq!(s.score, s.breakdown.total());
    }

    #[test]
    fn test_express_store_bonus() {
        let store = FulfillmentCandidate::store("S1", "Podil", GeoPoint::new(50.46, 30.52)).with_stock("1", 2).with_stock("2", 1);
        let express = FulfillmentOrder { priority: crate::domain::value_objects::Priority::Express, ..order() };

        let std_score = evaluate(&order(), &store, &ScoringConfig::default());
        let exp_score = evaluate(&express, &store, &ScoringConfig::default());
        assert_eq!(std_score.breakdown.express_store, 0.0);
        assert_eq!(exp_score.breakdown.express_store, ScoringConfig::default().weights.express_store);
        assert!(exp_score.reason.starts_with("express ship-from-store"));

        let warehouse = FulfillmentCandidate { kind: CandidateKind::Warehouse, ..store };
        assert_eq!(evaluate(&express, &warehouse, &ScoringConfig::default()).breakdown.express_store, 0.0);
    }

    #[test]
    fn test_reason_names_dominant_penalty() {
        let far = FulfillmentCandidate::warehouse("W1", "Lviv DC", GeoPoint::new(49.84, 24.03)).with_stock("1", 9).with_stock("2", 9);
        assert!(evaluate(&order(), &far, &ScoringConfig::default()).reason.contains("distance dominates"));

        let pricey = far.clone().with_shipping_cost_per_km(10.0);
        assert!(evaluate(&order(), &pricey, &ScoringConfig::default()).reason.contains("shipping cost dominates"));

        let on_site = FulfillmentCandidate::store("S1", "Centre", KYIV).with_stock("1", 9).with_stock("2", 9);
        assert_eq!(evaluate(&order(), &on_site, &ScoringConfig::default()).reason, "full stock, no route penalty");

        let slow = on_site.with_processing_time_hours(48.0);
        assert_eq!(evaluate(&order(), &slow, &ScoringConfig::default()).reason, "full stock, delivery time dominates (2 days)");
    }
}
