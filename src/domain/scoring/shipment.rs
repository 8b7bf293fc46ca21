//! Shipment planning on top of candidate scoring: single source when possible,
//! otherwise split across sources, with whatever cannot be allocated backordered.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::info;

use crate::config::{ScoringConfig, SplitConfig};
use crate::domain::aggregates::{FulfillmentCandidate, FulfillmentOrder, OrderLineRequest};
use crate::domain::value_objects::CandidateKind;
use crate::{FulfillmentError, Result};
use super::evaluator::{evaluate, ScoredCandidate};
use super::selector::ranking_order;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStrategy {
    /// Fewest delivery days.
    Fastest,
    /// Lowest shipping cost.
    Cheapest,
    /// Highest composite score.
    #[default]
    Balanced,
}

impl ShipmentStrategy {
    pub const ALL: [ShipmentStrategy; 3] = [Self::Fastest, Self::Cheapest, Self::Balanced];

    fn compare(self, a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
        let primary = match self {
            Self::Fastest => a.estimated_delivery_days.cmp(&b.estimated_delivery_days),
            Self::Cheapest => a.shipping_cost.total_cmp(&b.shipping_cost),
            Self::Balanced => Ordering::Equal,
        };
        primary.then_with(|| ranking_order(a, b))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlannedShipment {
    pub candidate_id: String,
    pub candidate_name: String,
    pub kind: CandidateKind,
    pub lines: Vec<OrderLineRequest>,
    pub shipping_cost: f64,
    pub estimated_delivery_days: u32,
    /// 1-based dispatch order within the plan.
    pub sequence: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShipmentPlan {
    pub strategy: ShipmentStrategy,
    pub shipments: Vec<PlannedShipment>,
    pub total_cost: f64,
    /// Days until the last shipment lands.
    pub estimated_days: u32,
    pub is_split: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_reason: Option<String>,
    /// Quantities no source could allocate.
    pub backordered: Vec<OrderLineRequest>,
}

impl ShipmentPlan {
    pub fn is_complete(&self) -> bool { self.backordered.is_empty() }
}

/// First candidate, by id, able to ship the whole order on its own.
pub fn can_ship_from_single<'a>(order: &FulfillmentOrder, candidates: &'a [FulfillmentCandidate]) -> Option<&'a str> {
    candidates
        .iter()
        .filter(|c| c.covers_all(&order.lines))
        .map(|c| c.id.as_str())
        .min()
}

#[tracing::instrument(skip_all, fields(order_id = ?order.id, strategy = ?strategy, candidates = candidates.len()))]
pub fn plan_shipment(
    order: &FulfillmentOrder,
    candidates: &[FulfillmentCandidate],
    strategy: ShipmentStrategy,
    split: &SplitConfig,
    scoring: &ScoringConfig,
) -> Result<ShipmentPlan> {
    if candidates.is_empty() {
        return Err(FulfillmentError::NoCandidates);
    }

    let mut ranked: Vec<(ScoredCandidate, &FulfillmentCandidate)> =
        candidates.iter().map(|c| (evaluate(order, c, scoring), c)).collect();
    ranked.sort_by(|(a, _), (b, _)| strategy.compare(a, b));

    if let Some((scored, _)) = ranked.iter().find(|(s, _)| s.has_all_items) {
        info!(candidate_id = %scored.candidate_id, "single-source shipment planned");
        let shipment = shipment_from(scored, order.lines.clone(), 1);
        return Ok(ShipmentPlan {
            strategy,
            total_cost: shipment.shipping_cost,
            estimated_days: shipment.estimated_delivery_days,
            shipments: vec![shipment],
            is_split: false,
            split_reason: None,
            backordered: vec![],
        });
    }

    let (max_shipments, min_lines) = if split.allow_split {
        (split.max_shipments, split.min_lines_per_shipment.max(1))
    } else {
        (1, 1)
    };
    let (shipments, backordered) = allocate(order, &ranked, max_shipments, min_lines);

    let mut total_cost: f64 = shipments.iter().map(|s| s.shipping_cost).sum();
    if shipments.len() > 1 && split.combined_shipping_discount_percent > 0.0 {
        total_cost -= total_cost * split.combined_shipping_discount_percent / 100.0;
    }
    let estimated_days = shipments.iter().map(|s| s.estimated_delivery_days).max().unwrap_or(0);
    let is_split = shipments.len() > 1;
    let split_reason = if !backordered.is_empty() {
        Some("Partial fulfillment - some items backordered".to_string())
    } else if is_split {
        Some("Items not available from a single source".to_string())
    } else {
        None
    };

    info!(shipments = shipments.len(), backordered = backordered.len(), total_cost, "multi-source shipment planned");
    Ok(ShipmentPlan { strategy, shipments, total_cost, estimated_days, is_split, split_reason, backordered })
}

/// One plan per strategy, in [`ShipmentStrategy::ALL`] order.
pub fn shipment_options(
    order: &FulfillmentOrder,
    candidates: &[FulfillmentCandidate],
    split: &SplitConfig,
    scoring: &ScoringConfig,
) -> Result<Vec<ShipmentPlan>> {
    ShipmentStrategy::ALL
        .iter()
        .map(|strategy| plan_shipment(order, candidates, *strategy, split, scoring))
        .collect()
}

fn shipment_from(scored: &ScoredCandidate, lines: Vec<OrderLineRequest>, sequence: usize) -> PlannedShipment {
    PlannedShipment {
        candidate_id: scored.candidate_id.clone(),
        candidate_name: scored.candidate_name.clone(),
        kind: scored.kind,
        lines,
        shipping_cost: scored.shipping_cost,
        estimated_delivery_days: scored.estimated_delivery_days,
        sequence,
    }
}

/// Greedy allocation over sources in ranked order. A source's draw is only committed
/// when it yields at least `min_lines` lines.
fn allocate(
    order: &FulfillmentOrder,
    ranked: &[(ScoredCandidate, &FulfillmentCandidate)],
    max_shipments: usize,
    min_lines: usize,
) -> (Vec<PlannedShipment>, Vec<OrderLineRequest>) {
    let mut remaining: Vec<u32> = order.lines.iter().map(|l| l.quantity).collect();
    let mut shipments = Vec::new();

    for (scored, candidate) in ranked {
        if shipments.len() >= max_shipments || remaining.iter().all(|r| *r == 0) {
            break;
        }

        let mut drawn: HashMap<&str, u32> = HashMap::new();
        let mut picks: Vec<(usize, u32)> = Vec::new();
        for (idx, line) in order.lines.iter().enumerate() {
            if remaining[idx] == 0 { continue; }
            let taken = drawn.entry(line.product_id.as_str()).or_insert(0);
            let qty = candidate.available(&line.product_id).saturating_sub(*taken).min(remaining[idx]);
            if qty == 0 { continue; }
            *taken += qty;
            picks.push((idx, qty));
        }

        if picks.is_empty() || picks.len() < min_lines {
            continue;
        }
        let lines = picks
            .into_iter()
            .map(|(idx, qty)| {
                remaining[idx] -= qty;
                order.lines[idx].with_quantity(qty)
            })
            .collect();
        shipments.push(shipment_from(scored, lines, shipments.len() + 1));
    }

    let backordered = order
        .lines
        .iter()
        .zip(remaining)
        .filter(|(_, r)| *r > 0)
        .map(|(line, r)| line.with_quantity(r))
        .collect();
    (shipments, backordered)
}
