//! Source selection: rank every candidate and recommend the best.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::info;

use crate::config::ScoringConfig;
use crate::domain::aggregates::{FulfillmentCandidate, FulfillmentOrder};
use crate::{FulfillmentError, Result};
use super::evaluator::{evaluate, ScoredCandidate};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourceSelection {
    pub recommended: ScoredCandidate,
    /// Runners-up, best first, capped at `ScoringConfig::max_alternatives`.
    pub alternatives: Vec<ScoredCandidate>,
}

/// Total order used for every ranking: score descending, then distance ascending,
/// then candidate id.
pub fn ranking_order(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.distance_km.total_cmp(&b.distance_km))
        .then_with(|| a.candidate_id.cmp(&b.candidate_id))
}

/// Evaluates and sorts all candidates, best first.
pub fn rank_candidates(order: &FulfillmentOrder, candidates: &[FulfillmentCandidate], config: &ScoringConfig) -> Vec<ScoredCandidate> {
    let mut scored: Vec<ScoredCandidate> = candidates.iter().map(|c| evaluate(order, c, config)).collect();
    scored.sort_by(ranking_order);
    scored
}

#[tracing::instrument(skip_all, fields(order_id = ?order.id, candidates = candidates.len()))]
pub fn select_source(order: &FulfillmentOrder, candidates: &[FulfillmentCandidate], config: &ScoringConfig) -> Result<SourceSelection> {
    let mut ranked = rank_candidates(order, candidates, config).into_iter();
    let recommended = ranked.next().ok_or(FulfillmentError::NoCandidates)?;
    let alternatives: Vec<ScoredCandidate> = ranked.take(config.max_alternatives).collect();

    info!(
        candidate_id = %recommended.candidate_id,
        score = recommended.score,
        has_all_items = recommended.has_all_items,
        alternatives = alternatives.len(),
        "fulfillment source selected"
    );
    Ok(SourceSelection { recommended, alternatives })
}
