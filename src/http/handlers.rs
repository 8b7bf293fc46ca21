//! Route handlers. Each one validates its body, resolves candidates from the shared
//! network and hands off to the pure scoring functions.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use validator::Validate;

use crate::domain::scoring::{self, ScoredCandidate, ShipmentPlan, ZoneStat};
use super::dto::{
    ClassifyZonesRequest, Envelope, EvaluateRequest, PlanShipmentRequest, SelectSourceRequest, SelectSourceResponse,
    ShipmentOptionsResponse,
};
use super::error::AppResult;
use super::state::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "opensase-fulfillment",
        "candidates": state.candidates.len(),
    }))
}

pub async fn select_source(
    State(state): State<AppState>,
    payload: Result<Json<SelectSourceRequest>, JsonRejection>,
) -> AppResult<Json<SelectSourceResponse>> {
    let Json(req) = payload?;
    req.validate()?;
    let candidates = state.resolve_candidates(req.candidate_ids.as_deref())?;
    let selection = scoring::select_source(&req.order, &candidates, &state.config.scoring)?;
    Ok(Json(Envelope::new(selection)))
}

pub async fn evaluate_candidate(
    State(state): State<AppState>,
    payload: Result<Json<EvaluateRequest>, JsonRejection>,
) -> AppResult<Json<ScoredCandidate>> {
    let Json(req) = payload?;
    req.validate()?;
    Ok(Json(scoring::evaluate(&req.order, &req.candidate, &state.config.scoring)))
}

pub async fn plan_shipment(
    State(state): State<AppState>,
    payload: Result<Json<PlanShipmentRequest>, JsonRejection>,
) -> AppResult<Json<Envelope<ShipmentPlan>>> {
    let Json(req) = payload?;
    req.validate()?;
    let candidates = state.resolve_candidates(req.candidate_ids.as_deref())?;
    let plan = scoring::plan_shipment(&req.order, &candidates, req.strategy, &state.config.split, &state.config.scoring)?;
    Ok(Json(Envelope::new(plan)))
}

pub async fn shipment_options(
    State(state): State<AppState>,
    payload: Result<Json<SelectSourceRequest>, JsonRejection>,
) -> AppResult<Json<Envelope<ShipmentOptionsResponse>>> {
    let Json(req) = payload?;
    req.validate()?;
    let candidates = state.resolve_candidates(req.candidate_ids.as_deref())?;
    let options = scoring::shipment_options(&req.order, &candidates, &state.config.split, &state.config.scoring)?;
    let single_source = scoring::can_ship_from_single(&req.order, &candidates).map(str::to_string);
    Ok(Json(Envelope::new(ShipmentOptionsResponse { options, single_source })))
}

pub async fn classify_zones(
    State(state): State<AppState>,
    payload: Result<Json<ClassifyZonesRequest>, JsonRejection>,
) -> AppResult<Json<Vec<ZoneStat>>> {
    let Json(req) = payload?;
    req.validate()?;
    Ok(Json(scoring::classify_zones(&req.products, &state.config.zones)))
}
