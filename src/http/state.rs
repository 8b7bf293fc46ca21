//! Shared application state.

use anyhow::{Context, Result};
use std::borrow::Cow;
use std::path::Path;
use std::sync::Arc;
use validator::Validate;

use crate::config::AppConfig;
use crate::domain::aggregates::FulfillmentCandidate;
use super::error::{AppError, AppResult};

/// Immutable snapshot shared by every handler. Nothing in here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub candidates: Arc<Vec<FulfillmentCandidate>>,
}

impl AppState {
    pub fn new(config: AppConfig, candidates: Vec<FulfillmentCandidate>) -> Self {
        Self { config: Arc::new(config), candidates: Arc::new(candidates) }
    }

    /// Loads the candidate network named by the config, or starts with an empty one.
    pub fn load(config: AppConfig) -> Result<Self> {
        let candidates = match &config.candidates_path {
            Some(path) => load_candidates(path)?,
            None => {
                tracing::warn!("FULFILLMENT_CANDIDATES_PATH not set, serving an empty candidate network");
                Vec::new()
            }
        };
        Ok(Self::new(config, candidates))
    }

    /// The whole network, or only the listed ids in the order given.
    pub fn resolve_candidates(&self, ids: Option<&[String]>) -> AppResult<Cow<'_, [FulfillmentCandidate]>> {
        let Some(ids) = ids else {
            return Ok(Cow::Borrowed(self.candidates.as_slice()));
        };
        ids.iter()
            .map(|id| {
                self.candidates
                    .iter()
                    .find(|c| &c.id == id)
                    .cloned()
                    .ok_or_else(|| AppError::NotFound(format!("Candidate {} not found", id)))
            })
            .collect::<AppResult<Vec<_>>>()
            .map(Cow::Owned)
    }
}

pub fn load_candidates(path: &Path) -> Result<Vec<FulfillmentCandidate>> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading candidate network {}", path.display()))?;
    let candidates: Vec<FulfillmentCandidate> =
        serde_json::from_str(&raw).with_context(|| format!("parsing candidate network {}", path.display()))?;
    for candidate in &candidates {
        candidate.validate().with_context(|| format!("candidate {:?} is invalid", candidate.id))?;
    }
    tracing::info!(path = %path.display(), candidates = candidates.len(), "candidate network loaded");
    Ok(candidates)
}
