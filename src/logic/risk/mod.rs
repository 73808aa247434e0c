pub mod engine;
pub mod rice;
pub mod storage;

pub use engine::RiskEngine;

use crate::models::{FieldMap, RiskInput, RiskResult};

/// Trait for storage risk scoring paths
pub trait RiskScorer: Send + Sync {
    /// Unique identifier for this scorer
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Whether this scorer handles the given lowercase crop key
    fn applies_to(&self, crop_key: &str) -> bool;

    /// Score the input. Never fails; degraded inputs yield a degraded result.
    fn score(&self, input: &RiskInput) -> RiskResult;
}

/// Score a loose payload, dispatching on crop identity.
pub fn compute_risk(fields: &FieldMap) -> RiskResult {
    RiskEngine::new().evaluate(&RiskInput::from_fields(fields))
}
