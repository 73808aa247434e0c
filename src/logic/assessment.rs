use super::eligibility::{evaluate_eligibility, EligibilityEngine};
use super::risk::{compute_risk, RiskEngine};
use crate::models::{fields, EligibilityInput, EligibilityResult, FieldMap, RiskInput, RiskResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Risk score plus the support schemes it points to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub risk: RiskResult,
    pub eligibility: EligibilityResult,
}

/// Score storage risk, then feed the resulting level into the eligibility rules.
pub fn assess(fields: &FieldMap) -> Assessment {
    let risk = RiskEngine::new().evaluate(&RiskInput::from_fields(fields));

    let mut payload = fields.clone();
    payload.insert(
        "risk_level".to_string(),
        Value::String(risk.level_label().to_string()),
    );
    let eligibility = EligibilityEngine::new().evaluate(&EligibilityInput::from_fields(&payload));

    Assessment { risk, eligibility }
}

/// Eligibility for a payload that may or may not already carry a risk level.
pub fn eligibility_for(fields: &FieldMap) -> EligibilityResult {
    if fields::text(fields, "risk_level").is_some() {
        return evaluate_eligibility(fields);
    }

    let risk = compute_risk(fields);
    tracing::debug!(
        "No risk level supplied, computed {} ({})",
        risk.level_label(),
        risk.score()
    );

    let mut payload = fields.clone();
    payload.insert(
        "risk_level".to_string(),
        Value::String(risk.level_label().to_string()),
    );
    evaluate_eligibility(&payload)
}
