use super::EligibilityRule;
use crate::models::{EligibilityInput, SchemeCode};

/// Storage risk already assessed as HIGH or CRITICAL.
pub struct HighRiskRule;

impl EligibilityRule for HighRiskRule {
    fn id(&self) -> &'static str {
        "high_risk"
    }

    fn label(&self) -> Option<&'static str> {
        Some("High or critical storage risk")
    }

    fn is_met(&self, input: &EligibilityInput) -> bool {
        input.is_high_risk()
    }

    fn suggestions(&self) -> &'static [(SchemeCode, &'static str)] {
        &[
            (
                SchemeCode::Aif,
                "Your storage risk is high/critical, so infrastructure support may be relevant.",
            ),
            (
                SchemeCode::PmksySampada,
                "High post-harvest risk can align with cold-chain and post-harvest support.",
            ),
            (
                SchemeCode::StatePostHarvest,
                "State programs often prioritize high post-harvest risk conditions.",
            ),
        ]
    }
}
