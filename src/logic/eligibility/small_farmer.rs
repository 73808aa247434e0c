use super::EligibilityRule;
use crate::models::{EligibilityInput, SchemeCode};

/// Small or marginal farmer, by declared category or landholding of 2.0 or less.
pub struct SmallFarmerRule;

impl EligibilityRule for SmallFarmerRule {
    fn id(&self) -> &'static str {
        "small_marginal_farmer"
    }

    fn label(&self) -> Option<&'static str> {
        Some("Small & marginal farmer priority")
    }

    fn is_met(&self, input: &EligibilityInput) -> bool {
        input.is_small_or_marginal()
    }

    fn suggestions(&self) -> &'static [(SchemeCode, &'static str)] {
        &[
            (
                SchemeCode::Pmfby,
                "Small/marginal farmers are often a priority in support outreach.",
            ),
            (
                SchemeCode::Midh,
                "Farmer category may align with subsidy-oriented horticulture support.",
            ),
            (
                SchemeCode::Aif,
                "Farmer collectives and eligible categories can access infrastructure support pathways.",
            ),
        ]
    }
}
