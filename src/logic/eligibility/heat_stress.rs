use super::EligibilityRule;
use crate::data::schemes::{HEAT_PRONE_STATES, HEAT_STRESS_REGIONS};
use crate::models::{EligibilityInput, SchemeCode};

/// Hot region or heat-prone state.
pub struct HeatStressRule;

impl EligibilityRule for HeatStressRule {
    fn id(&self) -> &'static str {
        "heat_stress"
    }

    fn label(&self) -> Option<&'static str> {
        Some("Heat stress regional condition")
    }

    fn is_met(&self, input: &EligibilityInput) -> bool {
        HEAT_STRESS_REGIONS.contains(&input.region.as_str())
            || HEAT_PRONE_STATES.contains(&input.state_key().as_str())
    }

    fn suggestions(&self) -> &'static [(SchemeCode, &'static str)] {
        &[
            (
                SchemeCode::Pmfby,
                "Heat stress can raise crop and storage loss exposure.",
            ),
            (
                SchemeCode::StatePostHarvest,
                "State-level support may exist for heat-stress mitigation and storage.",
            ),
        ]
    }
}
