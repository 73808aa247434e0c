use super::EligibilityRule;
use crate::data::schemes::{FLOOD_PRONE_STATES, HIGH_HUMIDITY_REGIONS};
use crate::models::{EligibilityInput, SchemeCode};

/// Humid region or flood-prone state.
pub struct RegionalMoistureRule;

impl EligibilityRule for RegionalMoistureRule {
    fn id(&self) -> &'static str {
        "regional_moisture"
    }

    fn label(&self) -> Option<&'static str> {
        Some("Humidity/flood-related regional stress")
    }

    fn is_met(&self, input: &EligibilityInput) -> bool {
        HIGH_HUMIDITY_REGIONS.contains(&input.region.as_str())
            || FLOOD_PRONE_STATES.contains(&input.state_key().as_str())
    }

    fn suggestions(&self) -> &'static [(SchemeCode, &'static str)] {
        &[
            (
                SchemeCode::Pmfby,
                "Flood/humidity-prone conditions increase loss risk and insurance relevance.",
            ),
            (
                SchemeCode::Aif,
                "Improved storage infrastructure can reduce moisture-related damage.",
            ),
            (
                SchemeCode::StatePostHarvest,
                "State schemes may provide local resilience support.",
            ),
        ]
    }
}
