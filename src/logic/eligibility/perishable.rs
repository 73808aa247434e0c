use super::EligibilityRule;
use crate::data::schemes::PERISHABLE_CROPS;
use crate::models::{EligibilityInput, SchemeCode};

/// Short shelf-life crop profile.
pub struct PerishableCropRule;

impl EligibilityRule for PerishableCropRule {
    fn id(&self) -> &'static str {
        "perishable_crop"
    }

    fn label(&self) -> Option<&'static str> {
        Some("Perishable / short shelf-life crop profile")
    }

    fn is_met(&self, input: &EligibilityInput) -> bool {
        PERISHABLE_CROPS.contains(&input.crop.trim())
    }

    fn suggestions(&self) -> &'static [(SchemeCode, &'static str)] {
        &[
            (
                SchemeCode::PmksySampada,
                "Perishable crops may benefit from cold-chain/post-harvest interventions.",
            ),
            (
                SchemeCode::Midh,
                "Horticulture and perishable crop support may apply for storage and handling.",
            ),
            (
                SchemeCode::Aif,
                "Cold-storage/warehouse financing may be relevant for perishables.",
            ),
        ]
    }
}
