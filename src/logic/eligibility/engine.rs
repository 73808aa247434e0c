use super::{
    heat_stress::HeatStressRule, high_risk::HighRiskRule, long_storage::LongStorageRule,
    perishable::PerishableCropRule, regional_moisture::RegionalMoistureRule,
    small_farmer::SmallFarmerRule, EligibilityRule,
};
use crate::data::schemes::{self, DISCLAIMER, RECOMMENDED_ACTIONS};
use crate::models::{
    EligibilityCheck, EligibilityInput, EligibilityResult, InputSummary, SchemeCode,
    SchemeRecommendation,
};

/// Suggested when no rule matched, so the output is never empty.
const FALLBACK_SUGGESTIONS: &[(SchemeCode, &str)] = &[
    (
        SchemeCode::StatePostHarvest,
        "Use state agriculture portals to identify active local support programs.",
    ),
    (
        SchemeCode::Pmfby,
        "Insurance verification is recommended for seasonal risk management.",
    ),
];

/// Reasons accumulated per scheme code, in first-insertion order.
#[derive(Debug, Default)]
struct SchemeLedger {
    entries: Vec<(SchemeCode, Vec<String>)>,
}

impl SchemeLedger {
    fn add(&mut self, code: SchemeCode, reason: &str) {
        match self.entries.iter_mut().find(|(c, _)| *c == code) {
            Some((_, reasons)) => reasons.push(reason.to_string()),
            None => self.entries.push((code, vec![reason.to_string()])),
        }
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn into_recommendations(self) -> Vec<SchemeRecommendation> {
        self.entries
            .into_iter()
            .map(|(code, reasons)| SchemeRecommendation::from_scheme(schemes::scheme(code), reasons))
            .collect()
    }
}

pub struct EligibilityEngine {
    rules: Vec<Box<dyn EligibilityRule>>,
}

impl EligibilityEngine {
    pub fn new() -> Self {
        let rules: Vec<Box<dyn EligibilityRule>> = vec![
            Box::new(HighRiskRule),
            Box::new(PerishableCropRule),
            Box::new(RegionalMoistureRule),
            Box::new(HeatStressRule),
            Box::new(LongStorageRule),
            Box::new(SmallFarmerRule),
        ];

        Self { rules }
    }

    pub fn evaluate(&self, input: &EligibilityInput) -> EligibilityResult {
        let mut ledger = SchemeLedger::default();
        let mut checks = Vec::new();

        for rule in &self.rules {
            let met = rule.is_met(input);
            if let Some(label) = rule.label() {
                checks.push(EligibilityCheck {
                    label: label.to_string(),
                    met,
                });
            }
            if met {
                for (code, reason) in rule.suggestions() {
                    ledger.add(*code, reason);
                }
            }
        }

        if ledger.is_empty() {
            tracing::debug!("No eligibility rule matched, suggesting fallback schemes");
            for (code, reason) in FALLBACK_SUGGESTIONS {
                ledger.add(*code, reason);
            }
        }

        EligibilityResult {
            input_summary: InputSummary::from_input(input),
            checks,
            possible_schemes: ledger.into_recommendations(),
            recommended_actions: RECOMMENDED_ACTIONS.iter().map(|s| s.to_string()).collect(),
            disclaimer: DISCLAIMER.to_string(),
        }
    }

    pub fn list_rules(&self) -> Vec<(&'static str, Option<&'static str>)> {
        self.rules.iter().map(|r| (r.id(), r.label())).collect()
    }
}

impl Default for EligibilityEngine {
    fn default() -> Self {
        Self::new()
    }
}
