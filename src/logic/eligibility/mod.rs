pub mod engine;
pub mod heat_stress;
pub mod high_risk;
pub mod long_storage;
pub mod perishable;
pub mod regional_moisture;
pub mod small_farmer;

pub use engine::EligibilityEngine;

use crate::models::{EligibilityInput, EligibilityResult, FieldMap, SchemeCode};

/// Trait for support-scheme eligibility conditions
pub trait EligibilityRule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Label shown in the checks list; `None` keeps the rule out of the list
    fn label(&self) -> Option<&'static str>;

    /// Whether the farmer profile meets this condition
    fn is_met(&self, input: &EligibilityInput) -> bool;

    /// Schemes suggested when the condition holds, each with its reason
    fn suggestions(&self) -> &'static [(SchemeCode, &'static str)];
}

/// Evaluate a loose payload against every eligibility rule.
pub fn evaluate_eligibility(fields: &FieldMap) -> EligibilityResult {
    EligibilityEngine::new().evaluate(&EligibilityInput::from_fields(fields))
}
