use super::EligibilityRule;
use crate::models::{EligibilityInput, SchemeCode};

const LONG_STORAGE_DAYS: i64 = 90;

/// Stock held for more than 90 days. Not part of the labelled checks.
pub struct LongStorageRule;

impl EligibilityRule for LongStorageRule {
    fn id(&self) -> &'static str {
        "long_storage"
    }

    fn label(&self) -> Option<&'static str> {
        None
    }

    fn is_met(&self, input: &EligibilityInput) -> bool {
        input.storage_days > LONG_STORAGE_DAYS
    }

    fn suggestions(&self) -> &'static [(SchemeCode, &'static str)] {
        &[
            (
                SchemeCode::Aif,
                "Long storage duration may require better storage infrastructure.",
            ),
            (
                SchemeCode::PmksySampada,
                "Longer storage windows can benefit from post-harvest management support.",
            ),
        ]
    }
}
