use super::{rice::RiceScorer, storage::StorageScorer, RiskScorer};
use crate::models::{RiskInput, RiskResult};

/// Ordered scorers; the first one that claims the crop wins.
pub struct RiskEngine {
    scorers: Vec<Box<dyn RiskScorer>>,
}

impl RiskEngine {
    pub fn new() -> Self {
        let scorers: Vec<Box<dyn RiskScorer>> = vec![Box::new(RiceScorer), Box::new(StorageScorer)];

        Self { scorers }
    }

    pub fn evaluate(&self, input: &RiskInput) -> RiskResult {
        let crop_key = input.crop_key();
        match self.scorers.iter().find(|s| s.applies_to(&crop_key)) {
            Some(scorer) => {
                tracing::debug!("Scoring '{}' with {}", crop_key, scorer.id());
                scorer.score(input)
            }
            None => StorageScorer.score(input),
        }
    }

    pub fn evaluate_with(&self, scorer_id: &str, input: &RiskInput) -> Option<RiskResult> {
        self.scorers
            .iter()
            .find(|s| s.id() == scorer_id)
            .map(|scorer| scorer.score(input))
    }

    pub fn list_scorers(&self) -> Vec<(&'static str, &'static str)> {
        self.scorers.iter().map(|s| (s.id(), s.name())).collect()
    }
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::risk::compute_risk;
    use crate::models::{Region, RiskLevel};
    use serde_json::json;

    fn input(crop: &str) -> RiskInput {
        RiskInput::new(crop, Region::East, 29.0, 78.0, "Monsoon", 60)
    }

    #[test]
    fn rice_and_paddy_take_the_rice_path() {
        let engine = RiskEngine::new();
        let rice = engine.evaluate(&input("rice"));
        let paddy = engine.evaluate(&input("Paddy"));
        let typo = engine.evaluate(&input("rise"));
        assert!(rice.is_rice());
        assert_eq!(rice, paddy);
        assert_eq!(rice, typo);
    }

    #[test]
    fn other_crops_take_the_storage_path() {
        let engine = RiskEngine::new();
        for crop in ["wheat", "banana", "xyz", ""] {
            assert!(!engine.evaluate(&input(crop)).is_rice(), "{}", crop);
        }
    }

    #[test]
    fn evaluate_with_forces_a_path() {
        let engine = RiskEngine::new();
        let forced = engine.evaluate_with("storage_threshold", &input("paddy"));
        assert!(matches!(forced, Some(RiskResult::Storage(_))));
        assert!(engine.evaluate_with("missing", &input("paddy")).is_none());
    }

    #[test]
    fn list_scorers_in_dispatch_order() {
        let ids: Vec<_> = RiskEngine::new()
            .list_scorers()
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(ids, vec!["rice_paddy", "storage_threshold"]);
    }

    #[test]
    fn compute_risk_is_idempotent() {
        let fields = json!({
            "crop_type": "onion",
            "region": "West",
            "temperature": 38,
            "humidity": "72",
            "season": "Summer",
            "storage_days": 200
        });
        let fields = fields.as_object().unwrap();
        let first = serde_json::to_string(&compute_risk(fields)).unwrap();
        let second = serde_json::to_string(&compute_risk(fields)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn compute_risk_on_empty_payload() {
        let result = compute_risk(&crate::models::FieldMap::new());
        match result {
            RiskResult::Storage(risk) => {
                assert!((0.0..=100.0).contains(&risk.risk_score));
                assert_eq!(risk.details.safe_days, 90);
                assert!(matches!(
                    risk.risk_level,
                    RiskLevel::Safe | RiskLevel::Moderate | RiskLevel::High | RiskLevel::Critical
                ));
            }
            RiskResult::Rice(_) => panic!("empty crop must not take the rice path"),
        }
    }
}
