use super::RiskScorer;
use crate::logic::calculations::{clamp_percent, round_one_decimal};
use crate::models::{RiceRisk, RiceRiskDetails, RiceRiskLevel, RiskInput, RiskResult};

const HUMIDITY_WEIGHT: f64 = 0.5;
const TEMPERATURE_WEIGHT: f64 = 0.3;
const DURATION_WEIGHT: f64 = 0.2;

/// Weighted rice/paddy scorer.
///
/// Independent of the crop threshold table: banded factor scores are combined
/// with fixed weights (humidity 0.5, temperature 0.3, duration 0.2) and scaled
/// by a rainfall multiplier.
///
/// Levels: Low ≤30, Medium ≤60, High above.
pub struct RiceScorer;

impl RiskScorer for RiceScorer {
    fn id(&self) -> &'static str {
        "rice_paddy"
    }

    fn name(&self) -> &'static str {
        "Rice/Paddy Weighted Risk"
    }

    fn applies_to(&self, crop_key: &str) -> bool {
        matches!(crop_key, "rice" | "paddy")
    }

    fn score(&self, input: &RiskInput) -> RiskResult {
        let (temp, rh) = input.readings();
        let days = input.storage_days;

        let (hum_score, hum_label) = humidity_band(rh);
        let (temp_score, temp_label) = temperature_band(temp);
        let (days_score, days_label) = duration_band(days);
        let (season_mul, season_label) = season_multiplier(&input.season);

        let combined = (hum_score * HUMIDITY_WEIGHT
            + temp_score * TEMPERATURE_WEIGHT
            + days_score * DURATION_WEIGHT)
            * season_mul;
        let risk_percentage = clamp_percent(round_one_decimal(combined));
        let risk_level = RiceRiskLevel::from_percentage(risk_percentage);

        RiskResult::Rice(RiceRisk {
            risk_percentage,
            risk_level,
            explanation: format!(
                "{}. {}. {}. {}.",
                hum_label, temp_label, days_label, season_label
            ),
            recommendation: recommendation(risk_level).to_string(),
            details: RiceRiskDetails {
                humidity: rh,
                temperature: temp,
                storage_days: days,
                season: input.season.clone(),
            },
        })
    }
}

// Readings that fall between the labelled bands (65 < rh < 66, 25 < t < 26)
// score in the top band.
fn humidity_band(rh: f64) -> (f64, &'static str) {
    if rh <= 65.0 {
        (0.0, "Safe humidity (≤65%)")
    } else if (66.0..=75.0).contains(&rh) {
        (50.0, "Moderate humidity (66–75%)")
    } else {
        (100.0, "High humidity (>75%), fungal/mold risk")
    }
}

fn temperature_band(temp: f64) -> (f64, &'static str) {
    if temp <= 25.0 {
        (0.0, "Safe temperature (≤25°C)")
    } else if (26.0..=32.0).contains(&temp) {
        (40.0, "Moderate temperature (26–32°C)")
    } else {
        (80.0, "High temperature (>32°C), spoilage/insects")
    }
}

fn duration_band(days: i64) -> (f64, &'static str) {
    if days <= 30 {
        (0.0, "Short storage (≤30 days)")
    } else if days <= 90 {
        (40.0, "Medium storage (31–90 days)")
    } else {
        (80.0, "Long storage (>90 days), quality loss")
    }
}

fn season_multiplier(season: &str) -> (f64, &'static str) {
    let s = season.to_lowercase();
    if s.contains("monsoon") || s.contains("heavy") {
        (1.15, "Monsoon/Heavy rainfall, high impact")
    } else if s.contains("moderate") || s.contains("rain") {
        (1.05, "Moderate rainfall, medium impact")
    } else {
        (0.95, "Dry/Winter, low impact")
    }
}

fn recommendation(level: RiceRiskLevel) -> &'static str {
    match level {
        RiceRiskLevel::Low => "Store as usual; monitor regularly.",
        RiceRiskLevel::Medium => "Monitor closely; consider selling part or improve storage.",
        RiceRiskLevel::High => "Sell now or move to controlled storage immediately.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Region;

    fn score(temp: f64, rh: f64, season: &str, days: i64) -> RiceRisk {
        let input = RiskInput::new("rice", Region::North, temp, rh, season, days);
        match RiceScorer.score(&input) {
            RiskResult::Rice(risk) => risk,
            RiskResult::Storage(_) => panic!("rice scorer returned the storage shape"),
        }
    }

    #[test]
    fn worst_case_monsoon_is_clamped() {
        // (100*0.5 + 80*0.3 + 80*0.2) * 1.15 = 103.5
        let risk = score(33.0, 80.0, "Monsoon rains", 100);
        assert_eq!(risk.risk_percentage, 100.0);
        assert_eq!(risk.risk_level, RiceRiskLevel::High);
        assert_eq!(
            risk.recommendation,
            "Sell now or move to controlled storage immediately."
        );
    }

    #[test]
    fn dry_short_storage_is_low() {
        let risk = score(22.0, 60.0, "Winter", 20);
        assert_eq!(risk.risk_percentage, 0.0);
        assert_eq!(risk.risk_level, RiceRiskLevel::Low);
    }

    #[test]
    fn moderate_bands_give_medium() {
        // (50*0.5 + 40*0.3 + 40*0.2) * 1.05 = 47.25
        let risk = score(28.0, 70.0, "Moderate rain", 60);
        assert!((risk.risk_percentage - 47.25).abs() <= 0.06);
        assert_eq!(risk.risk_level, RiceRiskLevel::Medium);
    }

    #[test]
    fn band_edges() {
        assert_eq!(humidity_band(65.0).0, 0.0);
        assert_eq!(humidity_band(65.5).0, 100.0);
        assert_eq!(humidity_band(66.0).0, 50.0);
        assert_eq!(humidity_band(75.0).0, 50.0);
        assert_eq!(humidity_band(75.1).0, 100.0);
        assert_eq!(temperature_band(25.0).0, 0.0);
        assert_eq!(temperature_band(25.5).0, 80.0);
        assert_eq!(temperature_band(26.0).0, 40.0);
        assert_eq!(temperature_band(32.0).0, 40.0);
        assert_eq!(temperature_band(32.5).0, 80.0);
        assert_eq!(duration_band(30).0, 0.0);
        assert_eq!(duration_band(31).0, 40.0);
        assert_eq!(duration_band(90).0, 40.0);
        assert_eq!(duration_band(91).0, 80.0);
    }

    #[test]
    fn humidity_between_bands_scores_high() {
        // 100*0.5 * 0.95
        let risk = score(20.0, 65.5, "Winter", 10);
        assert_eq!(
            (risk.risk_percentage, risk.risk_level),
            (47.5, RiceRiskLevel::Medium)
        );
        assert!(risk.explanation.starts_with("High humidity"));
    }

    #[test]
    fn season_multiplier_matching() {
        assert_eq!(season_multiplier("MONSOON").0, 1.15);
        assert_eq!(season_multiplier("heavy rainfall").0, 1.15);
        assert_eq!(season_multiplier("Moderate").0, 1.05);
        assert_eq!(season_multiplier("light rain").0, 1.05);
        assert_eq!(season_multiplier("Post-harvest").0, 0.95);
    }

    #[test]
    fn explanation_has_four_fixed_sentences() {
        let risk = score(28.0, 70.0, "Winter", 60);
        assert_eq!(risk.explanation.matches(". ").count(), 3);
        assert!(risk.explanation.ends_with("Dry/Winter, low impact."));
        assert!(risk.explanation.starts_with("Moderate humidity"));
    }

    #[test]
    fn details_echo_inputs() {
        let risk = score(28.0, 70.0, "Winter", 60);
        assert_eq!(risk.details.humidity, 70.0);
        assert_eq!(risk.details.temperature, 28.0);
        assert_eq!(risk.details.storage_days, 60);
        assert_eq!(risk.details.season, "Winter");
    }
}
