use super::RiskScorer;
use crate::data::{crops, regions};
use crate::logic::calculations::{
    clamp_percent, duration_penalty, humidity_penalty, round_one_decimal, temperature_penalty,
};
use crate::models::{RiskInput, RiskLevel, RiskResult, StorageRisk, StorageThresholds};

/// Flat escalation once a cliff-edge perishable passes its safe window.
const PERISHABLE_ESCALATION: f64 = 20.0;

/// Threshold scorer used for every crop except rice/paddy.
///
/// Penalties:
/// - Temperature outside the regional ideal band: 1.5/°C below, 2.0/°C above
/// - Humidity outside the band: 1.2/%RH below (dry), 2.5/%RH above (wet)
/// - Storage past the safe window: 0.5/day, capped at 30
/// - Season: monsoon 12, humid summer 10, dry summer 2, post-harvest 3
///
/// The sum is scaled by the crop's respiration factor, then sugarcane and
/// banana gain a flat 20 once stored past their safe window.
///
/// Levels: SAFE ≤20, MODERATE ≤50, HIGH ≤80, CRITICAL above.
pub struct StorageScorer;

impl RiskScorer for StorageScorer {
    fn id(&self) -> &'static str {
        "storage_threshold"
    }

    fn name(&self) -> &'static str {
        "Storage Threshold Risk"
    }

    fn applies_to(&self, _crop_key: &str) -> bool {
        true
    }

    fn score(&self, input: &RiskInput) -> RiskResult {
        let crop_key = input.crop_key();
        let profile = crops::profile_or_default(&crop_key);
        let adjustment = regions::adjustment_for(input.region);
        let (temp, rh) = input.readings();
        let days = input.storage_days;

        let ideal_temp = adjustment.shift_temp(profile.ideal_temp_c);
        let ideal_rh = adjustment.shift_humidity(profile.ideal_humidity);

        let mut explanation = Vec::new();

        let temp_penalty = temperature_penalty(temp, ideal_temp);
        explanation.push(describe_temperature(temp, ideal_temp));

        let rh_penalty = humidity_penalty(rh, ideal_rh);
        explanation.push(describe_humidity(rh, ideal_rh));

        let days_penalty = duration_penalty(days, profile.safe_days);
        explanation.push(describe_duration(days, profile.safe_days));

        let (season_penalty, season_note) = season_penalty(&input.season, rh);
        explanation.push(season_note.to_string());

        let resp_factor = crops::respiration_factor(profile.respiration);
        if resp_factor > 1.0 {
            explanation.push(format!(
                "Crop respiration rate {} increases spoilage risk.",
                profile.respiration
            ));
        }

        let mut score = (temp_penalty + rh_penalty + days_penalty + season_penalty) * resp_factor;

        if profile.is_cliff_edge_perishable() && days > profile.safe_days {
            score += PERISHABLE_ESCALATION;
            explanation.push(
                "Highly perishable crop: rapid risk escalation when stored beyond safe duration."
                    .to_string(),
            );
        }

        let risk_score = round_one_decimal(clamp_percent(score));
        let risk_level = RiskLevel::from_score(risk_score);

        let mut recommendations: Vec<String> = level_recommendations(risk_level)
            .iter()
            .map(|s| s.to_string())
            .collect();

        if matches!(crop_key.as_str(), "paddy" | "groundnut") && rh > 70.0 {
            recommendations.push(
                "Dry grains to safe moisture content and avoid long storage during humid season."
                    .to_string(),
            );
        }

        let notes = profile.notes;
        let explanation = format!("{} {}", notes, explanation.join(" "))
            .trim()
            .to_string();

        RiskResult::Storage(StorageRisk {
            risk_score,
            risk_level,
            explanation,
            recommendations,
            details: StorageThresholds {
                ideal_temp,
                ideal_humidity: ideal_rh,
                safe_days: profile.safe_days,
                respiration: profile.respiration,
            },
        })
    }
}

/// Season contribution by case-insensitive substring; first match wins.
fn season_penalty(season: &str, humidity: f64) -> (f64, &'static str) {
    let season = season.to_lowercase();
    if season.contains("monsoon") {
        (
            12.0,
            "Season = Monsoon; raises risk due to high ambient moisture.",
        )
    } else if season.contains("summer") {
        if humidity > 65.0 {
            (
                10.0,
                "Humid summer conditions increase fungal/spoilage risk.",
            )
        } else {
            (2.0, "Summer season with moderate humidity.")
        }
    } else if season.contains("post-harvest") {
        (
            3.0,
            "Post-harvest handling affects risk depending on storage readiness.",
        )
    } else {
        (0.0, "Seasonal effect minimal.")
    }
}

fn describe_temperature(temp: f64, ideal: (f64, f64)) -> String {
    if temp < ideal.0 {
        format!(
            "Temperature {:?}°C below ideal range {}–{}°C.",
            temp, ideal.0, ideal.1
        )
    } else if temp > ideal.1 {
        format!(
            "Temperature {:?}°C above ideal range {}–{}°C.",
            temp, ideal.0, ideal.1
        )
    } else {
        format!("Temperature {:?}°C within ideal range.", temp)
    }
}

fn describe_humidity(rh: f64, ideal: (f64, f64)) -> String {
    if rh < ideal.0 {
        format!(
            "Humidity {:?}% below ideal range {}–{}% (dry).",
            rh, ideal.0, ideal.1
        )
    } else if rh > ideal.1 {
        format!(
            "Humidity {:?}% above ideal range {}–{}% (wet).",
            rh, ideal.0, ideal.1
        )
    } else {
        format!("Humidity {:?}% within ideal range.", rh)
    }
}

fn describe_duration(days: i64, safe_days: i64) -> String {
    if days <= safe_days {
        format!(
            "Storage duration {} days within safe limit ({} days).",
            days, safe_days
        )
    } else {
        format!(
            "Storage duration {} days exceeds safe limit ({} days) by {} days.",
            days,
            safe_days,
            days - safe_days
        )
    }
}

fn level_recommendations(level: RiskLevel) -> &'static [&'static str] {
    match level {
        RiskLevel::Safe => &["Maintain current storage conditions; monitor weekly."],
        RiskLevel::Moderate => &[
            "Consider ventilation and reduce humidity (use desiccants or drying).",
            "Check storage for early signs of mold or pests.",
        ],
        RiskLevel::High => &[
            "Reduce storage temperature if possible; increase ventilation.",
            "Move to dryer storage or use moisture control measures.",
        ],
        RiskLevel::Critical => &[
            "Immediate action: move produce to cold storage or sell/consume promptly.",
            "Use aeration, drying, or short-term processing to avoid loss.",
        ],
    }
}
