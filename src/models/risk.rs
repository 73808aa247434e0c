use super::crop::Respiration;
use super::fields::{self, FieldMap};
use super::region::Region;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SEASON: &str = "Post-harvest";

/// Normalized scoring input. Built by the caller or coerced from a loose payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskInput {
    pub crop: String,
    pub region: Region,
    pub temperature_c: f64,
    pub humidity: f64,
    pub season: String,
    pub storage_days: i64,
}

impl RiskInput {
    pub fn new(
        crop: impl Into<String>,
        region: Region,
        temperature_c: f64,
        humidity: f64,
        season: impl Into<String>,
        storage_days: i64,
    ) -> Self {
        Self {
            crop: crop.into(),
            region,
            temperature_c,
            humidity,
            season: season.into(),
            storage_days,
        }
    }

    /// Coerce a loose payload. Never fails; bad numbers become zero.
    pub fn from_fields(fields: &FieldMap) -> Self {
        let crop = fields::text(fields, "crop_type")
            .or_else(|| fields::text(fields, "crop"))
            .unwrap_or_default();

        let region = match fields::text(fields, "region") {
            Some(label) => Region::from_str(&label).unwrap_or_else(|| {
                tracing::debug!("Unrecognized region '{}', using North", label);
                Region::North
            }),
            None => Region::from_coordinates(
                fields::optional_float(fields, "latitude"),
                fields::optional_float(fields, "longitude"),
            ),
        };

        Self {
            crop,
            region,
            temperature_c: fields::float_or_zero(fields, "temperature"),
            humidity: fields::float_or_zero(fields, "humidity"),
            season: fields::text(fields, "season").unwrap_or_else(|| DEFAULT_SEASON.to_string()),
            storage_days: fields::int_or_zero(fields, "storage_days"),
        }
    }

    /// Lowercase lookup key, with the common "rise" typo read as "rice".
    pub fn crop_key(&self) -> String {
        let key = self.crop.trim().to_lowercase();
        if key == "rise" {
            "rice".to_string()
        } else {
            key
        }
    }

    /// Temperature and humidity with non-finite values forced to zero.
    pub(crate) fn readings(&self) -> (f64, f64) {
        let finite = |v: f64| if v.is_finite() { v } else { 0.0 };
        (finite(self.temperature_c), finite(self.humidity))
    }
}

/// Four-level category produced by the threshold scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Safe,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    pub fn from_score(score: f64) -> Self {
        if score <= 20.0 {
            RiskLevel::Safe
        } else if score <= 50.0 {
            RiskLevel::Moderate
        } else if score <= 80.0 {
            RiskLevel::High
        } else {
            RiskLevel::Critical
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "SAFE",
            RiskLevel::Moderate => "MODERATE",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Three-level category produced by the rice/paddy scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiceRiskLevel {
    Low,
    Medium,
    High,
}

impl RiceRiskLevel {
    pub fn from_percentage(pct: f64) -> Self {
        if pct <= 30.0 {
            RiceRiskLevel::Low
        } else if pct <= 60.0 {
            RiceRiskLevel::Medium
        } else {
            RiceRiskLevel::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiceRiskLevel::Low => "Low",
            RiceRiskLevel::Medium => "Medium",
            RiceRiskLevel::High => "High",
        }
    }
}

impl std::fmt::Display for RiceRiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Effective thresholds the threshold scorer used, after regional shifts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageThresholds {
    pub ideal_temp: (f64, f64),
    pub ideal_humidity: (f64, f64),
    pub safe_days: i64,
    pub respiration: Respiration,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageRisk {
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub explanation: String,
    pub recommendations: Vec<String>,
    pub details: StorageThresholds,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiceRiskDetails {
    pub humidity: f64,
    pub temperature: f64,
    pub storage_days: i64,
    pub season: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiceRisk {
    pub risk_percentage: f64,
    pub risk_level: RiceRiskLevel,
    pub explanation: String,
    pub recommendation: String,
    pub details: RiceRiskDetails,
}

/// Output of either scoring path.
///
/// The two shapes are deliberately not unified: downstream consumers compare
/// `risk_level` case-sensitively ("HIGH" vs "High") and read `risk_score` or
/// `risk_percentage` depending on which one is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RiskResult {
    Storage(StorageRisk),
    Rice(RiceRisk),
}

impl RiskResult {
    pub fn score(&self) -> f64 {
        match self {
            RiskResult::Storage(r) => r.risk_score,
            RiskResult::Rice(r) => r.risk_percentage,
        }
    }

    /// Level label exactly as serialized for this shape.
    pub fn level_label(&self) -> &'static str {
        match self {
            RiskResult::Storage(r) => r.risk_level.as_str(),
            RiskResult::Rice(r) => r.risk_level.as_str(),
        }
    }

    pub fn explanation(&self) -> &str {
        match self {
            RiskResult::Storage(r) => &r.explanation,
            RiskResult::Rice(r) => &r.explanation,
        }
    }

    pub fn recommendations(&self) -> Vec<&str> {
        match self {
            RiskResult::Storage(r) => r.recommendations.iter().map(String::as_str).collect(),
            RiskResult::Rice(r) => vec![r.recommendation.as_str()],
        }
    }

    pub fn is_rice(&self) -> bool {
        matches!(self, RiskResult::Rice(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn risk_level_boundaries() {
        assert_eq!(RiskLevel::from_score(0.0), RiskLevel::Safe);
        assert_eq!(RiskLevel::from_score(20.0), RiskLevel::Safe);
        assert_eq!(RiskLevel::from_score(20.1), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_score(50.0), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_score(80.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(80.1), RiskLevel::Critical);
    }

    #[test]
    fn rice_level_boundaries() {
        assert_eq!(RiceRiskLevel::from_percentage(30.0), RiceRiskLevel::Low);
        assert_eq!(RiceRiskLevel::from_percentage(30.1), RiceRiskLevel::Medium);
        assert_eq!(RiceRiskLevel::from_percentage(60.0), RiceRiskLevel::Medium);
        assert_eq!(RiceRiskLevel::from_percentage(60.1), RiceRiskLevel::High);
    }

    #[test]
    fn level_labels_keep_their_case() {
        assert_eq!(
            serde_json::to_string(&RiskLevel::High).unwrap(),
            "\"HIGH\""
        );
        assert_eq!(
            serde_json::to_string(&RiceRiskLevel::High).unwrap(),
            "\"High\""
        );
    }

    #[test]
    fn input_from_fields_defaults() {
        let input = RiskInput::from_fields(&FieldMap::new());
        assert_eq!(input.crop, "");
        assert_eq!(input.region, Region::North);
        assert_eq!(input.temperature_c, 0.0);
        assert_eq!(input.humidity, 0.0);
        assert_eq!(input.season, DEFAULT_SEASON);
        assert_eq!(input.storage_days, 0);
    }

    #[test]
    fn input_from_fields_coerces_strings() {
        let fields = json!({
            "crop_type": "Wheat",
            "region": "south",
            "temperature": "28.5",
            "humidity": "oops",
            "season": "Monsoon",
            "storage_days": "45"
        });
        let input = RiskInput::from_fields(fields.as_object().unwrap());
        assert_eq!(input.crop, "Wheat");
        assert_eq!(input.region, Region::South);
        assert_eq!(input.temperature_c, 28.5);
        assert_eq!(input.humidity, 0.0);
        assert_eq!(input.storage_days, 45);
    }

    #[test]
    fn input_region_falls_back() {
        let unknown = json!({"region": "Central"});
        assert_eq!(
            RiskInput::from_fields(unknown.as_object().unwrap()).region,
            Region::North
        );

        let coords = json!({"latitude": 12.97, "longitude": 77.59});
        assert_eq!(
            RiskInput::from_fields(coords.as_object().unwrap()).region,
            Region::South
        );
    }

    #[test]
    fn crop_key_fixes_rise_typo() {
        let input = RiskInput::new("  RISE ", Region::North, 0.0, 0.0, "", 0);
        assert_eq!(input.crop_key(), "rice");
        let input = RiskInput::new("Black Pepper", Region::North, 0.0, 0.0, "", 0);
        assert_eq!(input.crop_key(), "black pepper");
    }

    #[test]
    fn storage_shape_serializes_score_field() {
        let result = RiskResult::Storage(StorageRisk {
            risk_score: 12.5,
            risk_level: RiskLevel::Safe,
            explanation: String::new(),
            recommendations: vec![],
            details: StorageThresholds {
                ideal_temp: (20.0, 30.0),
                ideal_humidity: (60.0, 75.0),
                safe_days: 180,
                respiration: Respiration::Medium,
            },
        });
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["risk_score"], json!(12.5));
        assert_eq!(value["risk_level"], json!("SAFE"));
        assert_eq!(value["details"]["ideal_temp"], json!([20.0, 30.0]));
        assert!(value.get("risk_percentage").is_none());
    }
}
