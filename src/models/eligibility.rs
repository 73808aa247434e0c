use super::fields::{self, FieldMap};
use super::region::Region;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemeCode {
    #[serde(rename = "PMFBY")]
    Pmfby,
    #[serde(rename = "PMKSY_SAMPADA")]
    PmksySampada,
    #[serde(rename = "MIDH")]
    Midh,
    #[serde(rename = "AIF")]
    Aif,
    #[serde(rename = "STATE_POST_HARVEST")]
    StatePostHarvest,
}

impl SchemeCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemeCode::Pmfby => "PMFBY",
            SchemeCode::PmksySampada => "PMKSY_SAMPADA",
            SchemeCode::Midh => "MIDH",
            SchemeCode::Aif => "AIF",
            SchemeCode::StatePostHarvest => "STATE_POST_HARVEST",
        }
    }
}

impl std::fmt::Display for SchemeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemeType {
    Insurance,
    Subsidy,
    Storage,
}

impl SchemeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemeType::Insurance => "insurance",
            SchemeType::Subsidy => "subsidy",
            SchemeType::Storage => "storage",
        }
    }
}

/// Static catalog entry for a support scheme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scheme {
    pub code: SchemeCode,
    pub name: &'static str,
    pub purpose: &'static str,
    pub action: &'static str,
    pub link: &'static str,
    pub icon: &'static str,
    pub scheme_type: SchemeType,
}

/// Normalize a risk label from either scoring path (or free text) to the
/// four-level vocabulary.
pub fn normalize_risk_level(level: &str) -> String {
    let value = level.trim().to_lowercase();
    match value.as_str() {
        "critical" | "very high" => "CRITICAL".to_string(),
        "high" => "HIGH".to_string(),
        "moderate" | "medium" => "MODERATE".to_string(),
        "safe" | "low" => "SAFE".to_string(),
        "" => "UNKNOWN".to_string(),
        _ => value.to_uppercase(),
    }
}

/// Farmer and location profile consumed by the eligibility rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityInput {
    /// Crop as the caller wrote it.
    pub crop_type: Option<String>,
    /// Lowercase crop key.
    pub crop: String,
    pub region: String,
    /// State as the caller wrote it.
    pub state: Option<String>,
    pub risk_level: String,
    pub storage_days: i64,
    pub farmer_category: String,
    pub landholding_size: Option<f64>,
    /// Landholding as the caller wrote it, parseable or not.
    pub landholding_text: Option<String>,
}

impl EligibilityInput {
    pub fn from_fields(fields: &FieldMap) -> Self {
        let crop_type = fields::text(fields, "crop_type").or_else(|| fields::text(fields, "crop"));
        let region = match fields::text(fields, "region") {
            Some(label) => fields::title_case(&label),
            None => Region::from_coordinates(
                fields::optional_float(fields, "latitude"),
                fields::optional_float(fields, "longitude"),
            )
            .as_str()
            .to_string(),
        };

        Self {
            crop: crop_type
                .as_deref()
                .map(str::to_lowercase)
                .unwrap_or_default(),
            crop_type,
            region,
            state: fields::text(fields, "state"),
            risk_level: normalize_risk_level(
                &fields::text(fields, "risk_level").unwrap_or_default(),
            ),
            storage_days: fields::int_or_zero(fields, "storage_days"),
            farmer_category: fields::text(fields, "farmer_category").unwrap_or_default(),
            landholding_size: fields::optional_float(fields, "landholding_size"),
            landholding_text: fields::text(fields, "landholding_size"),
        }
    }

    /// Lowercase state key used against the state sets.
    pub fn state_key(&self) -> String {
        self.state
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_default()
    }

    pub fn is_high_risk(&self) -> bool {
        matches!(self.risk_level.as_str(), "HIGH" | "CRITICAL")
    }

    pub fn is_small_or_marginal(&self) -> bool {
        let category = self.farmer_category.trim().to_lowercase();
        matches!(category.as_str(), "small" | "marginal")
            || self.landholding_size.is_some_and(|size| size <= 2.0)
    }
}

/// One labelled condition and whether it held.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityCheck {
    pub label: String,
    pub met: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeRecommendation {
    pub code: SchemeCode,
    pub name: String,
    pub purpose: String,
    pub why_eligible: String,
    pub reasons: Vec<String>,
    pub recommended_next_action: String,
    pub official_link: String,
    pub icon: String,
    #[serde(rename = "type")]
    pub scheme_type: SchemeType,
}

impl SchemeRecommendation {
    pub fn from_scheme(scheme: &Scheme, reasons: Vec<String>) -> Self {
        Self {
            code: scheme.code,
            name: scheme.name.to_string(),
            purpose: scheme.purpose.to_string(),
            why_eligible: reasons.join(" "),
            reasons,
            recommended_next_action: scheme.action.to_string(),
            official_link: scheme.link.to_string(),
            icon: scheme.icon.to_string(),
            scheme_type: scheme.scheme_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSummary {
    pub crop_type: Option<String>,
    pub region: String,
    pub state: String,
    pub risk_level: String,
    pub storage_days: i64,
    pub farmer_category: String,
    pub landholding_size: String,
}

impl InputSummary {
    const NOT_PROVIDED: &'static str = "Not provided";

    pub fn from_input(input: &EligibilityInput) -> Self {
        Self {
            crop_type: input.crop_type.clone(),
            region: input.region.clone(),
            state: input
                .state
                .clone()
                .unwrap_or_else(|| Self::NOT_PROVIDED.to_string()),
            risk_level: input.risk_level.clone(),
            storage_days: input.storage_days,
            farmer_category: input.farmer_category.clone(),
            landholding_size: input
                .landholding_text
                .clone()
                .unwrap_or_else(|| Self::NOT_PROVIDED.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityResult {
    pub input_summary: InputSummary,
    pub checks: Vec<EligibilityCheck>,
    pub possible_schemes: Vec<SchemeRecommendation>,
    pub recommended_actions: Vec<String>,
    pub disclaimer: String,
}

impl EligibilityResult {
    pub fn scheme_codes(&self) -> Vec<SchemeCode> {
        self.possible_schemes.iter().map(|s| s.code).collect()
    }

    pub fn scheme(&self, code: SchemeCode) -> Option<&SchemeRecommendation> {
        self.possible_schemes.iter().find(|s| s.code == code)
    }
}
