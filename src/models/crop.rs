use serde::{Deserialize, Serialize};

/// Post-harvest metabolic activity of a stored crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Respiration {
    None,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Respiration {
    pub fn as_str(&self) -> &'static str {
        match self {
            Respiration::None => "none",
            Respiration::Low => "low",
            Respiration::Medium => "medium",
            Respiration::High => "high",
            Respiration::VeryHigh => "very_high",
        }
    }

}

impl std::fmt::Display for Respiration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropCategory {
    Grain,
    Oilseed,
    Perishable,
    Spice,
    BeverageCrop,
    Fruit,
    Tuber,
    Vegetable,
    Unknown,
}

impl CropCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CropCategory::Grain => "Grain",
            CropCategory::Oilseed => "Oilseed",
            CropCategory::Perishable => "Perishable",
            CropCategory::Spice => "Spice",
            CropCategory::BeverageCrop => "Beverage Crop",
            CropCategory::Fruit => "Fruit",
            CropCategory::Tuber => "Tuber",
            CropCategory::Vegetable => "Vegetable",
            CropCategory::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for CropCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Storage thresholds for one crop. Ranges are inclusive `(min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CropProfile {
    pub name: &'static str,
    pub category: CropCategory,
    pub ideal_temp_c: (f64, f64),
    pub ideal_humidity: (f64, f64),
    pub safe_days: i64,
    pub respiration: Respiration,
    pub notes: &'static str,
}

impl CropProfile {
    /// Crops that escalate sharply once kept past their safe window.
    pub fn is_cliff_edge_perishable(&self) -> bool {
        matches!(self.name, "sugarcane" | "banana")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn respiration_labels() {
        assert_eq!(Respiration::VeryHigh.to_string(), "very_high");
        assert_eq!(Respiration::None.as_str(), "none");
    }

    #[test]
    fn category_display_is_title_text() {
        assert_eq!(CropCategory::BeverageCrop.to_string(), "Beverage Crop");
    }

    #[test]
    fn respiration_serializes_snake_case() {
        let json = serde_json::to_string(&Respiration::VeryHigh).unwrap();
        assert_eq!(json, "\"very_high\"");
    }
}
