use crate::models::{CropCategory, CropProfile, Respiration};

/// Names accepted by the crop lookup, in display order.
pub const AVAILABLE_CROPS: &[&str] = &[
    "wheat",
    "paddy",
    "rice",
    "mustard",
    "sugarcane",
    "black pepper",
    "coffee",
    "banana",
    "potato",
    "onion",
    "groundnut",
    "bajra",
];

static PADDY: CropProfile = CropProfile {
    name: "paddy",
    category: CropCategory::Grain,
    ideal_temp_c: (20.0, 30.0),
    ideal_humidity: (65.0, 80.0),
    safe_days: 180,
    respiration: Respiration::Medium,
    notes: "Mold risk increases rapidly above 80% RH.",
};

static CROPS: &[CropProfile] = &[
    CropProfile {
        name: "wheat",
        category: CropCategory::Grain,
        ideal_temp_c: (25.0, 30.0),
        ideal_humidity: (30.0, 45.0),
        safe_days: 365,
        respiration: Respiration::Low,
        notes: "Low moisture grain; fungal risk increases if RH > 60%.",
    },
    CropProfile {
        name: "mustard",
        category: CropCategory::Oilseed,
        ideal_temp_c: (20.0, 30.0),
        ideal_humidity: (40.0, 55.0),
        safe_days: 270,
        respiration: Respiration::Low,
        notes: "Oilseed; sensitive to humidity.",
    },
    CropProfile {
        name: "sugarcane",
        category: CropCategory::Perishable,
        ideal_temp_c: (28.0, 35.0),
        ideal_humidity: (60.0, 85.0),
        safe_days: 3,
        respiration: Respiration::VeryHigh,
        notes: "Very high respiration rate; spoils rapidly.",
    },
    CropProfile {
        name: "black pepper",
        category: CropCategory::Spice,
        ideal_temp_c: (20.0, 30.0),
        ideal_humidity: (60.0, 75.0),
        safe_days: 365,
        respiration: Respiration::Low,
        notes: "Above 75% RH there is aflatoxin risk.",
    },
    CropProfile {
        name: "coffee",
        category: CropCategory::BeverageCrop,
        ideal_temp_c: (15.0, 25.0),
        ideal_humidity: (50.0, 65.0),
        safe_days: 365,
        respiration: Respiration::Low,
        notes: "Needs dry, ventilated storage.",
    },
    CropProfile {
        name: "banana",
        category: CropCategory::Fruit,
        ideal_temp_c: (13.0, 15.0),
        ideal_humidity: (85.0, 95.0),
        safe_days: 10,
        respiration: Respiration::VeryHigh,
        notes: "Climacteric fruit; ethylene and rapid ripening.",
    },
    CropProfile {
        name: "potato",
        category: CropCategory::Tuber,
        ideal_temp_c: (10.0, 15.0),
        ideal_humidity: (85.0, 90.0),
        safe_days: 60,
        respiration: Respiration::Medium,
        notes: "High temp causes sprouting.",
    },
    CropProfile {
        name: "onion",
        category: CropCategory::Vegetable,
        ideal_temp_c: (25.0, 35.0),
        ideal_humidity: (40.0, 60.0),
        safe_days: 180,
        respiration: Respiration::Low,
        notes: "Sprouting if humidity rises.",
    },
    CropProfile {
        name: "groundnut",
        category: CropCategory::Oilseed,
        ideal_temp_c: (20.0, 30.0),
        ideal_humidity: (30.0, 50.0),
        safe_days: 365,
        respiration: Respiration::Low,
        notes: "Aflatoxin risk if RH > 70%.",
    },
    CropProfile {
        name: "bajra",
        category: CropCategory::Grain,
        ideal_temp_c: (15.0, 30.0),
        ideal_humidity: (30.0, 50.0),
        safe_days: 365,
        respiration: Respiration::Low,
        notes: "Highly storage-stable grain.",
    },
];

/// Conservative thresholds for crops missing from the table.
pub static DEFAULT_PROFILE: CropProfile = CropProfile {
    name: "unknown",
    category: CropCategory::Unknown,
    ideal_temp_c: (15.0, 30.0),
    ideal_humidity: (30.0, 70.0),
    safe_days: 90,
    respiration: Respiration::Medium,
    notes: "Unknown crop — using conservative defaults.",
};

/// Multipliers on the accumulated penalty. `none` is intentionally absent and
/// falls through to 1.0 in [`respiration_factor`].
const RESPIRATION_FACTORS: &[(Respiration, f64)] = &[
    (Respiration::Low, 0.9),
    (Respiration::Medium, 1.0),
    (Respiration::High, 1.2),
    (Respiration::VeryHigh, 1.5),
];

/// Case-insensitive lookup. "rice" shares the paddy record.
pub fn lookup(name: &str) -> Option<&'static CropProfile> {
    let key = name.trim().to_lowercase();
    match key.as_str() {
        "paddy" | "rice" => Some(&PADDY),
        _ => CROPS.iter().find(|c| c.name == key),
    }
}

/// Lookup with the conservative default for unknown crops.
pub fn profile_or_default(name: &str) -> &'static CropProfile {
    lookup(name).unwrap_or_else(|| {
        tracing::debug!("No threshold profile for crop '{}', using defaults", name);
        &DEFAULT_PROFILE
    })
}

pub fn respiration_factor(respiration: Respiration) -> f64 {
    RESPIRATION_FACTORS
        .iter()
        .find(|(r, _)| *r == respiration)
        .map(|(_, factor)| *factor)
        .unwrap_or(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_crop_resolves() {
        for name in AVAILABLE_CROPS {
            assert!(lookup(name).is_some(), "missing profile for {}", name);
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup("Wheat").map(|c| c.name), Some("wheat"));
        assert_eq!(lookup(" BLACK PEPPER ").map(|c| c.name), Some("black pepper"));
    }

    #[test]
    fn rice_is_the_paddy_record() {
        let rice = lookup("rice").unwrap();
        let paddy = lookup("Paddy").unwrap();
        assert!(std::ptr::eq(rice, paddy));
    }

    #[test]
    fn unknown_crop_gets_conservative_defaults() {
        assert!(lookup("xyz").is_none());
        let profile = profile_or_default("xyz");
        assert_eq!(profile.ideal_temp_c, (15.0, 30.0));
        assert_eq!(profile.ideal_humidity, (30.0, 70.0));
        assert_eq!(profile.safe_days, 90);
        assert_eq!(profile.respiration, Respiration::Medium);
    }

    #[test]
    fn respiration_factors() {
        assert_eq!(respiration_factor(Respiration::Low), 0.9);
        assert_eq!(respiration_factor(Respiration::Medium), 1.0);
        assert_eq!(respiration_factor(Respiration::High), 1.2);
        assert_eq!(respiration_factor(Respiration::VeryHigh), 1.5);
        assert_eq!(respiration_factor(Respiration::None), 1.0);
    }

    #[test]
    fn ranges_are_ordered() {
        for crop in CROPS.iter().chain(std::iter::once(&PADDY)) {
            assert!(crop.ideal_temp_c.0 <= crop.ideal_temp_c.1, "{}", crop.name);
            assert!(crop.ideal_humidity.0 <= crop.ideal_humidity.1, "{}", crop.name);
            assert!(crop.safe_days > 0, "{}", crop.name);
        }
    }
}
