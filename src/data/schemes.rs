use crate::models::{Scheme, SchemeCode, SchemeType};

pub static SCHEMES: [Scheme; 5] = [
    Scheme {
        code: SchemeCode::Pmfby,
        name: "PMFBY (Pradhan Mantri Fasal Bima Yojana)",
        purpose: "Crop insurance support for weather and post-harvest related losses.",
        action: "Check seasonal notification, premium, and enrollment window with your state portal or CSC.",
        link: "https://pmfby.gov.in/",
        icon: "fa-shield-halved",
        scheme_type: SchemeType::Insurance,
    },
    Scheme {
        code: SchemeCode::PmksySampada,
        name: "PM Kisan SAMPADA Yojana",
        purpose: "Support for post-harvest management, food processing, and cold-chain infrastructure.",
        action: "Review eligible components and apply through implementing agencies/official portal.",
        link: "https://www.mofpi.gov.in/en/Schemes/pradhan-mantri-kisan-sampada-yojana",
        icon: "fa-snowflake",
        scheme_type: SchemeType::Subsidy,
    },
    Scheme {
        code: SchemeCode::Midh,
        name: "Mission for Integrated Development of Horticulture (MIDH)",
        purpose: "Support for horticulture crops including post-harvest and storage interventions.",
        action: "Contact the district horticulture office for component-wise subsidy availability.",
        link: "https://midh.gov.in/",
        icon: "fa-seedling",
        scheme_type: SchemeType::Subsidy,
    },
    Scheme {
        code: SchemeCode::Aif,
        name: "Agriculture Infrastructure Fund (AIF)",
        purpose: "Financing support for warehousing, cold storage, and post-harvest infrastructure.",
        action: "Check beneficiary category and financing terms before registration.",
        link: "https://agriinfra.dac.gov.in/",
        icon: "fa-warehouse",
        scheme_type: SchemeType::Storage,
    },
    Scheme {
        code: SchemeCode::StatePostHarvest,
        name: "State-Level Post-Harvest / Storage Schemes",
        purpose: "State-specific storage, warehouse, cold-chain, and farmer support programs.",
        action: "Verify active schemes on your state agriculture/horticulture department website.",
        link: "https://agriwelfare.gov.in/en/StateAgriDepartments",
        icon: "fa-map-location-dot",
        scheme_type: SchemeType::Storage,
    },
];

pub const PERISHABLE_CROPS: &[&str] = &[
    "banana",
    "potato",
    "onion",
    "sugarcane",
    "coffee",
    "black pepper",
];

pub const HIGH_HUMIDITY_REGIONS: &[&str] = &["East", "South"];
pub const HEAT_STRESS_REGIONS: &[&str] = &["West", "South"];

pub const FLOOD_PRONE_STATES: &[&str] = &[
    "assam",
    "bihar",
    "odisha",
    "west bengal",
    "jharkhand",
    "chhattisgarh",
];

pub const HEAT_PRONE_STATES: &[&str] = &[
    "rajasthan",
    "gujarat",
    "maharashtra",
    "telangana",
    "andhra pradesh",
];

pub const RECOMMENDED_ACTIONS: &[&str] = &[
    "Review the official eligibility criteria for each suggested scheme.",
    "Keep crop, land, and identity documents ready before applying.",
    "Contact your district agriculture/horticulture office or FPO for local guidance.",
];

pub const DISCLAIMER: &str = "This eligibility check is for awareness only and does not guarantee approval. \
     Farmers must verify details on official government portals.";

pub fn scheme(code: SchemeCode) -> &'static Scheme {
    match code {
        SchemeCode::Pmfby => &SCHEMES[0],
        SchemeCode::PmksySampada => &SCHEMES[1],
        SchemeCode::Midh => &SCHEMES[2],
        SchemeCode::Aif => &SCHEMES[3],
        SchemeCode::StatePostHarvest => &SCHEMES[4],
    }
}
