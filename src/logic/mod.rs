pub mod assessment;
pub mod calculations;
pub mod eligibility;
pub mod hazards;
pub mod risk;

pub use assessment::{assess, eligibility_for, Assessment};
pub use eligibility::{evaluate_eligibility, EligibilityEngine};
pub use hazards::{hazard_alerts, weather_average};
pub use risk::{compute_risk, RiskEngine};
