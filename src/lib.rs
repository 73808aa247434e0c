//! Post-harvest storage risk scoring and support scheme suggestions.
//!
//! The engines under [`logic`] are pure and synchronous over the static tables
//! in [`data`]. Only [`config`] touches the filesystem.

pub mod config;
pub mod data;
pub mod error;
pub mod logic;
pub mod models;

pub use error::{AgriSpectraError, Result};
pub use logic::{
    assess, compute_risk, eligibility_for, evaluate_eligibility, hazard_alerts, weather_average,
    Assessment, EligibilityEngine, RiskEngine,
};
pub use models::{EligibilityResult, FieldMap, Region, RiskInput, RiskResult};
