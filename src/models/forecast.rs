use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily block of an Open-Meteo forecast response.
///
/// Every series is optional and may contain nulls; series are aligned by index
/// with `time`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    #[serde(rename = "time", default)]
    pub dates: Vec<NaiveDate>,
    #[serde(rename = "temperature_2m_mean", default)]
    pub mean_temp_c: Vec<Option<f64>>,
    #[serde(rename = "relative_humidity_2m_mean", default)]
    pub mean_humidity: Vec<Option<f64>>,
    #[serde(rename = "precipitation_sum", default)]
    pub precipitation_mm: Vec<Option<f64>>,
    #[serde(rename = "windspeed_10m_max", default)]
    pub wind_max_kmh: Vec<Option<f64>>,
    #[serde(rename = "weathercode", default)]
    pub weather_code: Vec<Option<f64>>,
}

/// Full forecast document; only the daily block is read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub daily: DailyForecast,
}

impl DailyForecast {
    pub fn days(&self) -> usize {
        self.dates.len()
    }

    pub fn precipitation_on(&self, idx: usize) -> f64 {
        self.precipitation_mm.get(idx).copied().flatten().unwrap_or(0.0)
    }

    pub fn wind_max_on(&self, idx: usize) -> f64 {
        self.wind_max_kmh.get(idx).copied().flatten().unwrap_or(0.0)
    }

    pub fn weather_code_on(&self, idx: usize) -> Option<f64> {
        self.weather_code.get(idx).copied().flatten()
    }
}

/// Multi-day mean conditions used to prefill a risk assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherAverage {
    pub avg_temperature: f64,
    pub avg_humidity: f64,
    pub days_used: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HazardKind {
    HeavyRain,
    CycloneRisk,
}

impl HazardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HazardKind::HeavyRain => "Heavy Rain",
            HazardKind::CycloneRisk => "Cyclone Risk",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HazardSeverity {
    High,
    Severe,
}

impl HazardSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            HazardSeverity::High => "HIGH",
            HazardSeverity::Severe => "SEVERE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardAlert {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: HazardKind,
    pub severity: HazardSeverity,
    pub headline: String,
    pub details: String,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardReport {
    pub alerts: Vec<HazardAlert>,
    pub forecast_days_checked: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_open_meteo_daily_block_with_nulls() {
        let body = r#"{
            "latitude": 20.3,
            "longitude": 85.8,
            "daily": {
                "time": ["2025-07-01", "2025-07-02"],
                "precipitation_sum": [12.5, null],
                "windspeed_10m_max": [20.0],
                "weathercode": [61, 95]
            }
        }"#;
        let response: ForecastResponse = serde_json::from_str(body).unwrap();
        let daily = response.daily;
        assert_eq!(daily.days(), 2);
        assert_eq!(daily.precipitation_on(0), 12.5);
        assert_eq!(daily.precipitation_on(1), 0.0);
        assert_eq!(daily.wind_max_on(1), 0.0);
        assert_eq!(daily.weather_code_on(1), Some(95.0));
        assert!(daily.mean_temp_c.is_empty());
    }
}
