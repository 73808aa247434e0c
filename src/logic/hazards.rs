use crate::logic::calculations::{mean_present, round_one_decimal};
use crate::models::{
    DailyForecast, HazardAlert, HazardKind, HazardReport, HazardSeverity, WeatherAverage,
};

const HEAVY_RAIN_MM: f64 = 50.0;
const SEVERE_RAIN_MM: f64 = 100.0;
const CYCLONE_WIND_KMH: f64 = 62.0;
/// WMO thunderstorm codes, with and without hail.
const THUNDERSTORM_CODES: [f64; 3] = [95.0, 96.0, 99.0];

const HEAVY_RAIN_ACTIONS: [&str; 3] = [
    "Move produce to elevated and covered storage immediately.",
    "Use waterproof tarpaulins and seal side openings to avoid moisture ingress.",
    "Keep pallets above floor level and maintain drainage around storage.",
];

const CYCLONE_ACTIONS: [&str; 3] = [
    "Shift stock to the safest available pucca storage building.",
    "Avoid temporary sheds; secure doors, roof sheets, and ventilation shutters.",
    "Keep emergency backup: tarpaulins, ropes, power backup, and contact list.",
];

/// Mean temperature and humidity over the forecast window.
///
/// Returns `None` when either series has no usable values.
pub fn weather_average(daily: &DailyForecast) -> Option<WeatherAverage> {
    let (avg_temp, temp_days) = mean_present(&daily.mean_temp_c)?;
    let (avg_humidity, humidity_days) = mean_present(&daily.mean_humidity)?;

    Some(WeatherAverage {
        avg_temperature: round_one_decimal(avg_temp),
        avg_humidity: round_one_decimal(avg_humidity),
        days_used: temp_days.min(humidity_days),
    })
}

/// Heavy-rain and cyclone alerts for each forecast day.
///
/// A single day may raise both kinds.
pub fn hazard_alerts(daily: &DailyForecast) -> HazardReport {
    let mut alerts = Vec::new();

    for (idx, date) in daily.dates.iter().enumerate() {
        let rain = daily.precipitation_on(idx);
        let wind = daily.wind_max_on(idx);
        let stormy = daily
            .weather_code_on(idx)
            .is_some_and(|code| THUNDERSTORM_CODES.contains(&code));

        if rain >= HEAVY_RAIN_MM {
            let severity = if rain >= SEVERE_RAIN_MM {
                HazardSeverity::Severe
            } else {
                HazardSeverity::High
            };
            alerts.push(HazardAlert {
                date: *date,
                kind: HazardKind::HeavyRain,
                severity,
                headline: format!("Heavy rain expected on {}", date),
                details: format!(
                    "Forecast rainfall is about {} mm.",
                    round_one_decimal(rain)
                ),
                recommendations: HEAVY_RAIN_ACTIONS.iter().map(|s| s.to_string()).collect(),
            });
        }

        if wind >= CYCLONE_WIND_KMH || stormy {
            alerts.push(HazardAlert {
                date: *date,
                kind: HazardKind::CycloneRisk,
                severity: HazardSeverity::Severe,
                headline: format!("Cyclone/strong storm risk on {}", date),
                details: format!(
                    "Peak wind may reach about {} km/h.",
                    round_one_decimal(wind)
                ),
                recommendations: CYCLONE_ACTIONS.iter().map(|s| s.to_string()).collect(),
            });
        }
    }

    if !alerts.is_empty() {
        tracing::debug!("{} hazard alert(s) in {} day(s)", alerts.len(), daily.days());
    }

    HazardReport {
        alerts,
        forecast_days_checked: daily.days(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, day).unwrap()
    }

    fn forecast() -> DailyForecast {
        DailyForecast {
            dates: vec![date(1), date(2), date(3), date(4)],
            mean_temp_c: vec![Some(30.0), Some(31.0), None, Some(29.0)],
            mean_humidity: vec![Some(80.0), Some(85.5), Some(90.0), None],
            precipitation_mm: vec![Some(10.0), Some(55.0), Some(120.4), None],
            wind_max_kmh: vec![Some(15.0), Some(30.0), Some(70.2), None],
            weather_code: vec![Some(3.0), None, None, Some(95.0)],
        }
    }

    #[test]
    fn average_uses_present_values_only() {
        let avg = weather_average(&forecast()).unwrap();
        assert_eq!(avg.avg_temperature, 30.0);
        assert_eq!(avg.avg_humidity, 85.2);
        assert_eq!(avg.days_used, 3);
    }

    #[test]
    fn average_requires_both_series() {
        let mut daily = forecast();
        daily.mean_humidity = vec![None, None];
        assert!(weather_average(&daily).is_none());
        assert!(weather_average(&DailyForecast::default()).is_none());
    }

    #[test]
    fn alerts_by_rain_wind_and_storm_code() {
        let report = hazard_alerts(&forecast());
        assert_eq!(report.forecast_days_checked, 4);

        let summary: Vec<_> = report
            .alerts
            .iter()
            .map(|a| (a.date, a.kind, a.severity))
            .collect();
        assert_eq!(
            summary,
            vec![
                (date(2), HazardKind::HeavyRain, HazardSeverity::High),
                (date(3), HazardKind::HeavyRain, HazardSeverity::Severe),
                (date(3), HazardKind::CycloneRisk, HazardSeverity::Severe),
                (date(4), HazardKind::CycloneRisk, HazardSeverity::Severe),
            ]
        );
        assert_eq!(report.alerts[1].details, "Forecast rainfall is about 120.4 mm.");
        assert_eq!(report.alerts[3].details, "Peak wind may reach about 0 km/h.");
        assert!(report.alerts.iter().all(|a| a.recommendations.len() == 3));
    }

    #[test]
    fn calm_forecast_has_no_alerts() {
        let daily = DailyForecast {
            dates: vec![date(1)],
            precipitation_mm: vec![Some(49.9)],
            wind_max_kmh: vec![Some(61.9)],
            weather_code: vec![Some(80.0)],
            ..Default::default()
        };
        let report = hazard_alerts(&daily);
        assert!(report.alerts.is_empty());
        assert_eq!(report.forecast_days_checked, 1);
    }
}
