//! Plain-text rendering of results for terminal output.

use agrispectra::data::crops;
use agrispectra::models::{EligibilityResult, HazardReport, RiskResult, WeatherAverage};
use agrispectra::Assessment;
use std::fmt::Write;

pub fn risk(result: &RiskResult) -> String {
    let mut out = String::new();

    match result {
        RiskResult::Storage(r) => {
            let _ = writeln!(out, "Risk score: {:.1} / 100 ({})", r.risk_score, r.risk_level);
            let _ = writeln!(
                out,
                "Ideal: {}–{}°C, {}–{}% RH, safe for {} days, respiration {}",
                r.details.ideal_temp.0,
                r.details.ideal_temp.1,
                r.details.ideal_humidity.0,
                r.details.ideal_humidity.1,
                r.details.safe_days,
                r.details.respiration
            );
        }
        RiskResult::Rice(r) => {
            let _ = writeln!(
                out,
                "Rice/paddy risk: {:.1}% ({})",
                r.risk_percentage, r.risk_level
            );
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", result.explanation());
    let _ = writeln!(out);
    let _ = writeln!(out, "Recommendations:");
    for rec in result.recommendations() {
        let _ = writeln!(out, "  - {}", rec);
    }

    out
}

pub fn eligibility(result: &EligibilityResult) -> String {
    let mut out = String::new();
    let summary = &result.input_summary;

    let _ = writeln!(
        out,
        "Profile: {} | {} | state {} | risk {} | {} days | landholding {}",
        summary.crop_type.as_deref().unwrap_or("-"),
        summary.region,
        summary.state,
        summary.risk_level,
        summary.storage_days,
        summary.landholding_size
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Checks:");
    for check in &result.checks {
        let mark = if check.met { "x" } else { " " };
        let _ = writeln!(out, "  [{}] {}", mark, check.label);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Possible schemes:");
    for scheme in &result.possible_schemes {
        let _ = writeln!(
            out,
            "  {} ({}, {})",
            scheme.name,
            scheme.code,
            scheme.scheme_type.as_str()
        );
        let _ = writeln!(out, "    Why: {}", scheme.why_eligible);
        let _ = writeln!(out, "    Next: {}", scheme.recommended_next_action);
        let _ = writeln!(out, "    Link: {}", scheme.official_link);
    }

    let _ = writeln!(out);
    for action in &result.recommended_actions {
        let _ = writeln!(out, "  - {}", action);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", result.disclaimer);

    out
}

pub fn assessment(assessment: &Assessment) -> String {
    format!(
        "{}\n{}",
        risk(&assessment.risk),
        eligibility(&assessment.eligibility)
    )
}

pub fn hazards(report: &HazardReport) -> String {
    let mut out = String::new();

    if report.alerts.is_empty() {
        let _ = writeln!(
            out,
            "No heavy rain or cyclone risk in the {} forecast day(s) checked.",
            report.forecast_days_checked
        );
        return out;
    }

    for alert in &report.alerts {
        let _ = writeln!(
            out,
            "[{}] {}: {}",
            alert.severity.as_str(),
            alert.kind.as_str(),
            alert.headline
        );
        let _ = writeln!(out, "  {}", alert.details);
        for rec in &alert.recommendations {
            let _ = writeln!(out, "  - {}", rec);
        }
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{} alert(s) across {} forecast day(s).",
        report.alerts.len(),
        report.forecast_days_checked
    );

    out
}

pub fn average(avg: &WeatherAverage) -> String {
    format!(
        "Average over {} day(s): {:.1}°C, {:.1}% RH\n",
        avg.days_used, avg.avg_temperature, avg.avg_humidity
    )
}

pub fn crop_table() -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<14} {:<14} {:>10} {:>10} {:>6}  {:<10}",
        "Crop", "Category", "Temp °C", "RH %", "Days", "Respiration"
    );
    for name in crops::AVAILABLE_CROPS {
        let Some(profile) = crops::lookup(name) else {
            continue;
        };
        let _ = writeln!(
            out,
            "{:<14} {:<14} {:>10} {:>10} {:>6}  {:<10}",
            name,
            profile.category.to_string(),
            format!("{}–{}", profile.ideal_temp_c.0, profile.ideal_temp_c.1),
            format!("{}–{}", profile.ideal_humidity.0, profile.ideal_humidity.1),
            profile.safe_days,
            profile.respiration.as_str()
        );
    }
    out
}
