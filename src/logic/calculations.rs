/// Round to one decimal from the exact binary value, ties to even.
///
/// Scaling by ten first would round twice (25.650000000000002 becomes 256.5),
/// so this goes through exact decimal formatting instead.
pub fn round_one_decimal(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.1}", value).parse().unwrap_or(value)
}

/// Clamp to the 0-100 scale. Non-finite values collapse to 0.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Penalty for a reading outside `range`, weighted separately below and above.
pub fn range_penalty(value: f64, range: (f64, f64), below_weight: f64, above_weight: f64) -> f64 {
    if value < range.0 {
        (range.0 - value) * below_weight
    } else if value > range.1 {
        (value - range.1) * above_weight
    } else {
        0.0
    }
}

/// Overheating costs more than chilling.
pub fn temperature_penalty(temp_c: f64, ideal: (f64, f64)) -> f64 {
    range_penalty(temp_c, ideal, 1.5, 2.0)
}

/// Wet storage is the heaviest weighted factor.
pub fn humidity_penalty(humidity: f64, ideal: (f64, f64)) -> f64 {
    range_penalty(humidity, ideal, 1.2, 2.5)
}

/// Half a point per day past the safe window, capped at 30.
pub fn duration_penalty(storage_days: i64, safe_days: i64) -> f64 {
    if storage_days <= safe_days {
        0.0
    } else {
        ((storage_days - safe_days) as f64 * 0.5).min(30.0)
    }
}

/// Mean of the present values, or `None` when there are none.
pub fn mean_present(values: &[Option<f64>]) -> Option<(f64, usize)> {
    let present: Vec<f64> = values
        .iter()
        .flatten()
        .copied()
        .filter(|v| v.is_finite())
        .collect();

    if present.is_empty() {
        None
    } else {
        Some((present.iter().sum::<f64>() / present.len() as f64, present.len()))
    }
}
