//! Ratios and rounding shared by the post-processing stage

/// Round a monetary amount to whole units (never negative zero)
pub fn round_money(value: f64) -> f64 {
    finite_or_zero(value.round()) + 0.0
}

/// Coerce NaN/inf to zero
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Compound annual growth rate in percent.
///
/// Zero unless invested, final value and duration are all positive.
pub fn cagr(total_invested: f64, final_value: f64, duration_years: u32) -> f64 {
    if total_invested <= 0.0 || final_value <= 0.0 || duration_years == 0 {
        return 0.0;
    }
    let growth = (final_value / total_invested).powf(1.0 / duration_years as f64) - 1.0;
    finite_or_zero(growth * 100.0)
}

/// Rule of 72 doubling time in years
pub fn doubling_time(effective_rate: f64) -> f64 {
    if effective_rate > 0.0 {
        finite_or_zero(72.0 / effective_rate)
    } else {
        0.0
    }
}

/// Gain over invested as a percentage; zero when nothing was invested
pub fn roi_percentage(total_invested: f64, final_value: f64) -> f64 {
    if total_invested > 0.0 {
        finite_or_zero((final_value - total_invested) / total_invested * 100.0)
    } else {
        0.0
    }
}

/// Flat tax on positive gains only
pub fn tax_on_gain(total_invested: f64, final_value: f64, tax_rate: f64) -> f64 {
    (final_value - total_invested).max(0.0) * tax_rate / 100.0
}
