//! Some useful mathematical functions

/// Round `value` to `places` decimal places
pub fn round_to(value: f64, places: i32) -> f64 {
    let k = 10f64.powi(places);
    (value * k).round() / k
}

/// Decimal logarithm which refuses to produce `NaN` or `-inf`.
///
/// Returns `None` unless `value` is finite and strictly positive.
pub fn log10_checked(value: f64) -> Option<f64> {
    (value.is_finite() && value > 0.0).then(|| value.log10())
}
