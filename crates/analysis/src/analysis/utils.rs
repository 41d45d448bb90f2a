//! Utility functions for analysis module
//!
//! Shared helper functions used across analysis submodules.

/// Mean of the values that are not `NaN`, with the number skipped.
///
/// Returns `NaN` as the mean when no value is defined.
pub fn defined_mean(values: &[f64]) -> (f64, usize) {
    let (sum, count) = values
        .iter()
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(s, n), &v| (s + v, n + 1));
    let skipped = values.len() - count;
    if count == 0 {
        (f64::NAN, skipped)
    } else {
        (sum / count as f64, skipped)
    }
}
