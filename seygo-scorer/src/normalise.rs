//! Min-max normalisation shared by the relative signals.

/// Rescale `values` linearly into `0.0..=1.0`.
///
/// The smallest value maps to `0.0` and the largest to `1.0`. When every value
/// is equal (including a single value) the result is all zeros, as there is no
/// spread to express.
///
/// # Examples
/// ```
/// use seygo_scorer::min_max;
///
/// assert_eq!(min_max(&[2.0, 4.0, 3.0]), vec![0.0, 1.0, 0.5]);
/// assert_eq!(min_max(&[7.0, 7.0]), vec![0.0, 0.0]);
/// assert!(min_max(&[]).is_empty());
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "normalisation rescales by the observed range"
)]
pub fn min_max(values: &[f64]) -> Vec<f64> {
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &value| {
            (min.min(value), max.max(value))
        });
    let range = max - min;
    if !range.is_finite() || range == 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|value| (value - min) / range).collect()
}
