//! NaN-aware statistical aggregates.
//!
//! Missing observations are encoded as `f64::NAN` and skipped by every
//! aggregate here. An input with no valid observation yields `NaN`.

/// Replace a missing observation with `0.0`.
#[inline]
pub fn nan_to_num(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x
    }
}

/// Iterate over the non-NaN values of a slice.
fn valid(values: &[f64]) -> impl Iterator<Item = f64> + '_ {
    values.iter().copied().filter(|v| !v.is_nan())
}

/// Count the non-NaN values of a slice.
pub fn count_valid(values: &[f64]) -> usize {
    valid(values).count()
}

/// Minimum ignoring NaN.
pub fn nan_min(values: &[f64]) -> f64 {
    valid(values).reduce(f64::min).unwrap_or(f64::NAN)
}

/// Maximum ignoring NaN.
pub fn nan_max(values: &[f64]) -> f64 {
    valid(values).reduce(f64::max).unwrap_or(f64::NAN)
}

/// Arithmetic mean ignoring NaN.
pub fn nan_mean(values: &[f64]) -> f64 {
    let n = count_valid(values);
    if n == 0 {
        return f64::NAN;
    }
    valid(values).sum::<f64>() / n as f64
}

/// Population variance (n denominator) ignoring NaN.
pub fn nan_variance(values: &[f64]) -> f64 {
    let n = count_valid(values);
    if n == 0 {
        return f64::NAN;
    }
    let m = nan_mean(values);
    valid(values).map(|x| (x - m).powi(2)).sum::<f64>() / n as f64
}

/// Population standard deviation ignoring NaN.
pub fn nan_std(values: &[f64]) -> f64 {
    nan_variance(values).sqrt()
}

/// Running sum of a sequence.
pub fn cumulative_sum(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .scan(0.0, |acc, &x| {
            *acc += x;
            Some(*acc)
        })
        .collect()
}
