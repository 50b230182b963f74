//! Exponentially weighted moving average.
//!
//! Recursive: v[start] = x[start]; v[i] = alpha * x[i] + (1 - alpha) * v[i-1].
//! The recursion begins at the first defined input value, so a column with a
//! NaN warm-up prefix (e.g. the MACD line feeding its signal line) is smoothed
//! over its defined subrange only. Positions with fewer than `min_periods`
//! observations since the start are masked NaN.

/// Exponentially weighted mean with an explicit smoothing factor.
///
/// `alpha` must be in (0, 1]. A NaN input after the recursion has started
/// taints every subsequent position.
pub fn ewm(values: &[f64], alpha: f64, min_periods: usize) -> Vec<f64> {
    assert!(alpha > 0.0 && alpha <= 1.0, "alpha must be in (0, 1]");

    let n = values.len();
    let mut result = vec![f64::NAN; n];

    let Some(start) = values.iter().position(|v| !v.is_nan()) else {
        return result;
    };

    // Single pass, O(1) state: only the previous smoothed value is carried.
    let mut prev = values[start];
    result[start] = prev;
    for i in (start + 1)..n {
        if values[i].is_nan() {
            for val in result.iter_mut().skip(i) {
                *val = f64::NAN;
            }
            return result;
        }
        prev = alpha * values[i] + (1.0 - alpha) * prev;
        result[i] = prev;
    }

    // Mask positions seen before `min_periods` observations accumulated.
    // Undefined is NaN, never zero: consumers must not decide on warm-up.
    let defined_from = start + min_periods.saturating_sub(1);
    for val in result.iter_mut().take(defined_from.min(n)).skip(start) {
        *val = f64::NAN;
    }

    result
}

/// Span-parameterized EMA: alpha = 2 / (span + 1).
pub fn ema(values: &[f64], span: usize, min_periods: usize) -> Vec<f64> {
    assert!(span >= 1, "EMA span must be >= 1");
    ewm(values, 2.0 / (span as f64 + 1.0), min_periods)
}
