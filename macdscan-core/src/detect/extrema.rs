//! Centered rolling-window extrema and local extremum candidates.
//!
//! The window is centered on each position and must fit entirely within the
//! series and contain only defined values; otherwise the output is NaN.
//! Candidate extraction uses windowed-argmin/argmax comparisons on the raw
//! values rather than float equality against a computed rolling column, so
//! a position qualifies exactly when no neighbor in its window beats it.
//! Ties all qualify and are returned in index order.

/// Rolling minimum over a centered window of odd width.
pub fn rolling_center_min(values: &[f64], window: usize) -> Vec<f64> {
    rolling_center(values, window, |acc, v| acc.min(v))
}

/// Rolling maximum over a centered window of odd width.
pub fn rolling_center_max(values: &[f64], window: usize) -> Vec<f64> {
    rolling_center(values, window, |acc, v| acc.max(v))
}

fn rolling_center(values: &[f64], window: usize, fold: impl Fn(f64, f64) -> f64) -> Vec<f64> {
    assert!(window >= 1 && window % 2 == 1, "window must be odd and >= 1");

    let n = values.len();
    let half = window / 2;
    let mut result = vec![f64::NAN; n];

    if n < window {
        return result;
    }

    for i in half..(n - half) {
        let slice = &values[i - half..=i + half];
        if slice.iter().any(|v| v.is_nan()) {
            continue;
        }
        let mut acc = slice[0];
        for &v in &slice[1..] {
            acc = fold(acc, v);
        }
        result[i] = acc;
    }

    result
}

/// Positions whose raw value is the minimum of their centered window.
pub fn local_min_candidates(values: &[f64], window: usize) -> Vec<usize> {
    local_candidates(values, window, |center, other| center <= other)
}

/// Positions whose raw value is the maximum of their centered window.
pub fn local_max_candidates(values: &[f64], window: usize) -> Vec<usize> {
    local_candidates(values, window, |center, other| center >= other)
}

fn local_candidates(
    values: &[f64],
    window: usize,
    beats: impl Fn(f64, f64) -> bool,
) -> Vec<usize> {
    assert!(window >= 1 && window % 2 == 1, "window must be odd and >= 1");

    let n = values.len();
    let half = window / 2;
    let mut candidates = Vec::new();

    if n < window {
        return candidates;
    }

    for i in half..(n - half) {
        let center = values[i];
        if center.is_nan() {
            continue;
        }
        let window_vals = &values[i - half..=i + half];
        if window_vals.iter().any(|v| v.is_nan()) {
            continue;
        }
        if window_vals.iter().all(|&v| beats(center, v)) {
            candidates.push(i);
        }
    }

    candidates
}
