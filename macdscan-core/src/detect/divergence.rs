//! Price/momentum divergence detection.
//!
//! Three explicit passes: compute centered rolling extrema of the histogram,
//! extract local price extremum candidates, then compare each candidate with
//! the immediately preceding candidate of the same kind. Bullish divergence:
//! price makes a strictly lower low while the windowed histogram low is
//! strictly higher. Bearish is the mirror on highs. No lookback beyond the
//! previous candidate, and the scan is deterministic: re-running on the same
//! inputs always yields the same points.

use crate::detect::extrema::{
    local_max_candidates, local_min_candidates, rolling_center_max, rolling_center_min,
};
use crate::domain::{DivergenceKind, DivergencePoint, Series};

/// Detect bullish and bearish divergences between price extrema and the
/// MACD histogram, using a centered window of odd width `lookback`.
/// Returned points are sorted by position.
pub fn detect_divergences(
    series: &Series,
    histogram: &[f64],
    lookback: usize,
) -> Vec<DivergencePoint> {
    debug_assert_eq!(series.len(), histogram.len());

    let lows = series.lows();
    let highs = series.highs();
    let hist_low = rolling_center_min(histogram, lookback);
    let hist_high = rolling_center_max(histogram, lookback);

    let mut points = Vec::new();

    // Price lower low, histogram higher low → bullish.
    let low_candidates = local_min_candidates(&lows, lookback);
    for pair in low_candidates.windows(2) {
        let (prev, cur) = (pair[0], pair[1]);
        if hist_low[prev].is_nan() || hist_low[cur].is_nan() {
            continue;
        }
        if lows[cur] < lows[prev] && hist_low[cur] > hist_low[prev] {
            points.push(DivergencePoint {
                index: cur,
                kind: DivergenceKind::Bullish,
            });
        }
    }

    // Price higher high, histogram lower high → bearish.
    let high_candidates = local_max_candidates(&highs, lookback);
    for pair in high_candidates.windows(2) {
        let (prev, cur) = (pair[0], pair[1]);
        if hist_high[prev].is_nan() || hist_high[cur].is_nan() {
            continue;
        }
        if highs[cur] > highs[prev] && hist_high[cur] < hist_high[prev] {
            points.push(DivergencePoint {
                index: cur,
                kind: DivergenceKind::Bearish,
            });
        }
    }

    points.sort_by_key(|p| p.index);
    points
}
