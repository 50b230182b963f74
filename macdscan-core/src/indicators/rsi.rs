//! Relative Strength Index with Wilder seeding.
//!
//! Day-over-day close deltas are split into gains and losses. The average
//! gain/loss at position `n` is seeded with the simple mean of the first `n`
//! deltas — the seed replaces the recursive value there, it does not merely
//! initialize it — and smoothed from then on with center-of-mass `n`
//! (alpha = 1/(n+1)). RSI = 100 - 100 / (1 + mean_gain / mean_loss).
//!
//! Zero-loss policy: saturate. mean_loss == 0 → 100, mean_gain == 0 → 0,
//! both zero (flat tape) → 50. RSI stays defined and in [0, 100] for every
//! position at or past the seed.

use crate::domain::Series;

/// Compute RSI over close prices. Positions 0..n are NaN; values are
/// defined from position `n` onward when the series is long enough.
pub fn rsi(series: &Series, n: usize) -> Vec<f64> {
    assert!(n >= 1, "RSI period must be >= 1");

    let closes = series.closes();
    let len = closes.len();
    let mut result = vec![f64::NAN; len];

    if len < n + 1 {
        return result;
    }

    // Deltas start at position 1; gains and losses zero-fill each other.
    let mut gains = vec![0.0; len];
    let mut losses = vec![0.0; len];
    for i in 1..len {
        let delta = closes[i] - closes[i - 1];
        if delta > 0.0 {
            gains[i] = delta;
        } else {
            losses[i] = -delta;
        }
    }

    // Wilder seed: simple mean of the first n gains/losses.
    let mut mean_gain = gains[1..=n].iter().sum::<f64>() / n as f64;
    let mut mean_loss = losses[1..=n].iter().sum::<f64>() / n as f64;
    result[n] = strength_index(mean_gain, mean_loss);

    let alpha = 1.0 / (n as f64 + 1.0);
    for i in (n + 1)..len {
        mean_gain = alpha * gains[i] + (1.0 - alpha) * mean_gain;
        mean_loss = alpha * losses[i] + (1.0 - alpha) * mean_loss;
        result[i] = strength_index(mean_gain, mean_loss);
    }

    result
}

fn strength_index(mean_gain: f64, mean_loss: f64) -> f64 {
    if mean_loss == 0.0 && mean_gain == 0.0 {
        50.0 // flat tape
    } else if mean_loss == 0.0 {
        100.0
    } else if mean_gain == 0.0 {
        0.0
    } else {
        100.0 - 100.0 / (1.0 + mean_gain / mean_loss)
    }
}
