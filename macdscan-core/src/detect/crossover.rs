//! MACD/Signal-line crossover detection.
//!
//! Edge-triggered, not level-triggered: an event fires at position i only
//! when the "MACD above signal" state flips between i-1 and i. Equality
//! counts as not above, so the only bullish trigger is a transition from
//! equal-or-below to strictly above. Positions where either line is
//! undefined never participate, so no event can fire inside or at the
//! boundary of the warm-up region.

use crate::domain::{CrossDirection, CrossoverEvent};

/// Detect sign changes of (MACD - Signal) between adjacent defined positions.
pub fn detect_crossovers(macd: &[f64], signal: &[f64]) -> Vec<CrossoverEvent> {
    debug_assert_eq!(macd.len(), signal.len());

    let n = macd.len().min(signal.len());
    let mut events = Vec::new();

    for i in 1..n {
        if macd[i].is_nan()
            || signal[i].is_nan()
            || macd[i - 1].is_nan()
            || signal[i - 1].is_nan()
        {
            continue;
        }

        let above_prev = macd[i - 1] > signal[i - 1];
        let above_cur = macd[i] > signal[i];

        if above_cur && !above_prev {
            events.push(CrossoverEvent {
                index: i,
                direction: CrossDirection::Bullish,
            });
        } else if !above_cur && above_prev {
            events.push(CrossoverEvent {
                index: i,
                direction: CrossDirection::Bearish,
            });
        }
    }

    events
}
