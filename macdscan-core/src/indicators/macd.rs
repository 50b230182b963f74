//! Moving Average Convergence Divergence.
//!
//! MACD = EMA(close, fast) - EMA(close, slow); Signal = EMA(MACD, signal)
//! computed over the subrange where MACD is defined; Histogram = MACD - Signal.
//! With defaults 12/26/9 the MACD line is defined from position 25 and the
//! signal line and histogram from position 33.
//!
//! Two call conventions exist among callers: `macd_lines` returns the MACD
//! and signal lines only, `macd_full` additionally returns the histogram.

use serde::{Deserialize, Serialize};

use crate::domain::Series;
use crate::indicators::ema;

/// MACD parameters: fast/slow EMA spans and signal-line span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacdParams {
    pub fast: usize,
    pub slow: usize,
    pub signal: usize,
}

impl Default for MacdParams {
    fn default() -> Self {
        Self {
            fast: 12,
            slow: 26,
            signal: 9,
        }
    }
}

impl MacdParams {
    pub fn new(fast: usize, slow: usize, signal: usize) -> Self {
        assert!(fast >= 1, "fast span must be >= 1");
        assert!(slow > fast, "slow span must be > fast span");
        assert!(signal >= 1, "signal span must be >= 1");
        Self { fast, slow, signal }
    }

    /// Bars needed before the signal line (and histogram) are defined.
    pub fn warmup(&self) -> usize {
        self.slow + self.signal - 1
    }
}

/// MACD components aligned with series positions. The fast/slow EMA
/// columns are kept so the enriched analysis can carry them without
/// recomputing.
#[derive(Debug, Clone)]
pub struct MacdOutput {
    pub ema_fast: Vec<f64>,
    pub ema_slow: Vec<f64>,
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
}

/// The two-series convention: MACD line and signal line only.
pub fn macd_lines(series: &Series, params: MacdParams) -> (Vec<f64>, Vec<f64>) {
    let out = macd_full(series, params);
    (out.macd, out.signal)
}

/// The combined-analysis convention: MACD, signal, and histogram.
pub fn macd_full(series: &Series, params: MacdParams) -> MacdOutput {
    let closes = series.closes();
    let n = closes.len();

    let ema_fast = ema(&closes, params.fast, params.fast);
    let ema_slow = ema(&closes, params.slow, params.slow);

    let mut macd = vec![f64::NAN; n];
    for i in 0..n {
        if !ema_fast[i].is_nan() && !ema_slow[i].is_nan() {
            macd[i] = ema_fast[i] - ema_slow[i];
        }
    }

    // The EMA engine starts its recursion at the first defined MACD value,
    // so the warm-up prefix never leaks into the signal line.
    let signal = ema(&macd, params.signal, params.signal);

    let mut histogram = vec![f64::NAN; n];
    for i in 0..n {
        if !macd[i].is_nan() && !signal[i].is_nan() {
            histogram[i] = macd[i] - signal[i];
        }
    }

    MacdOutput {
        ema_fast,
        ema_slow,
        macd,
        signal,
        histogram,
    }
}
