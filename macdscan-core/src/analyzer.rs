//! Full analysis pipeline.
//!
//! `Analyzer` turns a validated `Series` into an `Analysis`: the series plus
//! every indicator column, crossover events, and divergence points, built as
//! immutable values in one pass. The analysis owns its series; callers that
//! process many tickers run one analysis per ticker with no shared state.

use serde::{Deserialize, Serialize};

use crate::detect::{classify_last_bar, detect_crossovers, detect_divergences, RuleContext};
use crate::domain::{CrossoverEvent, DivergencePoint, IndicatorSeries, Series, Signal};
use crate::indicators::{macd_full, rsi, MacdParams};

/// Analysis parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerParams {
    pub macd: MacdParams,
    pub rsi_period: usize,
    /// Centered window width for extremum/divergence detection. Must be odd.
    pub lookback: usize,
}

impl Default for AnalyzerParams {
    fn default() -> Self {
        Self {
            macd: MacdParams::default(),
            rsi_period: 14,
            lookback: 5,
        }
    }
}

/// Configured analysis pipeline.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    params: AnalyzerParams,
}

impl Analyzer {
    pub fn new(params: AnalyzerParams) -> Self {
        assert!(
            params.lookback >= 1 && params.lookback % 2 == 1,
            "lookback must be odd and >= 1"
        );
        assert!(params.rsi_period >= 1, "RSI period must be >= 1");
        Self { params }
    }

    pub fn params(&self) -> &AnalyzerParams {
        &self.params
    }

    /// Run the full pipeline. Total over any valid series: a series shorter
    /// than the warm-up windows yields all-undefined columns and no events,
    /// never an error.
    pub fn analyze(&self, series: Series) -> Analysis {
        let p = &self.params;

        let macd_out = macd_full(&series, p.macd);
        let rsi_values = rsi(&series, p.rsi_period);

        let crossovers = detect_crossovers(&macd_out.macd, &macd_out.signal);
        let divergences = detect_divergences(&series, &macd_out.histogram, p.lookback);

        Analysis {
            params: *p,
            ema_fast: IndicatorSeries::new(format!("ema_{}", p.macd.fast), macd_out.ema_fast),
            ema_slow: IndicatorSeries::new(format!("ema_{}", p.macd.slow), macd_out.ema_slow),
            macd: IndicatorSeries::new("macd", macd_out.macd),
            signal: IndicatorSeries::new("macd_signal", macd_out.signal),
            histogram: IndicatorSeries::new("histogram", macd_out.histogram),
            rsi: IndicatorSeries::new(format!("rsi_{}", p.rsi_period), rsi_values),
            crossovers,
            divergences,
            series,
        }
    }
}

/// The enriched series: bars plus aligned indicator columns and detected
/// events. Read-only once built; event indices reference series positions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    params: AnalyzerParams,
    series: Series,
    ema_fast: IndicatorSeries,
    ema_slow: IndicatorSeries,
    macd: IndicatorSeries,
    signal: IndicatorSeries,
    histogram: IndicatorSeries,
    rsi: IndicatorSeries,
    crossovers: Vec<CrossoverEvent>,
    divergences: Vec<DivergencePoint>,
}

impl Analysis {
    pub fn series(&self) -> &Series {
        &self.series
    }

    pub fn params(&self) -> &AnalyzerParams {
        &self.params
    }

    pub fn ema_fast(&self) -> &IndicatorSeries {
        &self.ema_fast
    }

    pub fn ema_slow(&self) -> &IndicatorSeries {
        &self.ema_slow
    }

    pub fn macd(&self) -> &IndicatorSeries {
        &self.macd
    }

    pub fn signal_line(&self) -> &IndicatorSeries {
        &self.signal
    }

    pub fn histogram(&self) -> &IndicatorSeries {
        &self.histogram
    }

    pub fn rsi(&self) -> &IndicatorSeries {
        &self.rsi
    }

    pub fn crossovers(&self) -> &[CrossoverEvent] {
        &self.crossovers
    }

    pub fn divergences(&self) -> &[DivergencePoint] {
        &self.divergences
    }

    /// Classify the most recent bar. Recomputed from the stored indicator
    /// state on each call; `None` when no rule fires (e.g. warm-up).
    pub fn last_signal(&self) -> Option<Signal> {
        let last_index = self.series.len() - 1;
        let ctx = RuleContext {
            last_index,
            macd: self.macd.values(),
            histogram: self.histogram.values(),
            crossovers: &self.crossovers,
            divergences: &self.divergences,
        };
        classify_last_bar(&ctx).map(|(action, reason)| Signal {
            date: self.series.last().date,
            action,
            reason,
        })
    }
}
