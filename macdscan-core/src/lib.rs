//! MacdScan Core — indicator and signal engine over daily OHLCV series.
//!
//! This crate contains the analysis pipeline:
//! - Domain types (bars, validated series, indicator series, events, signals)
//! - EMA / RSI / MACD indicator calculators
//! - Crossover, rolling-extremum, and divergence detectors
//! - Last-bar classifier with an ordered, last-wins rule cascade
//! - Parallel multi-symbol scan
//!
//! Data acquisition, caching, charting, and the ticker CLI loop are external
//! collaborators: callers hand this crate a fully loaded `Series` and consume
//! the enriched `Analysis` it returns. Every computation here is a pure
//! function over an immutable input series.

pub mod analyzer;
pub mod detect;
pub mod domain;
pub mod error;
pub mod indicators;
pub mod scan;

pub use analyzer::{Analysis, Analyzer, AnalyzerParams};
pub use domain::{
    Action, Bar, CrossDirection, CrossoverEvent, DivergenceKind, DivergencePoint,
    IndicatorSeries, Reason, Series, Signal,
};
pub use error::SeriesError;
