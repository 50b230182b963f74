//! Parallel multi-symbol scan.
//!
//! Each symbol's series and derived indicators are independent, so the scan
//! fans out across rayon workers with no cross-symbol shared state. The
//! analyzer is read-only and shared by reference; every series is moved into
//! exactly one analysis. Results come back sorted by symbol so output order
//! is deterministic regardless of scheduling.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analyzer::Analyzer;
use crate::domain::{Series, Signal, Symbol};

/// Last-bar classification for one scanned symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    pub symbol: Symbol,
    /// `None` when no rule fired (typically insufficient history).
    pub signal: Option<Signal>,
}

/// Analyze every series and classify its latest bar, in parallel.
pub fn scan(inputs: Vec<(Symbol, Series)>, analyzer: &Analyzer) -> Vec<ScanResult> {
    let mut results: Vec<ScanResult> = inputs
        .into_par_iter()
        .map(|(symbol, series)| {
            let analysis = analyzer.analyze(series);
            ScanResult {
                symbol,
                signal: analysis.last_signal(),
            }
        })
        .collect();

    results.sort_by(|a, b| a.symbol.cmp(&b.symbol));
    results
}
