//! Scenario tests for the full analysis pipeline.

use chrono::NaiveDate;
use macdscan_core::analyzer::{Analyzer, AnalyzerParams};
use macdscan_core::domain::{Action, Bar, CrossDirection, DivergenceKind, Reason, Series};
use macdscan_core::indicators::MacdParams;

fn make_bars(closes: &[f64]) -> Vec<Bar> {
    let base_date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            Bar {
                date: base_date + chrono::Duration::days(i as i64),
                open,
                high: open.max(close) + 1.0,
                low: open.min(close) - 1.0,
                close,
                volume: 1000.0,
            }
        })
        .collect()
}

fn series_of(closes: &[f64]) -> Series {
    Series::new(make_bars(closes)).unwrap()
}

#[test]
fn constant_price_macd_and_histogram_converge_to_zero() {
    let analysis = Analyzer::default().analyze(series_of(&[100.0; 50]));

    for i in 34..50 {
        let macd = analysis.macd().get(i).expect("macd defined");
        let hist = analysis.histogram().get(i).expect("histogram defined");
        assert!(macd.abs() < 1e-10, "macd at {i}: {macd}");
        assert!(hist.abs() < 1e-10, "histogram at {i}: {hist}");
    }
}

#[test]
fn constant_price_rsi_is_50() {
    // Zero-loss policy: flat tape has zero gains and zero losses → RSI 50.
    let analysis = Analyzer::default().analyze(series_of(&[100.0; 50]));
    for i in 14..50 {
        let v = analysis.rsi().get(i).expect("rsi defined");
        assert!((v - 50.0).abs() < 1e-9, "rsi at {i}: {v}");
    }
}

#[test]
fn monotonic_rise_rsi_approaches_100_and_no_bearish_divergence() {
    let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
    let analysis = Analyzer::default().analyze(series_of(&closes));

    let last_rsi = analysis.rsi().get(29).expect("rsi defined");
    assert!(last_rsi > 99.0, "rsi: {last_rsi}");

    assert!(analysis
        .divergences()
        .iter()
        .all(|d| d.kind != DivergenceKind::Bearish));
}

#[test]
fn flat_then_rally_produces_one_bullish_crossover() {
    // 40 flat bars keep MACD pinned to the signal line at zero, then a
    // steady rally lifts MACD above it exactly once.
    let mut closes = vec![100.0; 40];
    closes.extend((1..=20).map(|i| 100.0 + i as f64 * 2.0));
    let analysis = Analyzer::default().analyze(series_of(&closes));

    let bullish: Vec<_> = analysis
        .crossovers()
        .iter()
        .filter(|c| c.direction == CrossDirection::Bullish)
        .collect();
    assert_eq!(bullish.len(), 1);
    assert!(bullish[0].index >= 40, "cross at {}", bullish[0].index);
}

#[test]
fn crossover_events_never_in_warmup() {
    let closes: Vec<f64> = (0..120)
        .map(|i| 100.0 + (i as f64 * 0.4).sin() * 15.0)
        .collect();
    let params = AnalyzerParams::default();
    let analysis = Analyzer::new(params).analyze(series_of(&closes));

    for event in analysis.crossovers() {
        assert!(
            event.index > params.macd.warmup() - 1,
            "event inside warm-up at {}",
            event.index
        );
        assert!(analysis.macd().is_defined(event.index));
        assert!(analysis.signal_line().is_defined(event.index));
        assert!(analysis.macd().is_defined(event.index - 1));
        assert!(analysis.signal_line().is_defined(event.index - 1));
    }
}

#[test]
fn positive_macd_dominates_last_signal() {
    // Strong uptrend: the final bar has positive MACD, so the sign rule
    // overrides anything the crossover/momentum/divergence rules produced.
    let closes: Vec<f64> = (0..80).map(|i| 100.0 + i as f64).collect();
    let analysis = Analyzer::default().analyze(series_of(&closes));

    let signal = analysis.last_signal().expect("signal expected");
    assert_eq!(signal.action, Action::Buy);
    assert_eq!(signal.reason, Reason::Overbought);
    assert_eq!(signal.reason.label(), "Overbought Condition");
}

#[test]
fn insufficient_history_yields_no_signal_not_a_crash() {
    for n in 1..20 {
        let closes: Vec<f64> = (0..n).map(|i| 100.0 + i as f64).collect();
        let analysis = Analyzer::default().analyze(series_of(&closes));
        assert!(analysis.last_signal().is_none(), "n = {n}");
    }
}

#[test]
fn divergences_are_idempotent_across_reruns() {
    let closes: Vec<f64> = (0..150)
        .map(|i| 100.0 + (i as f64 * 0.25).sin() * 12.0 - i as f64 * 0.05)
        .collect();
    let series = series_of(&closes);

    let first = Analyzer::default().analyze(series.clone());
    let second = Analyzer::default().analyze(series);
    assert_eq!(first.divergences(), second.divergences());
    assert_eq!(first.crossovers(), second.crossovers());
}

#[test]
fn custom_macd_params_shift_warmup() {
    let closes: Vec<f64> = (0..40).map(|i| 100.0 + i as f64).collect();
    let params = AnalyzerParams {
        macd: MacdParams::new(5, 10, 3),
        rsi_period: 14,
        lookback: 5,
    };
    let analysis = Analyzer::new(params).analyze(series_of(&closes));

    // MACD defined from slow - 1 = 9, signal from slow + signal - 2 = 11.
    assert!(!analysis.macd().is_defined(8));
    assert!(analysis.macd().is_defined(9));
    assert!(!analysis.signal_line().is_defined(10));
    assert!(analysis.signal_line().is_defined(11));
}
