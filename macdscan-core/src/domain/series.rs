//! Series — validated ordered bar container — and IndicatorSeries.
//!
//! `Series` is the single source of truth for price data: construction
//! enforces every precondition the indicator engine relies on (non-empty,
//! strictly increasing dates, finite and consistent OHLCV), so downstream
//! code never re-validates. `IndicatorSeries` is a derived column aligned
//! 1:1 with series positions; `f64::NAN` encodes "undefined" (warm-up,
//! insufficient history) and the `get` accessor masks it as `None` so
//! consumers cannot mistake undefined for zero.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::Bar;
use crate::error::SeriesError;

/// Ordered sequence of daily bars with strictly increasing dates.
///
/// Deserialization routes through `Series::new`, so the constructor
/// invariants hold on every construction path, the wire included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SeriesData")]
pub struct Series {
    bars: Vec<Bar>,
}

/// Raw wire form of a `Series`, validated on conversion.
#[derive(Deserialize)]
struct SeriesData {
    bars: Vec<Bar>,
}

impl TryFrom<SeriesData> for Series {
    type Error = SeriesError;

    fn try_from(data: SeriesData) -> Result<Self, Self::Error> {
        Series::new(data.bars)
    }
}

impl Series {
    /// Build a series from bars, failing fast on the first violated
    /// precondition. Bars must already be in chronological order; the
    /// series never reorders or repairs input.
    pub fn new(bars: Vec<Bar>) -> Result<Self, SeriesError> {
        if bars.is_empty() {
            return Err(SeriesError::Empty);
        }

        for (i, bar) in bars.iter().enumerate() {
            for (field, value) in [
                ("open", bar.open),
                ("high", bar.high),
                ("low", bar.low),
                ("close", bar.close),
                ("volume", bar.volume),
            ] {
                if !value.is_finite() {
                    return Err(SeriesError::NonFiniteField {
                        position: i,
                        date: bar.date,
                        field,
                    });
                }
            }
            if !bar.is_sane() {
                return Err(SeriesError::InconsistentOhlc {
                    position: i,
                    date: bar.date,
                    open: bar.open,
                    high: bar.high,
                    low: bar.low,
                    close: bar.close,
                });
            }
            if i > 0 && bars[i - 1].date >= bar.date {
                return Err(SeriesError::NonMonotonicDates {
                    position: i,
                    prev_date: bars[i - 1].date,
                    date: bar.date,
                });
            }
        }

        Ok(Self { bars })
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Bar at a position, if in range.
    pub fn get(&self, index: usize) -> Option<&Bar> {
        self.bars.get(index)
    }

    /// The most recent bar. Construction guarantees at least one.
    pub fn last(&self) -> &Bar {
        &self.bars[self.bars.len() - 1]
    }

    /// Position of the bar with the given date, if present.
    /// Dates are strictly increasing, so binary search applies.
    pub fn position_of(&self, date: NaiveDate) -> Option<usize> {
        self.bars.binary_search_by_key(&date, |b| b.date).ok()
    }

    /// Close prices as a freshly extracted column.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// High prices as a freshly extracted column.
    pub fn highs(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.high).collect()
    }

    /// Low prices as a freshly extracted column.
    pub fn lows(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.low).collect()
    }
}

/// Named numeric column aligned 1:1 with the positions of the `Series`
/// it was computed from. `f64::NAN` means undefined at that position.
/// Serialized with undefined positions as `null` so JSON consumers see an
/// explicit "no value" rather than a NaN they cannot represent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorSeries {
    name: String,
    #[serde(with = "nan_as_null")]
    values: Vec<f64>,
}

mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
        let nullable: Vec<Option<f64>> = values
            .iter()
            .map(|&v| if v.is_nan() { None } else { Some(v) })
            .collect();
        nullable.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
        let nullable = Vec::<Option<f64>>::deserialize(deserializer)?;
        Ok(nullable
            .into_iter()
            .map(|v| v.unwrap_or(f64::NAN))
            .collect())
    }
}

impl IndicatorSeries {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at a position; `None` when out of range or undefined.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values
            .get(index)
            .copied()
            .filter(|v| !v.is_nan())
    }

    /// True when the position holds a defined value.
    pub fn is_defined(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Raw values including NaN warm-up positions.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Position of the first defined value, if any.
    pub fn first_defined(&self) -> Option<usize> {
        self.values.iter().position(|v| !v.is_nan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::make_bars;

    #[test]
    fn series_construction_ok() {
        let series = Series::new(make_bars(&[100.0, 101.0, 102.0])).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.last().close, 102.0);
        assert_eq!(series.closes(), vec![100.0, 101.0, 102.0]);
    }

    #[test]
    fn series_rejects_empty() {
        assert!(matches!(Series::new(vec![]), Err(SeriesError::Empty)));
    }

    #[test]
    fn series_rejects_non_monotonic_dates() {
        let mut bars = make_bars(&[100.0, 101.0, 102.0]);
        bars[2].date = bars[0].date;
        let err = Series::new(bars).unwrap_err();
        assert!(matches!(
            err,
            SeriesError::NonMonotonicDates { position: 2, .. }
        ));
    }

    #[test]
    fn series_rejects_duplicate_dates() {
        let mut bars = make_bars(&[100.0, 101.0]);
        bars[1].date = bars[0].date;
        assert!(matches!(
            Series::new(bars),
            Err(SeriesError::NonMonotonicDates { position: 1, .. })
        ));
    }

    #[test]
    fn series_rejects_nan_close() {
        let mut bars = make_bars(&[100.0, 101.0]);
        bars[1].close = f64::NAN;
        let err = Series::new(bars).unwrap_err();
        assert!(matches!(
            err,
            SeriesError::NonFiniteField {
                position: 1,
                field: "close",
                ..
            }
        ));
    }

    #[test]
    fn series_rejects_high_below_low() {
        let mut bars = make_bars(&[100.0, 101.0]);
        bars[1].high = bars[1].low - 5.0;
        assert!(matches!(
            Series::new(bars),
            Err(SeriesError::InconsistentOhlc { position: 1, .. })
        ));
    }

    #[test]
    fn series_date_lookup() {
        let bars = make_bars(&[100.0, 101.0, 102.0]);
        let d1 = bars[1].date;
        let series = Series::new(bars).unwrap();
        assert_eq!(series.position_of(d1), Some(1));
        assert_eq!(
            series.position_of(NaiveDate::from_ymd_opt(1999, 1, 1).unwrap()),
            None
        );
    }

    #[test]
    fn valid_series_roundtrips_through_json() {
        let series = Series::new(make_bars(&[100.0, 101.0, 102.0])).unwrap();
        let json = serde_json::to_string(&series).unwrap();
        let deser: Series = serde_json::from_str(&json).unwrap();
        assert_eq!(series, deser);
    }

    #[test]
    fn deserialization_rejects_empty_series() {
        let result = serde_json::from_str::<Series>(r#"{"bars":[]}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("at least one bar"), "unexpected error: {err}");
    }

    #[test]
    fn deserialization_rejects_non_monotonic_dates() {
        let mut bars = make_bars(&[100.0, 101.0]);
        bars[1].date = bars[0].date;
        let json = serde_json::json!({ "bars": bars });
        assert!(serde_json::from_value::<Series>(json).is_err());
    }

    #[test]
    fn single_bar_series_is_valid() {
        let series = Series::new(make_bars(&[100.0])).unwrap();
        assert_eq!(series.len(), 1);
    }

    #[test]
    fn indicator_series_masks_nan() {
        let ind = IndicatorSeries::new("macd", vec![f64::NAN, f64::NAN, 1.5]);
        assert_eq!(ind.get(0), None);
        assert_eq!(ind.get(2), Some(1.5));
        assert_eq!(ind.get(3), None); // out of range
        assert!(!ind.is_defined(1));
        assert!(ind.is_defined(2));
        assert_eq!(ind.first_defined(), Some(2));
    }

    #[test]
    fn indicator_series_undefined_serializes_as_null() {
        let ind = IndicatorSeries::new("macd", vec![f64::NAN, 1.5]);
        let json = serde_json::to_string(&ind).unwrap();
        assert!(json.contains("null"));
        let deser: IndicatorSeries = serde_json::from_str(&json).unwrap();
        assert_eq!(deser.get(0), None);
        assert_eq!(deser.get(1), Some(1.5));
    }

    #[test]
    fn indicator_series_all_undefined() {
        let ind = IndicatorSeries::new("rsi", vec![f64::NAN; 4]);
        assert_eq!(ind.first_defined(), None);
    }
}
