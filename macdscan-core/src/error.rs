//! Input validation errors.
//!
//! The core never repairs malformed input: a `Series` either passes every
//! precondition at construction time or the caller gets a descriptive error
//! naming the violated precondition. Indicator and detector functions are
//! total over any `Series` that made it through validation.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while validating bar data at `Series` construction.
#[derive(Debug, Clone, Error)]
pub enum SeriesError {
    #[error("series is empty: at least one bar is required")]
    Empty,

    #[error("dates must be strictly increasing: bar {position} has date {date}, previous bar has {prev_date}")]
    NonMonotonicDates {
        position: usize,
        prev_date: NaiveDate,
        date: NaiveDate,
    },

    #[error("bar {position} ({date}) has a non-finite {field} value")]
    NonFiniteField {
        position: usize,
        date: NaiveDate,
        field: &'static str,
    },

    #[error("bar {position} ({date}) violates OHLC consistency: high={high}, low={low}, open={open}, close={close}")]
    InconsistentOhlc {
        position: usize,
        date: NaiveDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
    },
}
