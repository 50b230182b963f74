//! Domain types for MacdScan.

pub mod bar;
pub mod series;
pub mod signal;

pub use bar::Bar;
pub use series::{IndicatorSeries, Series};
pub use signal::{
    Action, CrossDirection, CrossoverEvent, DivergenceKind, DivergencePoint, Reason, Signal,
};

/// Symbol type alias
pub type Symbol = String;
