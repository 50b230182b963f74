//! Signal detection over precomputed indicator columns.
//!
//! Every detector is a pure function: indicator slices in, events out.
//! Nothing here recomputes indicators or mutates the series.

pub mod classify;
pub mod crossover;
pub mod divergence;
pub mod extrema;

pub use classify::{classify_last_bar, RuleContext};
pub use crossover::detect_crossovers;
pub use divergence::detect_divergences;
pub use extrema::{local_max_candidates, local_min_candidates, rolling_center_max, rolling_center_min};
