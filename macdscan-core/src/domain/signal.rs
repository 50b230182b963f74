//! Discrete signal types: crossover events, divergence points, and the
//! last-bar Buy/Sell classification.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Trading action for the most recent bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Buy,
    Sell,
}

/// Why a signal fired. Fixed enumeration; one reason per signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reason {
    TrendReversal,
    MomentumConfirmation,
    BullishDivergence,
    BearishDivergence,
    Overbought,
    Oversold,
}

impl Reason {
    /// Human-readable label, matching the wording reports use.
    pub fn label(&self) -> &'static str {
        match self {
            Reason::TrendReversal => "Trend Reversal Signal",
            Reason::MomentumConfirmation => "Momentum Confirmation",
            Reason::BullishDivergence => "Bullish Divergence",
            Reason::BearishDivergence => "Bearish Divergence",
            Reason::Overbought => "Overbought Condition",
            Reason::Oversold => "Oversold Condition",
        }
    }
}

/// Classification of the latest bar. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    pub date: NaiveDate,
    pub action: Action,
    pub reason: Reason,
}

/// Direction of a MACD/Signal-line crossover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrossDirection {
    Bullish,
    Bearish,
}

/// A sign change of (MACD - Signal) between adjacent positions.
/// `index` is the position where the new sign first holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossoverEvent {
    pub index: usize,
    pub direction: CrossDirection,
}

/// Kind of price/momentum divergence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DivergenceKind {
    Bullish,
    Bearish,
}

/// A local price extremum whose histogram extremum moved the other way
/// relative to the previous extremum of the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivergencePoint {
    pub index: usize,
    pub kind: DivergenceKind,
}
