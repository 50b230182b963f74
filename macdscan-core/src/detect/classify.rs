//! Last-bar signal classification.
//!
//! Four rules are evaluated in a fixed order over the final bar, and every
//! applicable rule overwrites the running result: last-wins, not first-match.
//! The rule list is an explicit ordered array folded top-to-bottom so each
//! rule stays auditable and testable in isolation.
//!
//! Because the raw-MACD-sign rule runs last, it dominates whenever MACD is
//! nonzero at the final bar, leaving the earlier rules reachable only when
//! MACD is exactly zero. That precedence is preserved deliberately for
//! parity with the system this replaces; see DESIGN.md.

use crate::domain::{
    Action, CrossDirection, CrossoverEvent, DivergenceKind, DivergencePoint, Reason,
};

/// Indicator state the rules read. All slices are aligned with series
/// positions; `last_index` is the final position.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub last_index: usize,
    pub macd: &'a [f64],
    pub histogram: &'a [f64],
    pub crossovers: &'a [CrossoverEvent],
    pub divergences: &'a [DivergencePoint],
}

type Rule = fn(&RuleContext) -> Option<(Action, Reason)>;

/// Priority-ordered rule list. Later entries overwrite earlier results.
const RULES: [Rule; 4] = [
    trend_reversal,
    momentum_confirmation,
    divergence,
    macd_sign,
];

/// Classify the final bar. `None` when no rule fires — distinct from any
/// Buy/Sell, and the usual outcome for a series still inside warm-up.
pub fn classify_last_bar(ctx: &RuleContext) -> Option<(Action, Reason)> {
    RULES.iter().fold(None, |acc, rule| rule(ctx).or(acc))
}

/// Rule 1: a crossover on the final bar.
fn trend_reversal(ctx: &RuleContext) -> Option<(Action, Reason)> {
    let event = ctx.crossovers.iter().find(|c| c.index == ctx.last_index)?;
    Some(match event.direction {
        CrossDirection::Bullish => (Action::Buy, Reason::TrendReversal),
        CrossDirection::Bearish => (Action::Sell, Reason::TrendReversal),
    })
}

/// Rule 2: histogram sign and direction over the last two bars.
fn momentum_confirmation(ctx: &RuleContext) -> Option<(Action, Reason)> {
    if ctx.last_index == 0 {
        return None;
    }
    let cur = ctx.histogram.get(ctx.last_index).copied()?;
    let prev = ctx.histogram.get(ctx.last_index - 1).copied()?;
    if cur.is_nan() || prev.is_nan() {
        return None;
    }

    if cur > 0.0 && cur > prev {
        Some((Action::Buy, Reason::MomentumConfirmation))
    } else if cur < 0.0 && cur < prev {
        Some((Action::Sell, Reason::MomentumConfirmation))
    } else {
        None
    }
}

/// Rule 3: a divergence flagged on the final bar. Bullish checked first,
/// matching the source system's if/elif ordering.
fn divergence(ctx: &RuleContext) -> Option<(Action, Reason)> {
    let at_last: Vec<DivergenceKind> = ctx
        .divergences
        .iter()
        .filter(|d| d.index == ctx.last_index)
        .map(|d| d.kind)
        .collect();

    if at_last.contains(&DivergenceKind::Bullish) {
        Some((Action::Buy, Reason::BullishDivergence))
    } else if at_last.contains(&DivergenceKind::Bearish) {
        Some((Action::Sell, Reason::BearishDivergence))
    } else {
        None
    }
}

/// Rule 4: raw MACD sign. Evaluated last, so it wins whenever MACD is
/// nonzero at the final bar.
fn macd_sign(ctx: &RuleContext) -> Option<(Action, Reason)> {
    let macd = ctx.macd.get(ctx.last_index).copied()?;
    if macd.is_nan() {
        return None;
    }

    if macd > 0.0 {
        Some((Action::Buy, Reason::Overbought))
    } else if macd < 0.0 {
        Some((Action::Sell, Reason::Oversold))
    } else {
        None
    }
}
