//! Classified action signals produced by the strategy evaluators

use crate::indicators::IndicatorSet;
use crate::models::instrument::Instrument;
use serde::{Deserialize, Serialize};

/// Action classification for one instrument under the active strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum SignalAction {
    /// Momentum: undervalued with a golden cross.
    StrongBuy,
    /// Momentum: undervalued, momentum confirmed, smaller gap.
    Buy,
    /// Momentum: undervalued but no golden cross yet.
    WatchWeakMomentum,
    /// Momentum: no usable valuation, trend reading only.
    ReferenceTrendOnly,
    /// Momentum: overvalued.
    Avoid,
    /// Pullback: retesting the 20-day line from above.
    PullbackBuy,
    /// Pullback: closed below the 20-day line.
    SupportBroken,
    /// Volume contraction: shrunk volume holding a short-term average.
    AccumulationSignal,
    Neutral,
}

/// Ranking bucket for a signal. Lower ranks first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PriorityClass {
    High = 0,
    Mid = 1,
    Low = 2,
}

impl SignalAction {
    pub fn priority_class(&self) -> PriorityClass {
        match self {
            SignalAction::StrongBuy
            | SignalAction::AccumulationSignal
            | SignalAction::PullbackBuy => PriorityClass::High,
            SignalAction::Buy
            | SignalAction::WatchWeakMomentum
            | SignalAction::ReferenceTrendOnly => PriorityClass::Mid,
            SignalAction::Neutral | SignalAction::SupportBroken | SignalAction::Avoid => {
                PriorityClass::Low
            }
        }
    }
}

/// One evaluated instrument. Created once per (instrument, strategy, config)
/// and not mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signal {
    pub instrument: Instrument,
    pub current_price: f64,
    pub action: SignalAction,
    pub rationale: String,
    /// Valuation gap, defined by the momentum strategy only and only when a
    /// predicted price exists. `None` is a sentinel, never zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap_rate: Option<f64>,
    pub indicators: IndicatorSet,
}

impl Signal {
    pub fn new(
        instrument: Instrument,
        current_price: f64,
        action: SignalAction,
        rationale: String,
        indicators: IndicatorSet,
    ) -> Self {
        Self {
            instrument,
            current_price,
            action,
            rationale,
            gap_rate: None,
            indicators,
        }
    }

    pub fn with_gap_rate(mut self, gap_rate: f64) -> Self {
        self.gap_rate = Some(gap_rate);
        self
    }
}
