//! Pullback strategy: buy a retest of the 20-day line inside a long uptrend

use crate::indicators::IndicatorSet;
use crate::models::instrument::Instrument;
use crate::models::market::FundamentalSnapshot;
use crate::models::signal::{Signal, SignalAction};
use crate::models::strategy::PullbackParams;
use crate::strategies::evaluator::{bias_ratio, StrategyEvaluator};

pub struct PullbackStrategy {
    params: PullbackParams,
}

impl PullbackStrategy {
    pub fn new(params: PullbackParams) -> Self {
        Self { params }
    }
}

impl StrategyEvaluator for PullbackStrategy {
    fn name(&self) -> &'static str {
        "pullback"
    }

    fn evaluate(
        &self,
        instrument: &Instrument,
        current_price: f64,
        _fundamentals: &FundamentalSnapshot,
        indicators: &IndicatorSet,
    ) -> Signal {
        // Trend filter: only long setups above the seasonal (60-day) line.
        if current_price <= indicators.ma60 {
            return Signal::new(
                instrument.clone(),
                current_price,
                SignalAction::Neutral,
                "downtrend (below seasonal support)".to_string(),
                *indicators,
            );
        }

        let (action, rationale) = match bias_ratio(current_price, indicators.ma20) {
            Some(bias20) if bias20 > 0.0 && bias20 < self.params.tolerance_ratio => (
                SignalAction::PullbackBuy,
                format!(
                    "retesting 20-day support ({:.1}% above)",
                    bias20 * 100.0
                ),
            ),
            Some(bias20) if bias20 < 0.0 => (
                SignalAction::SupportBroken,
                "20-day support broken, stand aside".to_string(),
            ),
            // bias20 == 0 and bias20 >= tolerance both land here, as does an
            // unusable 20-day average.
            Some(bias20) => (
                SignalAction::Neutral,
                format!("deviation too large ({:.1}%)", bias20 * 100.0),
            ),
            None => (
                SignalAction::Neutral,
                "deviation too large".to_string(),
            ),
        };

        Signal::new(instrument.clone(), current_price, action, rationale, *indicators)
    }
}
