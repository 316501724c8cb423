//! Common evaluation contract over the strategy variants

use crate::indicators::IndicatorSet;
use crate::models::instrument::Instrument;
use crate::models::market::FundamentalSnapshot;
use crate::models::signal::Signal;
use crate::models::strategy::StrategyConfig;
use crate::strategies::{MomentumStrategy, PullbackStrategy, VolumeContractionStrategy};

/// Stateless classification of one instrument's indicator snapshot and
/// fundamentals into a [`Signal`]. Exactly one implementation is active per
/// scan.
pub trait StrategyEvaluator: Send + Sync {
    fn name(&self) -> &'static str;

    fn evaluate(
        &self,
        instrument: &Instrument,
        current_price: f64,
        fundamentals: &FundamentalSnapshot,
        indicators: &IndicatorSet,
    ) -> Signal;
}

/// Select the evaluator for the active strategy, once per scan.
pub fn evaluator_for(config: &StrategyConfig) -> Box<dyn StrategyEvaluator> {
    match config {
        StrategyConfig::Pullback(params) => Box::new(PullbackStrategy::new(*params)),
        StrategyConfig::VolumeContraction(params) => {
            Box::new(VolumeContractionStrategy::new(*params))
        }
        StrategyConfig::Momentum(params) => Box::new(MomentumStrategy::new(*params)),
    }
}

/// Signed relative distance of `price` from a moving-average level.
/// `None` when the denominator is not positive.
pub(crate) fn bias_ratio(price: f64, ma: f64) -> Option<f64> {
    if ma > 0.0 {
        Some((price - ma) / ma)
    } else {
        None
    }
}
