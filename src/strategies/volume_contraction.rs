//! Volume contraction strategy: shrunk turnover holding a short-term average

use crate::indicators::IndicatorSet;
use crate::models::instrument::Instrument;
use crate::models::market::FundamentalSnapshot;
use crate::models::signal::{Signal, SignalAction};
use crate::models::strategy::VolumeContractionParams;
use crate::strategies::evaluator::{bias_ratio, StrategyEvaluator};

/// Price within this distance of the 5- or 10-day line counts as "holding
/// support".
const SUPPORT_BAND: f64 = 0.02;

pub struct VolumeContractionStrategy {
    params: VolumeContractionParams,
}

impl VolumeContractionStrategy {
    pub fn new(params: VolumeContractionParams) -> Self {
        Self { params }
    }
}

impl StrategyEvaluator for VolumeContractionStrategy {
    fn name(&self) -> &'static str {
        "volume_contraction"
    }

    fn evaluate(
        &self,
        instrument: &Instrument,
        current_price: f64,
        _fundamentals: &FundamentalSnapshot,
        indicators: &IndicatorSet,
    ) -> Signal {
        if current_price <= indicators.ma60 {
            return Signal::new(
                instrument.clone(),
                current_price,
                SignalAction::Neutral,
                "downtrend (below seasonal support)".to_string(),
                *indicators,
            );
        }

        // Strictly below the shrink threshold; exactly on it is NOT shrunk.
        let vol_shrink = indicators.vol_now < indicators.vol_ma5 * self.params.shrink_ratio;

        let near_support = [indicators.ma5, indicators.ma10]
            .iter()
            .any(|&ma| matches!(bias_ratio(current_price, ma), Some(b) if b.abs() < SUPPORT_BAND));

        let (action, rationale) = if vol_shrink && near_support {
            let vol_ratio = if indicators.vol_ma5 > 0.0 {
                indicators.vol_now / indicators.vol_ma5
            } else {
                0.0
            };
            (
                SignalAction::AccumulationSignal,
                format!("volume contracted ({:.1}x of 5-day) holding support", vol_ratio),
            )
        } else if !vol_shrink {
            (SignalAction::Neutral, "volume not contracted".to_string())
        } else {
            (
                SignalAction::Neutral,
                "deviation too large / no support".to_string(),
            )
        };

        Signal::new(instrument.clone(), current_price, action, rationale, *indicators)
    }
}
