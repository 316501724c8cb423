//! Momentum strategy: earnings-based fair price plus golden-cross momentum

use crate::indicators::IndicatorSet;
use crate::models::instrument::Instrument;
use crate::models::market::FundamentalSnapshot;
use crate::models::signal::{Signal, SignalAction};
use crate::models::strategy::MomentumParams;
use crate::strategies::evaluator::StrategyEvaluator;

/// Fixed bear-market PE for Financial Services. Inherited heuristic, not a
/// verified sector taxonomy; see DESIGN.md before changing either constant.
const PE_FIN_BEAR: f64 = 10.0;
/// Fixed bear-market PE for every sector outside Technology and Financial
/// Services.
const PE_OTHER_BEAR: f64 = 9.0;

/// Valuation gap above which a setup is considered undervalued enough to act.
const GAP_STRONG: f64 = 0.15;
/// Smaller gap that still qualifies when momentum confirms.
const GAP_MODERATE: f64 = 0.05;
/// Gap below which the instrument is flagged overvalued.
const GAP_OVERVALUED: f64 = -0.15;

pub struct MomentumStrategy {
    params: MomentumParams,
}

impl MomentumStrategy {
    pub fn new(params: MomentumParams) -> Self {
        Self { params }
    }

    /// Bull/bear target PE pair for a sector bucket. Only two sector strings
    /// are recognized; everything else shares the fallback bucket.
    fn pe_bucket(&self, sector: &str) -> (f64, f64) {
        match sector {
            "Technology" => (self.params.pe_tech_bull, self.params.pe_tech_bear),
            "Financial Services" => (self.params.pe_fin_bull, PE_FIN_BEAR),
            _ => (self.params.pe_fin_bull, PE_OTHER_BEAR),
        }
    }
}

impl StrategyEvaluator for MomentumStrategy {
    fn name(&self) -> &'static str {
        "momentum"
    }

    fn evaluate(
        &self,
        instrument: &Instrument,
        current_price: f64,
        fundamentals: &FundamentalSnapshot,
        indicators: &IndicatorSet,
    ) -> Signal {
        let is_bull_trend = current_price > indicators.ma60;
        let is_golden_cross = indicators.ma5 > indicators.ma20;

        // No earnings basis for index proxies or non-positive EPS.
        let predicted_price = if fundamentals.trailing_eps > 0.0 && !instrument.index_proxy {
            let (pe_bull, pe_bear) = self.pe_bucket(&fundamentals.sector);
            let target_pe = if is_bull_trend { pe_bull } else { pe_bear };
            fundamentals.trailing_eps * target_pe
        } else {
            0.0
        };

        if predicted_price <= 0.0 || current_price <= 0.0 {
            let trend = if is_bull_trend { "up" } else { "down" };
            return Signal::new(
                instrument.clone(),
                current_price,
                SignalAction::ReferenceTrendOnly,
                format!("no usable valuation, trend reference only ({})", trend),
                *indicators,
            );
        }

        let gap_rate = (predicted_price - current_price) / current_price;
        let gap_pct = gap_rate * 100.0;

        let (action, rationale) = if gap_rate > GAP_STRONG && is_golden_cross {
            (
                SignalAction::StrongBuy,
                format!("undervalued {:.1}% with golden cross", gap_pct),
            )
        } else if gap_rate > GAP_STRONG {
            (
                SignalAction::WatchWeakMomentum,
                format!("undervalued {:.1}% but momentum not confirmed", gap_pct),
            )
        } else if gap_rate > GAP_MODERATE && is_golden_cross {
            (
                SignalAction::Buy,
                format!("undervalued {:.1}% with golden cross", gap_pct),
            )
        } else if gap_rate < GAP_OVERVALUED {
            (
                SignalAction::Avoid,
                format!("overvalued ({:.1}% above fair price)", -gap_pct),
            )
        } else {
            (
                SignalAction::Neutral,
                format!("near fair value ({:.1}% gap)", gap_pct),
            )
        };

        Signal::new(instrument.clone(), current_price, action, rationale, *indicators)
            .with_gap_rate(gap_rate)
    }
}
