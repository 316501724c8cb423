//! Batch scan orchestration: fetch -> indicators -> evaluate -> rank
//!
//! One sequential pass over the universe. A single instrument's failure is
//! recorded as a skip and never aborts the scan; only an invalid strategy
//! configuration is fatal, and it is rejected before any instrument is
//! fetched.

use crate::error::{ScanError, SkipReason};
use crate::indicators::{IndicatorSet, MIN_BARS};
use crate::models::instrument::{Instrument, InstrumentUniverse};
use crate::models::signal::Signal;
use crate::models::strategy::StrategyConfig;
use crate::services::market_data::MarketDataProvider;
use crate::services::reporting::ReportingSink;
use crate::signals::aggregation::rank_signals;
use crate::strategies::evaluator::{evaluator_for, StrategyEvaluator};
use serde::Serialize;
use tracing::{info, warn};

/// Outcome of one scan: ranked signals plus the instruments that were
/// excluded, with their reasons kept rather than dropped.
#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub strategy: &'static str,
    pub results: Vec<Signal>,
    pub skipped: Vec<(Instrument, SkipReason)>,
    pub universe_size: usize,
}

impl ScanReport {
    pub fn data_errors(&self) -> usize {
        self.skipped
            .iter()
            .filter(|(_, r)| matches!(r, SkipReason::DataUnavailable { .. }))
            .count()
    }

    pub fn insufficient_history(&self) -> usize {
        self.skipped
            .iter()
            .filter(|(_, r)| matches!(r, SkipReason::InsufficientHistory { .. }))
            .count()
    }

    /// An empty result set is a valid outcome ("no qualifying instrument");
    /// this distinguishes it from every fetch failing.
    pub fn total_data_failure(&self) -> bool {
        self.results.is_empty() && self.universe_size > 0 && self.data_errors() == self.universe_size
    }
}

pub struct Scanner<'a> {
    provider: &'a dyn MarketDataProvider,
    config: StrategyConfig,
}

impl<'a> Scanner<'a> {
    pub fn new(provider: &'a dyn MarketDataProvider, config: StrategyConfig) -> Self {
        Self { provider, config }
    }

    /// Run one full scan over the universe, emitting a progress event per
    /// instrument and handing the ranked report to the sink.
    pub async fn run(
        &self,
        universe: &InstrumentUniverse,
        sink: &mut dyn ReportingSink,
    ) -> Result<ScanReport, ScanError> {
        self.config.validate()?;
        if universe.is_empty() {
            return Err(ScanError::UniverseUnavailable(
                "no instruments in the scan universe".to_string(),
            ));
        }
        let evaluator = evaluator_for(&self.config);
        let total = universe.len();

        info!(
            strategy = self.config.mode_name(),
            universe = total,
            "starting scan"
        );

        let mut results = Vec::new();
        let mut skipped = Vec::new();

        for (i, instrument) in universe.instruments().iter().enumerate() {
            sink.on_progress((i + 1) as f64 / total as f64, &instrument.display_name);

            match self.scan_one(evaluator.as_ref(), instrument).await {
                Ok(signal) => results.push(signal),
                Err(reason) => {
                    warn!(symbol = %instrument.symbol, %reason, "instrument skipped");
                    skipped.push((instrument.clone(), reason));
                }
            }
        }

        let report = ScanReport {
            strategy: self.config.mode_name(),
            results: rank_signals(results),
            skipped,
            universe_size: total,
        };

        info!(
            evaluated = report.results.len(),
            data_errors = report.data_errors(),
            insufficient_history = report.insufficient_history(),
            "scan complete"
        );

        sink.on_report(&report);
        Ok(report)
    }

    async fn scan_one(
        &self,
        evaluator: &dyn StrategyEvaluator,
        instrument: &Instrument,
    ) -> Result<Signal, SkipReason> {
        let fundamentals = self
            .provider
            .fetch_fundamentals(&instrument.symbol)
            .await
            .map_err(|e| SkipReason::DataUnavailable {
                message: e.to_string(),
            })?;

        let history = self
            .provider
            .fetch_history(&instrument.symbol, MIN_BARS)
            .await
            .map_err(|e| SkipReason::DataUnavailable {
                message: e.to_string(),
            })?;

        let indicators = IndicatorSet::compute(&history)?;
        let latest_close = IndicatorSet::latest_close(&history).unwrap_or(0.0);
        let current_price = fundamentals.resolve_price(latest_close);

        Ok(evaluator.evaluate(instrument, current_price, &fundamentals, &indicators))
    }
}
