//! Unit tests for the scan orchestration loop

use async_trait::async_trait;
use chrono::Utc;
use equitrix::core::Scanner;
use equitrix::error::ScanError;
use equitrix::models::{
    FundamentalSnapshot, Instrument, InstrumentUniverse, MomentumParams, PriceBar, PullbackParams,
    SignalAction, StrategyConfig,
};
use equitrix::services::market_data::{MarketDataProvider, ProviderError};
use equitrix::services::reporting::ReportingSink;
use std::collections::HashMap;

struct FakeProvider {
    fundamentals: HashMap<String, FundamentalSnapshot>,
    histories: HashMap<String, Vec<PriceBar>>,
}

impl FakeProvider {
    fn new() -> Self {
        Self {
            fundamentals: HashMap::new(),
            histories: HashMap::new(),
        }
    }

    fn with_instrument(
        mut self,
        symbol: &str,
        fundamentals: FundamentalSnapshot,
        history: Vec<PriceBar>,
    ) -> Self {
        self.fundamentals.insert(symbol.to_string(), fundamentals);
        self.histories.insert(symbol.to_string(), history);
        self
    }
}

#[async_trait]
impl MarketDataProvider for FakeProvider {
    async fn fetch_fundamentals(&self, symbol: &str) -> Result<FundamentalSnapshot, ProviderError> {
        self.fundamentals
            .get(symbol)
            .cloned()
            .ok_or_else(|| -> ProviderError { format!("no fundamentals for {}", symbol).into() })
    }

    async fn fetch_history(
        &self,
        symbol: &str,
        _min_sessions: usize,
    ) -> Result<Vec<PriceBar>, ProviderError> {
        self.histories
            .get(symbol)
            .cloned()
            .ok_or_else(|| -> ProviderError { format!("no history for {}", symbol).into() })
    }
}

#[derive(Default)]
struct RecordingSink {
    progress: Vec<(f64, String)>,
    reports: usize,
}

impl ReportingSink for RecordingSink {
    fn on_progress(&mut self, fraction_complete: f64, instrument_name: &str) {
        self.progress
            .push((fraction_complete, instrument_name.to_string()));
    }

    fn on_report(&mut self, _report: &equitrix::core::ScanReport) {
        self.reports += 1;
    }
}

fn ramp_bars(count: usize, start: f64) -> Vec<PriceBar> {
    (0..count)
        .map(|i| PriceBar::new(Utc::now(), start + i as f64, 1000.0))
        .collect()
}

fn universe(symbols: &[&str]) -> InstrumentUniverse {
    InstrumentUniverse::new(
        symbols
            .iter()
            .map(|s| Instrument::new(s, s))
            .collect(),
    )
}

fn tech_snapshot(eps: f64, price: f64) -> FundamentalSnapshot {
    FundamentalSnapshot::new("Technology", eps, price)
}

fn pullback_config() -> StrategyConfig {
    StrategyConfig::Pullback(PullbackParams::default())
}

#[tokio::test]
async fn one_failing_instrument_does_not_abort_the_scan() {
    let provider = FakeProvider::new()
        .with_instrument("AAA", tech_snapshot(10.0, 180.0), ramp_bars(60, 100.0))
        .with_instrument("CCC", tech_snapshot(10.0, 180.0), ramp_bars(60, 100.0));
    let scanner = Scanner::new(&provider, pullback_config());
    let mut sink = RecordingSink::default();

    let report = scanner
        .run(&universe(&["AAA", "BBB", "CCC"]), &mut sink)
        .await
        .unwrap();

    assert_eq!(report.results.len(), 2);
    assert_eq!(report.data_errors(), 1);
    assert_eq!(report.insufficient_history(), 0);
    assert!(!report.total_data_failure());
}

#[tokio::test]
async fn short_history_is_counted_separately_from_data_errors() {
    let provider = FakeProvider::new()
        .with_instrument("AAA", tech_snapshot(10.0, 180.0), ramp_bars(59, 100.0))
        .with_instrument("CCC", tech_snapshot(10.0, 180.0), ramp_bars(60, 100.0));
    let scanner = Scanner::new(&provider, pullback_config());
    let mut sink = RecordingSink::default();

    let report = scanner
        .run(&universe(&["AAA", "BBB", "CCC"]), &mut sink)
        .await
        .unwrap();

    assert_eq!(report.results.len(), 1);
    assert_eq!(report.data_errors(), 1);
    assert_eq!(report.insufficient_history(), 1);
}

#[tokio::test]
async fn progress_is_emitted_once_per_instrument() {
    let provider = FakeProvider::new()
        .with_instrument("AAA", tech_snapshot(10.0, 180.0), ramp_bars(60, 100.0));
    let scanner = Scanner::new(&provider, pullback_config());
    let mut sink = RecordingSink::default();

    scanner
        .run(&universe(&["AAA", "BBB"]), &mut sink)
        .await
        .unwrap();

    assert_eq!(sink.progress.len(), 2);
    assert_eq!(sink.progress[0].0, 0.5);
    assert_eq!(sink.progress[1].0, 1.0);
    assert_eq!(sink.progress[0].1, "AAA");
    assert_eq!(sink.reports, 1);
}

#[tokio::test]
async fn all_fetches_failing_is_a_total_data_failure() {
    let provider = FakeProvider::new();
    let scanner = Scanner::new(&provider, pullback_config());
    let mut sink = RecordingSink::default();

    let report = scanner
        .run(&universe(&["AAA", "BBB"]), &mut sink)
        .await
        .unwrap();

    assert!(report.results.is_empty());
    assert!(report.total_data_failure());
}

#[tokio::test]
async fn zero_price_sentinel_falls_back_to_latest_close() {
    // Snapshot price unknown; the latest close of the ramp is 159.0.
    let provider = FakeProvider::new()
        .with_instrument("AAA", tech_snapshot(10.0, 0.0), ramp_bars(60, 100.0));
    let scanner = Scanner::new(&provider, pullback_config());
    let mut sink = RecordingSink::default();

    let report = scanner.run(&universe(&["AAA"]), &mut sink).await.unwrap();

    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].current_price, 159.0);
}

#[tokio::test]
async fn results_come_back_ranked_not_in_scan_order() {
    // NEUTRAL's predicted price sits on its quote; STRONG is far below its
    // earnings-implied fair price with a golden cross.
    let provider = FakeProvider::new()
        .with_instrument("NEUTRAL", tech_snapshot(8.2, 180.0), ramp_bars(60, 100.0))
        .with_instrument("STRONG", tech_snapshot(10.0, 180.0), ramp_bars(60, 100.0));
    let config = StrategyConfig::Momentum(MomentumParams::default());
    let scanner = Scanner::new(&provider, config);
    let mut sink = RecordingSink::default();

    let report = scanner
        .run(&universe(&["NEUTRAL", "STRONG"]), &mut sink)
        .await
        .unwrap();

    assert_eq!(report.results[0].instrument.symbol, "STRONG");
    assert_eq!(report.results[0].action, SignalAction::StrongBuy);
    assert_eq!(report.results[1].instrument.symbol, "NEUTRAL");
    assert_eq!(report.results[1].action, SignalAction::Neutral);
}

#[tokio::test]
async fn empty_universe_is_fatal() {
    let provider = FakeProvider::new();
    let scanner = Scanner::new(&provider, pullback_config());
    let mut sink = RecordingSink::default();

    let result = scanner.run(&universe(&[]), &mut sink).await;

    assert!(matches!(result, Err(ScanError::UniverseUnavailable(_))));
    assert!(sink.progress.is_empty());
}

#[tokio::test]
async fn invalid_config_is_fatal_before_any_fetch() {
    let provider = FakeProvider::new();
    let config = StrategyConfig::Pullback(PullbackParams {
        tolerance_ratio: 0.5,
    });
    let scanner = Scanner::new(&provider, config);
    let mut sink = RecordingSink::default();

    let result = scanner.run(&universe(&["AAA"]), &mut sink).await;

    assert!(matches!(result, Err(ScanError::InvalidConfig(_))));
    assert!(sink.progress.is_empty());
}
