//! Yahoo Finance market data provider implementation
//!
//! Uses the public v8 chart endpoint for daily history and the v10
//! quoteSummary endpoint for sector / trailing EPS / live price. Transient
//! failures are retried with exponential backoff; retry policy lives here,
//! outside the engine contract.

use crate::models::market::{FundamentalSnapshot, PriceBar};
use crate::services::market_data::{MarketDataProvider, ProviderError};
use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
const MAX_RETRIES: usize = 2;

/// Smallest chart range covering the requested number of trading sessions,
/// at roughly 21 sessions per month. 60 sessions resolve to the 3-month
/// lookback the original screener used.
fn range_for_sessions(min_sessions: usize) -> &'static str {
    if min_sessions <= 60 {
        "3mo"
    } else if min_sessions <= 120 {
        "6mo"
    } else {
        "1y"
    }
}

pub struct YahooMarketDataProvider {
    client: reqwest::Client,
    base_url: String,
}

impl YahooMarketDataProvider {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the provider at a different host (used by tests to run against
    /// a mock server).
    pub fn with_base_url(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .user_agent("equitrix/0.1")
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ProviderError> {
        let fetch = || async {
            let response = self.client.get(url).send().await?.error_for_status()?;
            response.json::<T>().await
        };
        let parsed = fetch
            .retry(ExponentialBuilder::default().with_max_times(MAX_RETRIES))
            .await?;
        Ok(parsed)
    }
}

impl Default for YahooMarketDataProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketDataProvider for YahooMarketDataProvider {
    async fn fetch_fundamentals(&self, symbol: &str) -> Result<FundamentalSnapshot, ProviderError> {
        let url = format!(
            "{}/v10/finance/quoteSummary/{}?modules=summaryProfile%2CdefaultKeyStatistics%2CfinancialData",
            self.base_url, symbol
        );
        let response: QuoteSummaryResponse = self.get_json(&url).await?;
        let result = response
            .quote_summary
            .result
            .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
            .ok_or_else(|| -> ProviderError {
                format!("no quoteSummary result for {}", symbol).into()
            })?;

        let sector = result
            .summary_profile
            .and_then(|p| p.sector)
            .unwrap_or_else(|| "Unknown".to_string());
        let trailing_eps = result
            .default_key_statistics
            .and_then(|s| s.trailing_eps)
            .and_then(|n| n.raw)
            .unwrap_or(0.0);
        // Missing live price stays at the 0.0 sentinel; the engine falls
        // back to the latest close.
        let current_price = result
            .financial_data
            .and_then(|f| f.current_price)
            .and_then(|n| n.raw)
            .unwrap_or(0.0);

        debug!(symbol, sector = %sector, trailing_eps, current_price, "fetched fundamentals");
        Ok(FundamentalSnapshot {
            sector,
            trailing_eps,
            current_price,
        })
    }

    async fn fetch_history(
        &self,
        symbol: &str,
        min_sessions: usize,
    ) -> Result<Vec<PriceBar>, ProviderError> {
        let url = format!(
            "{}/v8/finance/chart/{}?range={}&interval=1d",
            self.base_url,
            symbol,
            range_for_sessions(min_sessions)
        );
        let response: ChartResponse = self.get_json(&url).await?;
        let result = response
            .chart
            .result
            .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
            .ok_or_else(|| -> ProviderError { format!("no chart result for {}", symbol).into() })?;

        let timestamps = result.timestamp.unwrap_or_default();
        let quote = result
            .indicators
            .quote
            .into_iter()
            .next()
            .unwrap_or_default();

        let mut bars = Vec::with_capacity(timestamps.len());
        for (i, ts) in timestamps.iter().enumerate() {
            // Sessions with no trade come back as nulls; drop them rather
            // than fabricating a bar.
            let close = quote.close.get(i).copied().flatten();
            let volume = quote.volume.get(i).copied().flatten();
            if let (Some(close), Some(date)) = (close, DateTime::<Utc>::from_timestamp(*ts, 0)) {
                bars.push(PriceBar::new(date, close, volume.unwrap_or(0.0)));
            }
        }

        debug!(symbol, bars = bars.len(), "fetched history");
        Ok(bars)
    }
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartEnvelope,
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    quote: Vec<ChartQuote>,
}

#[derive(Debug, Default, Deserialize)]
struct ChartQuote {
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryResponse {
    #[serde(rename = "quoteSummary")]
    quote_summary: QuoteSummaryEnvelope,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryEnvelope {
    result: Option<Vec<QuoteSummaryResult>>,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryResult {
    #[serde(rename = "summaryProfile")]
    summary_profile: Option<SummaryProfile>,
    #[serde(rename = "defaultKeyStatistics")]
    default_key_statistics: Option<KeyStatistics>,
    #[serde(rename = "financialData")]
    financial_data: Option<FinancialData>,
}

#[derive(Debug, Deserialize)]
struct SummaryProfile {
    sector: Option<String>,
}

#[derive(Debug, Deserialize)]
struct KeyStatistics {
    #[serde(rename = "trailingEps")]
    trailing_eps: Option<RawNumber>,
}

#[derive(Debug, Deserialize)]
struct FinancialData {
    #[serde(rename = "currentPrice")]
    current_price: Option<RawNumber>,
}

#[derive(Debug, Deserialize)]
struct RawNumber {
    raw: Option<f64>,
}
