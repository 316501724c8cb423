//! Market data provider interface

use crate::models::market::{FundamentalSnapshot, PriceBar};
use async_trait::async_trait;

pub type ProviderError = Box<dyn std::error::Error + Send + Sync>;

/// Supplies, per symbol, a fundamental snapshot and an ordered daily
/// price/volume history. The engine treats any failure here as a
/// per-instrument skip, never as a scan abort.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetch the fundamental snapshot for a symbol. A provider that cannot
    /// resolve a live price returns the `0.0` price sentinel.
    async fn fetch_fundamentals(&self, symbol: &str) -> Result<FundamentalSnapshot, ProviderError>;

    /// Fetch an ordered daily history covering at least `min_sessions`
    /// trading sessions where available.
    async fn fetch_history(
        &self,
        symbol: &str,
        min_sessions: usize,
    ) -> Result<Vec<PriceBar>, ProviderError>;
}
