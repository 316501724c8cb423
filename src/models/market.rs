//! Market data models: price history bars and fundamental snapshots

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One daily bar of a chronologically ordered history series. Immutable once
/// fetched for a scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: DateTime<Utc>,
    pub close: f64,
    pub volume: f64,
}

impl PriceBar {
    pub fn new(date: DateTime<Utc>, close: f64, volume: f64) -> Self {
        Self {
            date,
            close,
            volume,
        }
    }
}

/// Fundamental snapshot for one instrument, fetched once per scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundamentalSnapshot {
    pub sector: String,
    pub trailing_eps: f64,
    /// `0.0` is a sentinel meaning "unknown"; resolve with
    /// [`FundamentalSnapshot::resolve_price`].
    pub current_price: f64,
}

impl FundamentalSnapshot {
    pub fn new(sector: &str, trailing_eps: f64, current_price: f64) -> Self {
        Self {
            sector: sector.to_string(),
            trailing_eps,
            current_price,
        }
    }

    /// Current price, falling back to the latest close when the snapshot
    /// carries the unknown sentinel.
    pub fn resolve_price(&self, latest_close: f64) -> f64 {
        if self.current_price == 0.0 {
            latest_close
        } else {
            self.current_price
        }
    }
}
