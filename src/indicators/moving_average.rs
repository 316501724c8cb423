//! Trailing simple moving averages evaluated at the most recent bar

use crate::error::SkipReason;
use crate::models::market::PriceBar;
use serde::{Deserialize, Serialize};

/// Largest window any strategy reads; histories shorter than this are
/// rejected before evaluation.
pub const MIN_BARS: usize = 60;

/// Mean of the last `window` closes.
pub fn sma_close(bars: &[PriceBar], window: usize) -> Option<f64> {
    trailing_mean(bars, window, |b| b.close)
}

/// Mean of the last `window` volumes.
pub fn sma_volume(bars: &[PriceBar], window: usize) -> Option<f64> {
    trailing_mean(bars, window, |b| b.volume)
}

fn trailing_mean(bars: &[PriceBar], window: usize, field: impl Fn(&PriceBar) -> f64) -> Option<f64> {
    if window == 0 || bars.len() < window {
        return None;
    }
    let sum: f64 = bars[bars.len() - window..].iter().map(field).sum();
    Some(sum / window as f64)
}

/// Moving averages derived from one instrument's history, all evaluated at
/// the most recent bar. Derived per scan, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub ma5: f64,
    pub ma10: f64,
    pub ma20: f64,
    pub ma60: f64,
    pub vol_now: f64,
    pub vol_ma5: f64,
}

impl IndicatorSet {
    /// Compute all windows from an ordered history. Bars older than the
    /// largest window never affect the result.
    pub fn compute(bars: &[PriceBar]) -> Result<Self, SkipReason> {
        if bars.len() < MIN_BARS {
            return Err(SkipReason::InsufficientHistory {
                have: bars.len(),
                need: MIN_BARS,
            });
        }
        // Every window is <= MIN_BARS, so the fallbacks below are unreachable.
        let ma5 = sma_close(bars, 5).unwrap_or(0.0);
        let ma10 = sma_close(bars, 10).unwrap_or(0.0);
        let ma20 = sma_close(bars, 20).unwrap_or(0.0);
        let ma60 = sma_close(bars, 60).unwrap_or(0.0);
        let vol_now = bars.last().map(|b| b.volume).unwrap_or(0.0);
        let vol_ma5 = sma_volume(bars, 5).unwrap_or(0.0);

        Ok(Self {
            ma5,
            ma10,
            ma20,
            ma60,
            vol_now,
            vol_ma5,
        })
    }

    pub fn latest_close(bars: &[PriceBar]) -> Option<f64> {
        bars.last().map(|b| b.close)
    }
}
