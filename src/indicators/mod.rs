//! Technical indicator calculation (moving averages of price and volume)

pub mod moving_average;

pub use moving_average::{sma_close, sma_volume, IndicatorSet, MIN_BARS};
