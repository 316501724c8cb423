//! External collaborator seams (market data, reporting)

pub mod market_data;
pub mod reporting;
pub mod yahoo;

pub use market_data::MarketDataProvider;
pub use reporting::{ConsoleSink, JsonSink, ReportingSink};
pub use yahoo::YahooMarketDataProvider;
