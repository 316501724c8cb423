//! Equitrix scan binary
//!
//! Runs one full scan of the TW50 universe under the strategy selected via
//! environment variables and prints the ranked table.

use dotenvy::dotenv;
use equitrix::config::{self, ReportFormat};
use equitrix::core::Scanner;
use equitrix::logging;
use equitrix::models::InstrumentUniverse;
use equitrix::services::{ConsoleSink, JsonSink, ReportingSink, YahooMarketDataProvider};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let strategy = config::strategy_from_env()?;
    let universe = InstrumentUniverse::tw50();

    info!(
        strategy = strategy.mode_name(),
        universe = universe.len(),
        "starting equitrix scan"
    );

    let provider = YahooMarketDataProvider::new();
    let scanner = Scanner::new(&provider, strategy);
    let mut sink: Box<dyn ReportingSink> = match config::report_format_from_env()? {
        ReportFormat::Table => Box::new(ConsoleSink::new()),
        ReportFormat::Json => Box::new(JsonSink),
    };

    let report = scanner.run(&universe, sink.as_mut()).await?;

    if report.total_data_failure() {
        warn!("all instruments failed to fetch; no data this scan");
    }

    Ok(())
}
