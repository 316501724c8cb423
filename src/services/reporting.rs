//! Reporting sink interface and console implementation

use crate::core::scanner::ScanReport;
use crate::models::signal::SignalAction;
use tracing::error;

/// Presentation collaborator: receives scan progress and the final ranked
/// report. Observational only, no computational effect on the scan.
pub trait ReportingSink: Send {
    /// One event per processed instrument, before it is evaluated.
    fn on_progress(&mut self, fraction_complete: f64, instrument_name: &str);

    /// The ranked report, once per scan.
    fn on_report(&mut self, report: &ScanReport);
}

/// Prints a ranked table to stdout, in the spirit of the original report
/// view.
pub struct ConsoleSink {
    show_progress: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            show_progress: true,
        }
    }

    pub fn quiet() -> Self {
        Self {
            show_progress: false,
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportingSink for ConsoleSink {
    fn on_progress(&mut self, fraction_complete: f64, instrument_name: &str) {
        if self.show_progress {
            eprintln!(
                "[{:>3.0}%] scanning {}",
                fraction_complete * 100.0,
                instrument_name
            );
        }
    }

    fn on_report(&mut self, report: &ScanReport) {
        println!();
        println!("Scan results ({})", report.strategy);
        println!(
            "{:<8} {:<12} {:>10} {:<20} {:<44} {:>8} {:>8} {:>8}",
            "Symbol", "Name", "Price", "Action", "Rationale", "MA5", "MA20", "MA60"
        );
        for signal in &report.results {
            println!(
                "{:<8} {:<12} {:>10.1} {:<20} {:<44} {:>8.1} {:>8.1} {:>8.1}",
                signal.instrument.short_symbol(),
                signal.instrument.display_name,
                signal.current_price,
                action_label(signal.action),
                signal.rationale,
                signal.indicators.ma5,
                signal.indicators.ma20,
                signal.indicators.ma60,
            );
        }
        println!();
        println!(
            "{} evaluated, {} skipped for data errors, {} skipped for short history",
            report.results.len(),
            report.data_errors(),
            report.insufficient_history()
        );
        if report.total_data_failure() {
            println!("no data received this scan, try again later");
        }
    }
}

/// Emits the ranked report as one JSON document on stdout, for piping into
/// other tools. Progress events are dropped.
pub struct JsonSink;

impl ReportingSink for JsonSink {
    fn on_progress(&mut self, _fraction_complete: f64, _instrument_name: &str) {}

    fn on_report(&mut self, report: &ScanReport) {
        match serde_json::to_string_pretty(report) {
            Ok(body) => println!("{}", body),
            Err(e) => error!(error = %e, "failed to serialize scan report"),
        }
    }
}

fn action_label(action: SignalAction) -> &'static str {
    match action {
        SignalAction::StrongBuy => "strong buy",
        SignalAction::Buy => "buy",
        SignalAction::WatchWeakMomentum => "watch (no momentum)",
        SignalAction::ReferenceTrendOnly => "trend reference",
        SignalAction::Avoid => "avoid (overvalued)",
        SignalAction::PullbackBuy => "pullback buy",
        SignalAction::SupportBroken => "support broken",
        SignalAction::AccumulationSignal => "accumulation",
        SignalAction::Neutral => "neutral",
    }
}
