//! Unit tests for environment-driven configuration

use equitrix::config::{report_format_from_env, ReportFormat};
use equitrix::error::ConfigError;

#[test]
fn report_format_reads_the_environment() {
    // Single test so the env mutations never race a parallel reader.
    assert_eq!(report_format_from_env().unwrap(), ReportFormat::Table);

    std::env::set_var("REPORT_FORMAT", "json");
    assert_eq!(report_format_from_env().unwrap(), ReportFormat::Json);

    std::env::set_var("REPORT_FORMAT", "TABLE");
    assert_eq!(report_format_from_env().unwrap(), ReportFormat::Table);

    std::env::set_var("REPORT_FORMAT", "yaml");
    match report_format_from_env() {
        Err(ConfigError::Invalid { parameter, .. }) => assert_eq!(parameter, "REPORT_FORMAT"),
        other => panic!("expected Invalid, got {:?}", other),
    }

    std::env::remove_var("REPORT_FORMAT");
}
