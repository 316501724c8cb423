//! Environment-driven configuration for the scan binary

use crate::error::ConfigError;
use crate::models::strategy::{
    MomentumParams, PullbackParams, StrategyConfig, VolumeContractionParams,
};
use std::env;

/// Deployment environment name, used to pick the log format.
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "development".to_string())
}

/// How the scan binary renders the final report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Table,
    Json,
}

/// Report format from `REPORT_FORMAT`, defaulting to the console table.
pub fn report_format_from_env() -> Result<ReportFormat, ConfigError> {
    match env::var("REPORT_FORMAT") {
        Err(_) => Ok(ReportFormat::Table),
        Ok(value) => match value.to_ascii_lowercase().as_str() {
            "table" => Ok(ReportFormat::Table),
            "json" => Ok(ReportFormat::Json),
            _ => Err(ConfigError::Invalid {
                parameter: "REPORT_FORMAT",
                message: format!("expected 'table' or 'json', got '{}'", value),
            }),
        },
    }
}

/// Build and validate the active strategy configuration from environment
/// variables. Unset parameters fall back to their defaults; anything outside
/// its domain is rejected before the scan starts.
pub fn strategy_from_env() -> Result<StrategyConfig, ConfigError> {
    let mode = env::var("STRATEGY_MODE").unwrap_or_else(|_| "Pullback".to_string());

    let config = match mode.to_ascii_lowercase().as_str() {
        "pullback" => {
            let mut params = PullbackParams::default();
            if let Some(v) = env_f64("PULLBACK_TOLERANCE")? {
                params.tolerance_ratio = v;
            }
            StrategyConfig::Pullback(params)
        }
        "volumecontraction" | "volume_contraction" => {
            let mut params = VolumeContractionParams::default();
            if let Some(v) = env_f64("VOL_SHRINK_RATIO")? {
                params.shrink_ratio = v;
            }
            StrategyConfig::VolumeContraction(params)
        }
        "momentum" => {
            let mut params = MomentumParams::default();
            if let Some(v) = env_f64("PE_TECH_BULL")? {
                params.pe_tech_bull = v;
            }
            if let Some(v) = env_f64("PE_TECH_BEAR")? {
                params.pe_tech_bear = v;
            }
            if let Some(v) = env_f64("PE_FIN_BULL")? {
                params.pe_fin_bull = v;
            }
            StrategyConfig::Momentum(params)
        }
        _ => return Err(ConfigError::UnknownMode(mode)),
    };

    config.validate()?;
    Ok(config)
}

fn env_f64(name: &'static str) -> Result<Option<f64>, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .parse::<f64>()
            .map(Some)
            .map_err(|e| ConfigError::Invalid {
                parameter: name,
                message: e.to_string(),
            }),
        Err(_) => Ok(None),
    }
}
