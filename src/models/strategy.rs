//! Strategy configuration models
//!
//! Exactly one variant is active per scan. Parameters are validated against
//! their declared domains up front so a bad configuration is rejected before
//! any instrument is fetched.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Pullback (support retest) parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PullbackParams {
    /// How far above the 20-day line still counts as a retest.
    pub tolerance_ratio: f64,
}

impl Default for PullbackParams {
    fn default() -> Self {
        Self {
            tolerance_ratio: 0.03,
        }
    }
}

/// Volume contraction (accumulation) parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeContractionParams {
    /// Today's volume must come in strictly below `vol_ma5 * shrink_ratio`.
    pub shrink_ratio: f64,
}

impl Default for VolumeContractionParams {
    fn default() -> Self {
        Self { shrink_ratio: 0.7 }
    }
}

/// Momentum / valuation parameters. Bear-market PE for non-Technology
/// sectors is fixed (see `strategies::momentum`), only the bull-side and the
/// Technology bear-side are configurable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MomentumParams {
    pub pe_tech_bull: f64,
    pub pe_tech_bear: f64,
    pub pe_fin_bull: f64,
}

impl Default for MomentumParams {
    fn default() -> Self {
        Self {
            pe_tech_bull: 22.0,
            pe_tech_bear: 14.0,
            pe_fin_bull: 15.0,
        }
    }
}

/// The active strategy with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "PascalCase")]
pub enum StrategyConfig {
    Pullback(PullbackParams),
    VolumeContraction(VolumeContractionParams),
    Momentum(MomentumParams),
}

impl StrategyConfig {
    /// Human-readable name of the active strategy.
    pub fn mode_name(&self) -> &'static str {
        match self {
            StrategyConfig::Pullback(_) => "Pullback",
            StrategyConfig::VolumeContraction(_) => "VolumeContraction",
            StrategyConfig::Momentum(_) => "Momentum",
        }
    }

    /// Check every parameter against its declared domain.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            StrategyConfig::Pullback(p) => {
                check_range("pullback_tolerance_ratio", p.tolerance_ratio, 0.01, 0.05)
            }
            StrategyConfig::VolumeContraction(p) => {
                check_range("volume_shrink_ratio", p.shrink_ratio, 0.3, 1.0)
            }
            StrategyConfig::Momentum(p) => {
                check_range("pe_tech_bull", p.pe_tech_bull, 15.0, 30.0)?;
                check_range("pe_tech_bear", p.pe_tech_bear, 10.0, 20.0)?;
                check_range("pe_fin_bull", p.pe_fin_bull, 10.0, 20.0)
            }
        }
    }
}

fn check_range(
    parameter: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), ConfigError> {
    if !value.is_finite() || value < min || value > max {
        return Err(ConfigError::OutOfRange {
            parameter,
            value,
            min,
            max,
        });
    }
    Ok(())
}
