//! Unit tests for strategy configuration validation

use equitrix::error::ConfigError;
use equitrix::models::{
    MomentumParams, PullbackParams, StrategyConfig, VolumeContractionParams,
};

#[test]
fn defaults_are_valid() {
    assert!(StrategyConfig::Pullback(PullbackParams::default())
        .validate()
        .is_ok());
    assert!(
        StrategyConfig::VolumeContraction(VolumeContractionParams::default())
            .validate()
            .is_ok()
    );
    assert!(StrategyConfig::Momentum(MomentumParams::default())
        .validate()
        .is_ok());
}

#[test]
fn pullback_tolerance_domain_is_inclusive() {
    for tolerance in [0.01, 0.05] {
        let config = StrategyConfig::Pullback(PullbackParams {
            tolerance_ratio: tolerance,
        });
        assert!(config.validate().is_ok());
    }
}

#[test]
fn pullback_tolerance_outside_domain_is_rejected() {
    for tolerance in [0.005, 0.06, f64::NAN] {
        let config = StrategyConfig::Pullback(PullbackParams {
            tolerance_ratio: tolerance,
        });
        match config.validate() {
            Err(ConfigError::OutOfRange { parameter, .. }) => {
                assert_eq!(parameter, "pullback_tolerance_ratio");
            }
            other => panic!("expected OutOfRange, got {:?}", other),
        }
    }
}

#[test]
fn shrink_ratio_outside_domain_is_rejected() {
    for ratio in [0.2, 1.1] {
        let config = StrategyConfig::VolumeContraction(VolumeContractionParams {
            shrink_ratio: ratio,
        });
        assert!(config.validate().is_err());
    }
}

#[test]
fn momentum_pe_domains_are_checked_individually() {
    let bad_bull = StrategyConfig::Momentum(MomentumParams {
        pe_tech_bull: 31.0,
        ..MomentumParams::default()
    });
    match bad_bull.validate() {
        Err(ConfigError::OutOfRange { parameter, .. }) => assert_eq!(parameter, "pe_tech_bull"),
        other => panic!("expected OutOfRange, got {:?}", other),
    }

    let bad_fin = StrategyConfig::Momentum(MomentumParams {
        pe_fin_bull: 9.0,
        ..MomentumParams::default()
    });
    match bad_fin.validate() {
        Err(ConfigError::OutOfRange { parameter, .. }) => assert_eq!(parameter, "pe_fin_bull"),
        other => panic!("expected OutOfRange, got {:?}", other),
    }
}

#[test]
fn mode_names_match_variants() {
    assert_eq!(
        StrategyConfig::Pullback(PullbackParams::default()).mode_name(),
        "Pullback"
    );
    assert_eq!(
        StrategyConfig::VolumeContraction(VolumeContractionParams::default()).mode_name(),
        "VolumeContraction"
    );
    assert_eq!(
        StrategyConfig::Momentum(MomentumParams::default()).mode_name(),
        "Momentum"
    );
}
