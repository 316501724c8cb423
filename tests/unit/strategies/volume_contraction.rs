//! Unit tests for the volume contraction strategy

use equitrix::indicators::IndicatorSet;
use equitrix::models::{FundamentalSnapshot, Instrument, SignalAction, VolumeContractionParams};
use equitrix::strategies::{StrategyEvaluator, VolumeContractionStrategy};

fn evaluate(
    price: f64,
    set: &IndicatorSet,
    shrink_ratio: f64,
) -> equitrix::models::Signal {
    let strategy = VolumeContractionStrategy::new(VolumeContractionParams { shrink_ratio });
    let instrument = Instrument::new("2317.TW", "鴻海");
    let fundamentals = FundamentalSnapshot::new("Technology", 10.0, price);
    strategy.evaluate(&instrument, price, &fundamentals, set)
}

#[test]
fn downtrend_is_filtered_first() {
    let set = IndicatorSet {
        ma5: 100.0,
        ma10: 100.0,
        ma20: 100.0,
        ma60: 110.0,
        vol_now: 100.0,
        vol_ma5: 1000.0,
    };
    let signal = evaluate(100.0, &set, 0.7);
    assert_eq!(signal.action, SignalAction::Neutral);
    assert!(signal.rationale.contains("downtrend"));
}

#[test]
fn shrunk_volume_near_support_signals_accumulation() {
    let set = IndicatorSet {
        ma5: 100.0,
        ma10: 99.0,
        ma20: 98.0,
        ma60: 90.0,
        vol_now: 500.0,
        vol_ma5: 1000.0,
    };
    let signal = evaluate(100.5, &set, 0.7);
    assert_eq!(signal.action, SignalAction::AccumulationSignal);
    assert!(signal.rationale.contains("0.5x"));
}

#[test]
fn volume_on_the_threshold_is_not_shrunk() {
    // 700 < 1000 * 0.7 is false: strictly below is required.
    let set = IndicatorSet {
        ma5: 100.0,
        ma10: 100.0,
        ma20: 100.0,
        ma60: 90.0,
        vol_now: 700.0,
        vol_ma5: 1000.0,
    };
    let signal = evaluate(100.0, &set, 0.7);
    assert_eq!(signal.action, SignalAction::Neutral);
    assert!(signal.rationale.contains("volume not contracted"));
}

#[test]
fn shrunk_volume_far_from_support_is_neutral() {
    let set = IndicatorSet {
        ma5: 110.0,
        ma10: 112.0,
        ma20: 108.0,
        ma60: 90.0,
        vol_now: 400.0,
        vol_ma5: 1000.0,
    };
    let signal = evaluate(100.0, &set, 0.7);
    assert_eq!(signal.action, SignalAction::Neutral);
    assert!(signal.rationale.contains("no support"));
}

#[test]
fn ten_day_line_also_counts_as_support() {
    let set = IndicatorSet {
        ma5: 110.0,
        ma10: 100.0,
        ma20: 98.0,
        ma60: 90.0,
        vol_now: 400.0,
        vol_ma5: 1000.0,
    };
    let signal = evaluate(101.0, &set, 0.7);
    assert_eq!(signal.action, SignalAction::AccumulationSignal);
}

#[test]
fn support_band_boundary_is_exclusive() {
    // Exactly 2% away from both lines is not "near".
    let set = IndicatorSet {
        ma5: 100.0,
        ma10: 100.0,
        ma20: 98.0,
        ma60: 90.0,
        vol_now: 400.0,
        vol_ma5: 1000.0,
    };
    let signal = evaluate(102.0, &set, 0.7);
    assert_eq!(signal.action, SignalAction::Neutral);
    assert!(signal.rationale.contains("no support"));
}
