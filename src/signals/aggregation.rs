//! Deterministic ranking of evaluated signals

use crate::models::signal::Signal;
use std::cmp::Ordering;

/// Order signals for presentation: priority class first, then descending
/// valuation gap where one is defined. The sort is stable, so ties keep
/// their original scan order.
pub fn rank_signals(mut signals: Vec<Signal>) -> Vec<Signal> {
    signals.sort_by(compare);
    signals
}

fn compare(a: &Signal, b: &Signal) -> Ordering {
    a.action
        .priority_class()
        .cmp(&b.action.priority_class())
        .then_with(|| compare_gap(a.gap_rate, b.gap_rate))
}

/// Within a priority class, defined gaps rank before undefined ones and
/// larger gaps rank first. Equal or mutually undefined gaps are a tie.
fn compare_gap(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(ga), Some(gb)) => gb.partial_cmp(&ga).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
