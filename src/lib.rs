//! Equitrix - rule-based screening engine for the TW50 universe
//!
//! Scans a fixed universe of listed instruments against one of three
//! strategies (pullback, volume contraction, valuation/momentum), classifies
//! each instrument into an action signal and ranks the results for review.

pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;
pub mod strategies;
