//! Signal post-processing: ranking for presentation

pub mod aggregation;

pub use aggregation::rank_signals;
