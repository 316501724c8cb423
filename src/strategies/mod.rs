//! Strategy evaluation: one trait, three rule variants

pub mod evaluator;
pub mod momentum;
pub mod pullback;
pub mod volume_contraction;

pub use evaluator::{evaluator_for, StrategyEvaluator};
pub use momentum::MomentumStrategy;
pub use pullback::PullbackStrategy;
pub use volume_contraction::VolumeContractionStrategy;
