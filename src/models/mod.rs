//! Shared data models spanning the engine layers.

pub mod instrument;
pub mod market;
pub mod signal;
pub mod strategy;

pub use instrument::{Instrument, InstrumentUniverse};
pub use market::{FundamentalSnapshot, PriceBar};
pub use signal::{PriorityClass, Signal, SignalAction};
pub use strategy::{MomentumParams, PullbackParams, StrategyConfig, VolumeContractionParams};
