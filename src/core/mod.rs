//! Core orchestration (the batch scan loop)

pub mod scanner;

pub use scanner::{ScanReport, Scanner};
