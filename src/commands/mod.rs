//! Command implementations

pub mod simple;
pub mod simulate;
pub mod status;

pub use simple::{run_simple, run_simple_with};
pub use simulate::{SimulationResult, SimulationRow, run_simulation};
pub use status::{StatusReport, status_report};
