//! Simulation driver, execution log, and file I/O.
//!
//! Provides the [`Simulator`] state machine, the [`ExecutionLog`] it builds,
//! and loaders for the device tables, timing profile, and trace files.

/// Table, profile, and trace loading; log output.
pub mod loader;

/// Timeline entries and their rendering.
pub mod log;

/// Event-driven timeline state machine.
pub mod simulator;

pub use log::{ExecutionLog, LogEntry};
pub use simulator::{SimReport, SimState, Simulator, simulate};
