//! Interrupt timeline simulator library.
//!
//! This crate simulates the timing of a uniprocessor that runs CPU bursts and
//! services system calls and I/O completions through interrupts:
//! 1. **Trace:** Parsing `CPU`, `SYSCALL`, and `END_IO` trace lines into typed events.
//! 2. **Devices:** Per-device ISR addresses and I/O delays; pending completion times.
//! 3. **Core:** The interrupt boilerplate (mode switch, context save, vector lookup, ISR load).
//! 4. **Simulation:** The clock-owning state machine, the execution log, and file loaders.
//! 5. **Configuration and statistics:** Injectable timing profiles and per-run time attribution.
//!
//! Runs are deterministic: the same trace, tables, and profile always produce
//! byte-identical output.

/// Common constants and error types.
pub mod common;
/// Timing profile and vector-table layout.
pub mod config;
/// Interrupt boilerplate generation.
pub mod core;
/// Simulator, execution log, and loaders.
pub mod sim;
/// Device registry and completion tracking.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;
/// Trace events, parser, and streaming reader.
pub mod trace;

/// Crate-wide error type.
pub use crate::common::SimError;
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main simulator type; construct with `Simulator::new`.
pub use crate::sim::Simulator;
