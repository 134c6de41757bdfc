//! Global Simulation Constants.
//!
//! This module defines the fixed values of the reference timing profile. It includes:
//! 1. **Clock Constants:** The simulation start time.
//! 2. **Interrupt Costs:** Context save, ISR body, and return-from-interrupt durations.
//! 3. **Device Constants:** The delay assumed for devices missing from the device table.
//! 4. **Vector Table Layout:** Base address and entry size used to locate ISR vectors.
//!
//! All durations are in simulated milliseconds. The simulator never reads these
//! directly; they seed [`TimingConfig`](crate::config::TimingConfig), which is
//! injected into the simulator so alternative profiles can be tested.

/// Simulation clock value at the start of every run.
pub const START_TIME: u64 = 100;

/// Cost of saving the interrupted context during interrupt boilerplate.
pub const CONTEXT_SAVE: u64 = 10;

/// Duration of the device driver body executed on a system call.
pub const ISR_ACTIVITY: u64 = 165;

/// Duration of the return-from-interrupt step.
pub const IRET: u64 = 1;

/// I/O completion delay for devices without an entry in the device table.
pub const DEFAULT_IO_DELAY: u64 = 100;

/// ISR address reported for devices without an entry in the vector table.
pub const UNMAPPED_ISR: &str = "0x0000";

/// Memory position of vector 0.
pub const VECTOR_TABLE_BASE: u64 = 0x0000;

/// Size in bytes of one vector-table entry.
pub const VECTOR_ENTRY_SIZE: u64 = 2;
