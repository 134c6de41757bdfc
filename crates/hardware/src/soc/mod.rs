//! Simulated I/O devices.
//!
//! This module holds the device-side state of the simulated machine. It provides:
//! 1. **Registry:** Read-only ISR addresses and I/O delays per device number.
//! 2. **Completion Tracking:** Absolute I/O completion times scheduled by system calls.

/// Pending I/O completion times per device.
pub mod completion;

/// Per-device ISR addresses and I/O delays.
pub mod registry;

pub use completion::{Completion, CompletionTracker};
pub use registry::DeviceRegistry;
