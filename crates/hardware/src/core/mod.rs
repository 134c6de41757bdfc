//! Simulated CPU interrupt machinery.
//!
//! This module contains the processor-side sequence shared by every interrupt:
//! mode switch, context save, vector lookup, and ISR load.

/// Interrupt boilerplate generation.
pub mod dispatcher;

pub use self::dispatcher::InterruptDispatcher;
