//! Workload trace input.
//!
//! This module turns trace text into typed events. It provides:
//! 1. **Events:** [`TraceEvent`] and its [`Activity`] kind.
//! 2. **Parsing:** [`parse_line`] for a single `ACTIVITY, N` line.
//! 3. **Streaming:** [`TraceSource`], a lazy iterator over a buffered reader.

/// Event types and the single-line parser.
pub mod event;

/// Buffered, line-numbered trace reader.
pub mod source;

pub use event::{Activity, TraceEvent, parse_line};
pub use source::TraceSource;
