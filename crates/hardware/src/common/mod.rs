//! Common utilities and types used throughout the interrupt timeline simulator.
//!
//! This module provides the building blocks shared by every component. It includes:
//! 1. **Constants:** The reference timing profile and vector-table layout.
//! 2. **Error Handling:** The crate-wide [`SimError`] type and `Result` alias.

/// Reference timing profile and vector-table constants.
pub mod constants;

/// Error types for parsing, loading, and writing.
pub mod error;

pub use error::{Result, SimError};
