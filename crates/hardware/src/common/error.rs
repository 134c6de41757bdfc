//! Simulation error definitions.
//!
//! This module defines the failures the simulator can surface. It provides:
//! 1. **Trace Failures:** Malformed trace lines, the only fatal path of a simulation run.
//! 2. **Table Failures:** Malformed device-table entries found while loading configuration.
//! 3. **I/O and Config Failures:** File access and JSON timing-profile errors.
//!
//! Unknown activities, unconfigured devices, and orphan I/O completions are not
//! errors; the simulator absorbs them into deterministic fallbacks.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SimError>;

/// Errors surfaced by trace parsing, table loading, and output writing.
#[derive(Debug, Error)]
pub enum SimError {
    /// A trace line whose operand is missing or is not a non-negative integer.
    #[error("trace line {line}: {reason} in {text:?}")]
    TraceParse {
        /// 1-based line number within the trace (0 when parsed standalone).
        line: usize,
        /// The offending line, verbatim.
        text: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// A device-table line that is not a non-negative integer delay.
    #[error("device table line {line}: invalid delay {text:?}")]
    DeviceTable {
        /// 1-based line number within the device table.
        line: usize,
        /// The offending line, trimmed.
        text: String,
    },

    /// Reading or writing a file failed.
    #[error("{}: {source}", path.display())]
    Io {
        /// Path of the file being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The JSON timing profile could not be deserialized.
    #[error("invalid timing profile: {0}")]
    Config(#[from] serde_json::Error),
}

impl SimError {
    /// Attaches a trace line number to a parse failure produced without one.
    ///
    /// Other variants are returned unchanged.
    pub fn at_line(self, line_no: usize) -> Self {
        match self {
            Self::TraceParse { text, reason, .. } => Self::TraceParse {
                line: line_no,
                text,
                reason,
            },
            other => other,
        }
    }
}
