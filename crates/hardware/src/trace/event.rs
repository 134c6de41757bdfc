//! Trace event types and the line parser.
//!
//! A trace line names an activity and a numeric operand, either as
//! `ACTIVITY, N` or `ACTIVITY N`. The operand is a duration for `CPU` and a
//! device number for `SYSCALL` and `END_IO`.

use std::fmt;

use crate::common::{Result, SimError};

/// Kind of a trace event, independent of its operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Activity {
    /// Pure computation burst.
    Cpu,
    /// System call that starts I/O on a device.
    Syscall,
    /// Interrupt signalling that a device finished its I/O.
    EndIo,
    /// Any activity token the simulator does not recognize.
    Unknown,
}

impl Activity {
    /// Maps an activity token to its kind. Matching is exact and case-sensitive.
    pub fn from_token(token: &str) -> Self {
        match token {
            "CPU" => Self::Cpu,
            "SYSCALL" => Self::Syscall,
            "END_IO" => Self::EndIo,
            _ => Self::Unknown,
        }
    }
}

/// One parsed trace line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    /// Run on the CPU for `duration` milliseconds.
    Cpu {
        /// Burst length.
        duration: u64,
    },
    /// Issue a system call to `device`.
    Syscall {
        /// Device number.
        device: u64,
    },
    /// `device` signals I/O completion.
    EndIo {
        /// Device number.
        device: u64,
    },
    /// Unrecognized activity; logged and otherwise ignored.
    Unknown {
        /// The activity token as it appeared in the trace.
        activity: String,
    },
}

impl TraceEvent {
    /// Returns the event kind.
    pub const fn activity(&self) -> Activity {
        match self {
            Self::Cpu { .. } => Activity::Cpu,
            Self::Syscall { .. } => Activity::Syscall,
            Self::EndIo { .. } => Activity::EndIo,
            Self::Unknown { .. } => Activity::Unknown,
        }
    }

    /// Returns the numeric operand: a duration for CPU, a device number for
    /// SYSCALL and END_IO, and 0 for unknown activities.
    pub const fn operand(&self) -> u64 {
        match self {
            Self::Cpu { duration } => *duration,
            Self::Syscall { device } | Self::EndIo { device } => *device,
            Self::Unknown { .. } => 0,
        }
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpu { duration } => write!(f, "CPU {duration}"),
            Self::Syscall { device } => write!(f, "SYSCALL {device}"),
            Self::EndIo { device } => write!(f, "END_IO {device}"),
            Self::Unknown { activity } => write!(f, "{activity} 0"),
        }
    }
}

/// Splits a line into its activity token and operand text.
///
/// The first comma wins; without one, the first whitespace run separates
/// the two halves.
fn split_line(line: &str) -> (&str, Option<&str>) {
    let line = line.trim();
    if let Some((activity, operand)) = line.split_once(',') {
        return (activity.trim(), Some(operand.trim()));
    }
    match line.split_once(char::is_whitespace) {
        Some((activity, operand)) => (activity, Some(operand.trim())),
        None => (line, None),
    }
}

/// Parses one trace line into a [`TraceEvent`].
///
/// The operand is parsed for every line, including ones with an unknown
/// activity. Operands are limited to 32 bits, which keeps any realistic
/// trace far below the 64-bit clock limit. Errors carry line number 0;
/// callers that know the position attach it with [`SimError::at_line`].
///
/// # Errors
///
/// Returns [`SimError::TraceParse`] when the operand is missing, is not a
/// non-negative integer, or does not fit in 32 bits.
///
/// # Examples
///
/// ```
/// use intsim_core::trace::{parse_line, TraceEvent};
///
/// assert_eq!(parse_line("CPU, 50").unwrap(), TraceEvent::Cpu { duration: 50 });
/// assert_eq!(parse_line("END_IO 3").unwrap(), TraceEvent::EndIo { device: 3 });
/// assert!(parse_line("SYSCALL, x").is_err());
/// assert!(parse_line("CPU, 4294967296").is_err());
/// ```
pub fn parse_line(line: &str) -> Result<TraceEvent> {
    let (token, operand) = split_line(line);
    let fail = |reason: &'static str| SimError::TraceParse {
        line: 0,
        text: line.to_owned(),
        reason,
    };

    let operand = match operand {
        Some(text) if !text.is_empty() => text,
        _ => return Err(fail("missing operand")),
    };
    let value: u64 = operand
        .parse()
        .map_err(|_| fail("operand is not a non-negative integer"))?;
    let value = u64::from(u32::try_from(value).map_err(|_| fail("operand out of range"))?);

    Ok(match Activity::from_token(token) {
        Activity::Cpu => TraceEvent::Cpu { duration: value },
        Activity::Syscall => TraceEvent::Syscall { device: value },
        Activity::EndIo => TraceEvent::EndIo { device: value },
        Activity::Unknown => TraceEvent::Unknown {
            activity: token.to_owned(),
        },
    })
}
