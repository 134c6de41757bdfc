//! Execution Log.
//!
//! An append-only record of what the simulated machine did and when. Each
//! entry renders as one CSV-like line: `timestamp, duration, description`.

use std::fmt;

/// A single timeline entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    /// Clock value at which the activity starts.
    pub timestamp: u64,
    /// Time the activity occupies.
    pub duration: u64,
    /// Human-readable description of the activity.
    pub description: String,
}

impl LogEntry {
    /// Creates a log entry.
    pub fn new(timestamp: u64, duration: u64, description: impl Into<String>) -> Self {
        Self {
            timestamp,
            duration,
            description: description.into(),
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}",
            self.timestamp, self.duration, self.description
        )
    }
}

/// Ordered sequence of timeline entries produced by one run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecutionLog {
    entries: Vec<LogEntry>,
}

impl ExecutionLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one entry.
    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    /// Returns the entries in the order they were appended.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when nothing has been logged.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the whole log, one newline-terminated line per entry.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Extend<LogEntry> for ExecutionLog {
    fn extend<I: IntoIterator<Item = LogEntry>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl fmt::Display for ExecutionLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}
