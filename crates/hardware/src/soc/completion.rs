//! Device Completion Tracker.
//!
//! Records, per device, the absolute time at which its outstanding I/O will
//! finish. A system call schedules (or reschedules) the completion; an
//! end-of-I/O interrupt reads it back.

use std::collections::HashMap;

/// How an end-of-I/O interrupt resolved its completion time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    /// A prior system call scheduled this completion time.
    Scheduled(u64),
    /// No system call was seen for the device; completion is `now + delay`.
    Orphan(u64),
}

impl Completion {
    /// The resolved absolute completion time.
    pub const fn time(self) -> u64 {
        match self {
            Self::Scheduled(t) | Self::Orphan(t) => t,
        }
    }
}

/// Mapping from device number to pending I/O completion time.
#[derive(Clone, Debug, Default)]
pub struct CompletionTracker {
    pending: HashMap<u64, u64>,
}

impl CompletionTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `device`'s completion at `now + delay`, replacing any
    /// completion already pending for it. Returns the scheduled time.
    pub fn schedule(&mut self, device: u64, now: u64, delay: u64) -> u64 {
        let end_time = now.saturating_add(delay);
        let _ = self.pending.insert(device, end_time);
        end_time
    }

    /// Resolves the completion time for an end-of-I/O on `device`.
    ///
    /// The entry is left in place; only a later system call replaces it.
    pub fn resolve(&self, device: u64, now: u64, delay: u64) -> Completion {
        self.pending
            .get(&device)
            .map_or(Completion::Orphan(now.saturating_add(delay)), |&t| {
                Completion::Scheduled(t)
            })
    }

    /// Returns the pending completion for `device`, if any system call
    /// scheduled one.
    pub fn pending(&self, device: u64) -> Option<u64> {
        self.pending.get(&device).copied()
    }

    /// Number of devices with a recorded completion.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns true when no system call has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
