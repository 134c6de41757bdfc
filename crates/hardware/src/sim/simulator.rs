//! Simulator: owns the clock, the device state, and the execution log.
//!
//! The simulator is a fold over trace events. Each event moves it out of
//! [`SimState::Idle`] into the state that handles it, appends that event's
//! timeline entries, advances the clock by exactly the time those entries
//! account for, and returns to `Idle`. Exhausting the event source moves it
//! to [`SimState::Done`].
//!
//! Clock arithmetic saturates at `u64::MAX`, so the clock never moves
//! backwards even under an extreme timing profile.

use tracing::{debug, info};

use crate::common::Result;
use crate::config::{Config, TimingConfig};
use crate::core::InterruptDispatcher;
use crate::sim::log::{ExecutionLog, LogEntry};
use crate::soc::{Completion, CompletionTracker, DeviceRegistry};
use crate::stats::SimStats;
use crate::trace::{TraceEvent, parse_line};

/// Phase of the simulator's state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimState {
    /// Waiting for the next event.
    Idle,
    /// Accounting a CPU burst.
    RunningCpu,
    /// Handling a system call interrupt.
    HandlingSyscall,
    /// Handling an end-of-I/O interrupt.
    HandlingEndIo,
    /// Event source exhausted.
    Done,
}

/// Output of a finished run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimReport {
    /// Every timeline entry, in order.
    pub log: ExecutionLog,
    /// Time attribution and event counts.
    pub stats: SimStats,
}

/// Top-level interrupt timeline simulator.
#[derive(Debug)]
pub struct Simulator {
    timing: TimingConfig,
    registry: DeviceRegistry,
    dispatcher: InterruptDispatcher,
    completions: CompletionTracker,
    clock: u64,
    state: SimState,
    log: ExecutionLog,
    stats: SimStats,
}

impl Simulator {
    /// Creates a simulator with the clock at the configured start time.
    ///
    /// # Arguments
    ///
    /// * `config` - Timing profile and vector-table layout.
    /// * `registry` - Device tables; immutable for the lifetime of the simulator.
    pub fn new(config: &Config, registry: DeviceRegistry) -> Self {
        let timing = config.timing.clone();
        Self {
            dispatcher: InterruptDispatcher::new(&timing),
            clock: timing.start_time,
            stats: SimStats::new(timing.start_time),
            timing,
            registry,
            completions: CompletionTracker::new(),
            state: SimState::Idle,
            log: ExecutionLog::new(),
        }
    }

    /// Current simulation clock.
    pub const fn clock(&self) -> u64 {
        self.clock
    }

    /// Current state-machine phase.
    pub const fn state(&self) -> SimState {
        self.state
    }

    /// Timeline entries appended so far.
    pub const fn log(&self) -> &ExecutionLog {
        &self.log
    }

    /// Statistics gathered so far.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Pending I/O completion times recorded by system calls.
    pub const fn completions(&self) -> &CompletionTracker {
        &self.completions
    }

    /// Device tables the simulator was built with.
    pub const fn registry(&self) -> &DeviceRegistry {
        &self.registry
    }

    /// Appends an entry starting at the current clock and advances the clock
    /// by its duration.
    fn emit(&mut self, duration: u64, description: impl Into<String>) {
        self.log.push(LogEntry::new(self.clock, duration, description));
        self.clock = self.clock.saturating_add(duration);
    }

    fn boilerplate(&mut self, device: u64) {
        let (entries, end) = self
            .dispatcher
            .run_boilerplate(self.clock, device, &self.registry);
        self.log.extend(entries);
        self.stats.time_overhead = self
            .stats
            .time_overhead
            .saturating_add(end - self.clock);
        self.clock = end;
    }

    fn note_device(&mut self, device: u64) {
        if !self.registry.has_delay(device) {
            self.stats.unconfigured_devices += 1;
        }
    }

    /// Processes a single trace event.
    pub fn step(&mut self, event: &TraceEvent) {
        debug!(clock = self.clock, %event, "processing trace event");

        match event {
            TraceEvent::Cpu { duration } => {
                self.state = SimState::RunningCpu;
                self.emit(*duration, "CPU burst");
                self.stats.cpu_bursts += 1;
                self.stats.time_cpu = self.stats.time_cpu.saturating_add(*duration);
            }
            TraceEvent::Syscall { device } => {
                let device = *device;
                self.state = SimState::HandlingSyscall;
                self.note_device(device);

                self.boilerplate(device);
                self.emit(
                    self.timing.isr_activity,
                    format!("execute ISR for device {device}"),
                );
                self.emit(self.timing.iret, "IRET");

                let delay = self.registry.io_delay(device);
                let end_time = self.completions.schedule(device, self.clock, delay);
                debug!(device, end_time, "scheduled I/O completion");

                self.stats.syscalls += 1;
                self.stats.time_isr = self
                    .stats
                    .time_isr
                    .saturating_add(self.timing.isr_activity);
                self.stats.time_overhead = self
                    .stats
                    .time_overhead
                    .saturating_add(self.timing.iret);
            }
            TraceEvent::EndIo { device } => {
                let device = *device;
                self.state = SimState::HandlingEndIo;
                self.note_device(device);

                let delay = self.registry.io_delay(device);
                // Only the configured delay is charged; the resolved
                // completion time does not feed the timeline.
                if let Completion::Orphan(end_time) =
                    self.completions.resolve(device, self.clock, delay)
                {
                    debug!(device, end_time, "END_IO without prior SYSCALL");
                    self.stats.orphan_end_ios += 1;
                }

                self.boilerplate(device);
                self.emit(delay, format!("end of I/O {device}: interrupt"));
                self.emit(self.timing.iret, "IRET");

                self.stats.end_ios += 1;
                self.stats.time_io = self.stats.time_io.saturating_add(delay);
                self.stats.time_overhead = self
                    .stats
                    .time_overhead
                    .saturating_add(self.timing.iret);
            }
            TraceEvent::Unknown { activity } => {
                self.emit(0, format!("Unknown activity: {activity}"));
                self.stats.unknown_events += 1;
            }
        }

        self.stats.end_time = self.clock;
        self.state = SimState::Idle;
    }

    /// Consumes events until the source is exhausted, then enters
    /// [`SimState::Done`].
    ///
    /// # Errors
    ///
    /// Returns the first error yielded by `events`. No later events are
    /// processed and the simulator stays in its last `Idle` state.
    pub fn run<I>(&mut self, events: I) -> Result<()>
    where
        I: IntoIterator<Item = Result<TraceEvent>>,
    {
        for event in events {
            self.step(&event?);
        }
        self.state = SimState::Done;
        info!(
            clock = self.clock,
            entries = self.log.len(),
            events = self.stats.events(),
            "trace exhausted"
        );
        Ok(())
    }

    /// Hands over the execution log and statistics.
    pub fn finish(self) -> SimReport {
        SimReport {
            log: self.log,
            stats: self.stats,
        }
    }
}

/// Simulates a whole trace held in memory.
///
/// Blank lines are skipped. Nothing is returned unless every line parses.
///
/// # Errors
///
/// Returns [`SimError::TraceParse`](crate::common::SimError::TraceParse)
/// for the first malformed line, with its 1-based line number.
///
/// # Examples
///
/// ```
/// use intsim_core::config::Config;
/// use intsim_core::sim::simulate;
/// use intsim_core::soc::DeviceRegistry;
///
/// let config = Config::default();
/// let registry = DeviceRegistry::new(Vec::new(), Vec::new(), &config);
/// let report = simulate(&config, registry, "CPU 50\nFOO 9\n").unwrap();
/// assert_eq!(report.log.render(), "100, 50, CPU burst\n150, 0, Unknown activity: FOO\n");
/// ```
pub fn simulate(config: &Config, registry: DeviceRegistry, trace: &str) -> Result<SimReport> {
    let events = trace
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_line(line).map_err(|e| e.at_line(i + 1)));

    let mut sim = Simulator::new(config, registry);
    sim.run(events)?;
    Ok(sim.finish())
}
