//! Simulation statistics collection and reporting.
//!
//! This module tracks where simulated time went during a run. It provides:
//! 1. **Event counts:** CPU bursts, system calls, end-of-I/O interrupts, and unknown activities.
//! 2. **Time attribution:** CPU bursts, ISR bodies, interrupt overhead, and device I/O handling.
//! 3. **Fallbacks:** How often unconfigured devices and orphan I/O completions were absorbed.
//!
//! Statistics never affect the execution log.

/// Simulation statistics structure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Clock value when the run started.
    pub start_time: u64,
    /// Clock value after the last processed event.
    pub end_time: u64,

    /// Number of CPU burst events.
    pub cpu_bursts: u64,
    /// Number of SYSCALL events.
    pub syscalls: u64,
    /// Number of END_IO events.
    pub end_ios: u64,
    /// Number of lines with an unrecognized activity.
    pub unknown_events: u64,

    /// Time spent in CPU bursts.
    pub time_cpu: u64,
    /// Time spent in ISR bodies run by system calls.
    pub time_isr: u64,
    /// Time spent in interrupt boilerplate and IRET.
    pub time_overhead: u64,
    /// Time spent handling end-of-I/O interrupts.
    pub time_io: u64,

    /// Events that referenced a device missing from the device table.
    pub unconfigured_devices: u64,
    /// END_IO events with no prior SYSCALL for their device.
    pub orphan_end_ios: u64,
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"events"`, `"time"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "events", "time"];

impl SimStats {
    /// Creates statistics for a run whose clock starts at `start_time`.
    pub fn new(start_time: u64) -> Self {
        Self {
            start_time,
            end_time: start_time,
            ..Self::default()
        }
    }

    /// Simulated time elapsed since the start of the run.
    pub const fn elapsed(&self) -> u64 {
        self.end_time.saturating_sub(self.start_time)
    }

    /// Total number of processed trace events.
    pub const fn events(&self) -> u64 {
        self.cpu_bursts
            .saturating_add(self.syscalls)
            .saturating_add(self.end_ios)
            .saturating_add(self.unknown_events)
    }

    /// Fraction of elapsed time spent in CPU bursts, in `[0, 1]`.
    ///
    /// Returns 0 for a run that never advanced the clock.
    #[allow(clippy::cast_precision_loss)]
    pub fn cpu_utilization(&self) -> f64 {
        match self.elapsed() {
            0 => 0.0,
            total => self.time_cpu as f64 / total as f64,
        }
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// Each element of `sections` should be one of `"summary"`, `"events"`, or
    /// `"time"`. Pass an empty slice to print all sections (same as `print()`).
    #[allow(clippy::cast_precision_loss)]
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let total = self.elapsed().max(1) as f64;
        let pct = |v: u64| (v as f64 / total) * 100.0;

        if want("summary") {
            println!("\n==========================================================");
            println!("INTERRUPT TIMELINE SIMULATION STATISTICS");
            println!("==========================================================");
            println!("sim_start                {}", self.start_time);
            println!("sim_end                  {}", self.end_time);
            println!("sim_elapsed              {}", self.elapsed());
            println!("sim_events               {}", self.events());
            println!("cpu_utilization          {:.2}%", self.cpu_utilization() * 100.0);
            println!("----------------------------------------------------------");
        }
        if want("events") {
            println!("EVENT MIX");
            println!("  event.cpu              {}", self.cpu_bursts);
            println!("  event.syscall          {}", self.syscalls);
            println!("  event.end_io           {}", self.end_ios);
            println!("  event.unknown          {}", self.unknown_events);
            println!("  fallback.device        {}", self.unconfigured_devices);
            println!("  fallback.orphan_io     {}", self.orphan_end_ios);
            println!("----------------------------------------------------------");
        }
        if want("time") {
            println!("TIME BREAKDOWN");
            println!(
                "  time.cpu               {} ({:.2}%)",
                self.time_cpu,
                pct(self.time_cpu)
            );
            println!(
                "  time.isr               {} ({:.2}%)",
                self.time_isr,
                pct(self.time_isr)
            );
            println!(
                "  time.overhead          {} ({:.2}%)",
                self.time_overhead,
                pct(self.time_overhead)
            );
            println!(
                "  time.io                {} ({:.2}%)",
                self.time_io,
                pct(self.time_io)
            );
        }
        println!("==========================================================");
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
