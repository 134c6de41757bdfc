//! Interrupt Dispatcher.
//!
//! Produces the boilerplate every interrupt goes through before its handler
//! body runs:
//! 1. **Mode switch:** Enter kernel mode.
//! 2. **Context save:** Save the interrupted context.
//! 3. **Vector lookup:** Find the device's slot in the vector table.
//! 4. **ISR load:** Load the ISR address into the PC.
//!
//! The sequence is identical for system calls and end-of-I/O interrupts; the
//! dispatcher keeps no memory of what triggered it.

use crate::config::TimingConfig;
use crate::sim::log::LogEntry;
use crate::soc::DeviceRegistry;

/// Stateless generator of interrupt boilerplate.
#[derive(Clone, Debug)]
pub struct InterruptDispatcher {
    kernel_switch: u64,
    context_save: u64,
    vector_lookup: u64,
    isr_load: u64,
}

impl InterruptDispatcher {
    /// Creates a dispatcher charging the boilerplate costs of `timing`.
    pub const fn new(timing: &TimingConfig) -> Self {
        Self {
            kernel_switch: timing.kernel_switch,
            context_save: timing.context_save,
            vector_lookup: timing.vector_lookup,
            isr_load: timing.isr_load,
        }
    }

    /// Runs the boilerplate for `device` starting at `now`.
    ///
    /// # Arguments
    ///
    /// * `now` - Clock value when the interrupt is taken.
    /// * `device` - Device number whose vector is looked up.
    /// * `registry` - Source of the ISR address; unmapped devices get the default token.
    ///
    /// # Returns
    ///
    /// The four log entries, in order, and the clock value after the sequence.
    pub fn run_boilerplate(
        &self,
        now: u64,
        device: u64,
        registry: &DeviceRegistry,
    ) -> (Vec<LogEntry>, u64) {
        let mut time = now;
        let mut log = Vec::with_capacity(4);

        log.push(LogEntry::new(time, self.kernel_switch, "switch to kernel mode"));
        time = time.saturating_add(self.kernel_switch);

        log.push(LogEntry::new(time, self.context_save, "context saved"));
        time = time.saturating_add(self.context_save);

        log.push(LogEntry::new(
            time,
            self.vector_lookup,
            format!(
                "find vector {device} in memory position {}",
                registry.vector_position(device)
            ),
        ));
        time = time.saturating_add(self.vector_lookup);

        log.push(LogEntry::new(
            time,
            self.isr_load,
            format!("load address {} into the PC", registry.isr_address(device)),
        ));
        time = time.saturating_add(self.isr_load);

        (log, time)
    }
}
