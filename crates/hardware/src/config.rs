//! Configuration system for the interrupt timeline simulator.
//!
//! This module defines the timing profile injected into the simulator. It provides:
//! 1. **Defaults:** The reference constants from [`crate::common::constants`].
//! 2. **Timing:** Clock start, interrupt boilerplate costs, ISR body, IRET, and default device delay.
//! 3. **Vectors:** Vector-table layout and the ISR token reported for unmapped devices.
//!
//! Configuration is supplied as JSON (every field optional) or use `Config::default()`
//! for the reference profile.

use serde::Deserialize;

use crate::common::constants;

/// Default configuration constants for the simulator.
///
/// These values define the reference timing profile when not
/// explicitly overridden in a JSON profile.
mod defaults {
    use crate::common::constants;

    pub const START_TIME: u64 = constants::START_TIME;
    pub const CONTEXT_SAVE: u64 = constants::CONTEXT_SAVE;
    pub const ISR_ACTIVITY: u64 = constants::ISR_ACTIVITY;
    pub const IRET: u64 = constants::IRET;
    pub const DEFAULT_IO_DELAY: u64 = constants::DEFAULT_IO_DELAY;

    /// Mode switch, vector lookup, and ISR load are folded into the context-save
    /// cost in the reference profile, so each is free on its own.
    pub const KERNEL_SWITCH: u64 = 0;
    pub const VECTOR_LOOKUP: u64 = 0;
    pub const ISR_LOAD: u64 = 0;

    pub const VECTOR_TABLE_BASE: u64 = constants::VECTOR_TABLE_BASE;
    pub const VECTOR_ENTRY_SIZE: u64 = constants::VECTOR_ENTRY_SIZE;
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// Creating the reference profile:
///
/// ```
/// use intsim_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.timing.start_time, 100);
/// assert_eq!(config.timing.boilerplate_cost(), 10);
/// ```
///
/// Deserializing a partial JSON profile:
///
/// ```
/// use intsim_core::config::Config;
///
/// let json = r#"{
///     "timing": { "context_save": 20, "isr_activity": 40 },
///     "vectors": { "unmapped_isr": "0xFFFF" }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.timing.context_save, 20);
/// assert_eq!(config.timing.isr_activity, 40);
/// assert_eq!(config.timing.iret, 1);
/// assert_eq!(config.vectors.unmapped_isr, "0xFFFF");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Clock and interrupt-handling costs
    #[serde(default)]
    pub timing: TimingConfig,
    /// Vector-table layout
    #[serde(default)]
    pub vectors: VectorConfig,
}

/// Durations charged by each step of the simulated timeline.
///
/// All values are in simulated milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TimingConfig {
    /// Clock value before the first trace event
    #[serde(default = "TimingConfig::default_start_time")]
    pub start_time: u64,

    /// Switching the CPU into kernel mode
    #[serde(default = "TimingConfig::default_kernel_switch")]
    pub kernel_switch: u64,

    /// Saving the interrupted context
    #[serde(default = "TimingConfig::default_context_save")]
    pub context_save: u64,

    /// Locating the device's vector in the vector table
    #[serde(default = "TimingConfig::default_vector_lookup")]
    pub vector_lookup: u64,

    /// Loading the ISR address into the PC
    #[serde(default = "TimingConfig::default_isr_load")]
    pub isr_load: u64,

    /// Body of the device driver run on a system call
    #[serde(default = "TimingConfig::default_isr_activity")]
    pub isr_activity: u64,

    /// Return from interrupt
    #[serde(default = "TimingConfig::default_iret")]
    pub iret: u64,

    /// I/O delay for devices missing from the device table
    #[serde(default = "TimingConfig::default_io_delay")]
    pub default_io_delay: u64,
}

impl TimingConfig {
    fn default_start_time() -> u64 {
        defaults::START_TIME
    }

    fn default_kernel_switch() -> u64 {
        defaults::KERNEL_SWITCH
    }

    fn default_context_save() -> u64 {
        defaults::CONTEXT_SAVE
    }

    fn default_vector_lookup() -> u64 {
        defaults::VECTOR_LOOKUP
    }

    fn default_isr_load() -> u64 {
        defaults::ISR_LOAD
    }

    fn default_isr_activity() -> u64 {
        defaults::ISR_ACTIVITY
    }

    fn default_iret() -> u64 {
        defaults::IRET
    }

    fn default_io_delay() -> u64 {
        defaults::DEFAULT_IO_DELAY
    }

    /// Total clock advance of one interrupt boilerplate sequence.
    ///
    /// Equals `context_save` under the reference profile.
    pub const fn boilerplate_cost(&self) -> u64 {
        self.kernel_switch
            .saturating_add(self.context_save)
            .saturating_add(self.vector_lookup)
            .saturating_add(self.isr_load)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            start_time: defaults::START_TIME,
            kernel_switch: defaults::KERNEL_SWITCH,
            context_save: defaults::CONTEXT_SAVE,
            vector_lookup: defaults::VECTOR_LOOKUP,
            isr_load: defaults::ISR_LOAD,
            isr_activity: defaults::ISR_ACTIVITY,
            iret: defaults::IRET,
            default_io_delay: defaults::DEFAULT_IO_DELAY,
        }
    }
}

/// Vector-table layout used when logging vector lookups.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VectorConfig {
    /// Memory position of vector 0
    #[serde(default = "VectorConfig::default_base")]
    pub base: u64,

    /// Size of one vector-table entry in bytes
    #[serde(default = "VectorConfig::default_entry_size")]
    pub entry_size: u64,

    /// ISR token reported for devices missing from the vector table
    #[serde(default = "VectorConfig::default_unmapped_isr")]
    pub unmapped_isr: String,
}

impl VectorConfig {
    fn default_base() -> u64 {
        defaults::VECTOR_TABLE_BASE
    }

    fn default_entry_size() -> u64 {
        defaults::VECTOR_ENTRY_SIZE
    }

    fn default_unmapped_isr() -> String {
        constants::UNMAPPED_ISR.to_owned()
    }
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            base: defaults::VECTOR_TABLE_BASE,
            entry_size: defaults::VECTOR_ENTRY_SIZE,
            unmapped_isr: constants::UNMAPPED_ISR.to_owned(),
        }
    }
}
