//! Device Registry.
//!
//! Holds, per device number, the ISR address token from the vector table and
//! the I/O completion delay from the device table. Device numbers index both
//! tables directly. Numbers past the end of a table resolve to a fixed
//! fallback rather than an error, since traces may reference devices that
//! were never configured.

use tracing::debug;

use crate::config::{Config, VectorConfig};

/// Immutable per-device configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceRegistry {
    /// ISR address tokens, indexed by device number.
    vectors: Vec<String>,
    /// I/O completion delays in milliseconds, indexed by device number.
    delays: Vec<u64>,
    /// Delay reported for devices missing from `delays`.
    default_delay: u64,
    /// Vector-table layout and unmapped ISR token.
    layout: VectorConfig,
}

impl DeviceRegistry {
    /// Creates a registry from the two parallel device tables.
    ///
    /// # Arguments
    ///
    /// * `vectors` - ISR address tokens; position is the device number.
    /// * `delays` - I/O delays; position is the device number.
    /// * `config` - Supplies the fallback delay and the vector-table layout.
    pub fn new(vectors: Vec<String>, delays: Vec<u64>, config: &Config) -> Self {
        Self {
            vectors,
            delays,
            default_delay: config.timing.default_io_delay,
            layout: config.vectors.clone(),
        }
    }

    fn index(device: u64) -> Option<usize> {
        usize::try_from(device).ok()
    }

    /// Returns the ISR address token for `device`, or the unmapped token
    /// when the vector table has no entry for it.
    pub fn isr_address(&self, device: u64) -> &str {
        Self::index(device)
            .and_then(|i| self.vectors.get(i))
            .map_or_else(
                || {
                    debug!(device, "no vector-table entry, using unmapped ISR");
                    self.layout.unmapped_isr.as_str()
                },
                String::as_str,
            )
    }

    /// Returns the I/O delay for `device`, or the default delay when the
    /// device table has no entry for it.
    pub fn io_delay(&self, device: u64) -> u64 {
        Self::index(device)
            .and_then(|i| self.delays.get(i))
            .copied()
            .unwrap_or_else(|| {
                debug!(
                    device,
                    delay = self.default_delay,
                    "no device-table entry, using default delay"
                );
                self.default_delay
            })
    }

    /// Returns true when `device` has an entry in the device table.
    pub fn has_delay(&self, device: u64) -> bool {
        Self::index(device).is_some_and(|i| i < self.delays.len())
    }

    /// Returns the memory position of `device`'s vector-table slot,
    /// formatted as four uppercase hex digits (e.g. `0x0004`).
    pub fn vector_position(&self, device: u64) -> String {
        let position = self
            .layout
            .base
            .wrapping_add(device.wrapping_mul(self.layout.entry_size));
        format!("{position:#06X}")
    }

    /// Number of devices with a configured delay.
    pub fn device_count(&self) -> usize {
        self.delays.len()
    }
}
