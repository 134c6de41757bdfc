//! Table loading and output writing.
//!
//! This module moves data between files and the simulator. It performs:
//! 1. **Vector table:** One ISR address token per line; line index is the device number.
//! 2. **Device table:** One I/O delay per line; line index is the device number.
//! 3. **Timing profile:** Optional JSON [`Config`].
//! 4. **Trace:** Opens the trace as a lazy [`TraceSource`].
//! 5. **Output:** Writes the rendered execution log.
//!
//! Blank lines in either table are skipped and do not consume a device number.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use tracing::info;

use crate::common::{Result, SimError};
use crate::config::Config;
use crate::sim::log::ExecutionLog;
use crate::soc::DeviceRegistry;
use crate::trace::TraceSource;

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses vector-table text into ISR address tokens.
pub fn parse_vector_table(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Parses device-table text into I/O delays.
///
/// # Errors
///
/// Returns [`SimError::DeviceTable`] for the first line that is not a
/// non-negative integer.
pub fn parse_device_table(text: &str) -> Result<Vec<u64>> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_no, line)| {
            line.parse().map_err(|_| SimError::DeviceTable {
                line: line_no,
                text: line.to_owned(),
            })
        })
        .collect()
}

/// Reads ISR address tokens from a vector-table file.
///
/// # Errors
///
/// Returns [`SimError::Io`] if the file cannot be read.
pub fn load_vector_table(path: impl AsRef<Path>) -> Result<Vec<String>> {
    Ok(parse_vector_table(&read(path.as_ref())?))
}

/// Reads I/O delays from a device-table file.
///
/// # Errors
///
/// Returns [`SimError::Io`] if the file cannot be read, or
/// [`SimError::DeviceTable`] for a malformed delay.
pub fn load_device_table(path: impl AsRef<Path>) -> Result<Vec<u64>> {
    parse_device_table(&read(path.as_ref())?)
}

/// Builds a [`DeviceRegistry`] from a vector-table file and a device-table file.
///
/// # Errors
///
/// Propagates any error from [`load_vector_table`] or [`load_device_table`].
pub fn load_registry(
    vector_table: impl AsRef<Path>,
    device_table: impl AsRef<Path>,
    config: &Config,
) -> Result<DeviceRegistry> {
    let vectors = load_vector_table(vector_table)?;
    let delays = load_device_table(device_table)?;
    info!(
        vectors = vectors.len(),
        devices = delays.len(),
        "loaded device tables"
    );
    Ok(DeviceRegistry::new(vectors, delays, config))
}

/// Reads a JSON timing profile. Missing fields take their defaults.
///
/// # Errors
///
/// Returns [`SimError::Io`] if the file cannot be read, or
/// [`SimError::Config`] if it is not a valid profile.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config> {
    Ok(serde_json::from_str(&read(path.as_ref())?)?)
}

/// Opens a trace file for lazy, line-by-line simulation.
///
/// # Errors
///
/// Returns [`SimError::Io`] if the file cannot be opened.
pub fn open_trace(path: impl AsRef<Path>) -> Result<TraceSource<BufReader<File>>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(TraceSource::new(BufReader::new(file), path))
}

/// Writes the rendered execution log to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`SimError::Io`] if the file cannot be written.
pub fn write_output(path: impl AsRef<Path>, log: &ExecutionLog) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, log.render()).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), entries = log.len(), "wrote execution log");
    Ok(())
}
