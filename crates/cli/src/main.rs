//! Interrupt timeline simulator CLI.
//!
//! This binary runs one trace through the simulator. It performs:
//! 1. **Loading:** Reads the vector table, device table, and optional JSON timing profile.
//! 2. **Simulation:** Streams the trace line by line through the state machine.
//! 3. **Output:** Writes the execution log (default `execution.txt`) and optionally prints statistics.
//!
//! A malformed trace line aborts the run before any output is written.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use clap::builder::PossibleValuesParser;
use tracing_subscriber::EnvFilter;

use intsim_core::config::Config;
use intsim_core::sim::{Simulator, loader};
use intsim_core::stats::STATS_SECTIONS;

#[derive(Parser, Debug)]
#[command(
    name = "intsim",
    author,
    version,
    about = "Interrupt and I/O timeline simulator",
    long_about = "Simulate CPU bursts, system calls, and I/O completions from a trace file.\n\nEach trace line is `ACTIVITY, N` (or `ACTIVITY N`) where ACTIVITY is CPU, SYSCALL, or END_IO.\nThe vector table holds one ISR address per device; the device table one I/O delay per device.\n\nExamples:\n  intsim trace.txt vector_table.txt device_table.txt\n  intsim trace.txt vector_table.txt device_table.txt -o out.txt --stats\n  intsim trace.txt vector_table.txt device_table.txt --stats-section time\n  RUST_LOG=debug intsim trace.txt vector_table.txt device_table.txt"
)]
struct Cli {
    /// Trace file to simulate.
    trace: PathBuf,

    /// Vector table: one ISR address per line, indexed by device number.
    vector_table: PathBuf,

    /// Device table: one I/O delay per line, indexed by device number.
    device_table: PathBuf,

    /// Where to write the execution log.
    #[arg(short, long, default_value = "execution.txt")]
    output: PathBuf,

    /// JSON timing profile overriding the default costs.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print simulation statistics after the run.
    #[arg(long)]
    stats: bool,

    /// Limit printed statistics to these sections (repeatable); implies --stats.
    #[arg(
        long = "stats-section",
        value_name = "SECTION",
        value_parser = PossibleValuesParser::new(STATS_SECTIONS.iter().copied())
    )]
    stats_sections: Vec<String>,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = cmd_run(&cli) {
        eprintln!("\n[!] FATAL: {e}");
        process::exit(1);
    }
}

/// Loads the inputs, runs the trace to completion, and writes the log.
///
/// Nothing is written unless the whole trace parses.
fn cmd_run(cli: &Cli) -> intsim_core::common::Result<()> {
    let config = match &cli.config {
        Some(path) => loader::load_config(path)?,
        None => Config::default(),
    };
    let registry = loader::load_registry(&cli.vector_table, &cli.device_table, &config)?;

    let mut sim = Simulator::new(&config, registry);
    sim.run(loader::open_trace(&cli.trace)?)?;
    let report = sim.finish();

    loader::write_output(&cli.output, &report.log)?;
    if cli.stats || !cli.stats_sections.is_empty() {
        report.stats.print_sections(&cli.stats_sections);
    }
    Ok(())
}
