//! Spectrum command implementation
//!
//! Computes the 5%-damped (or caller-chosen) response spectrum of a
//! recorded acceleration history.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use specwave_core::{grid, ResponseOracle, SpectrumOracle};

use crate::input::load_time_history;
use crate::output::{format_spectrum, write_table, OutputFormat};

/// Run the spectrum command
///
/// # Arguments
/// * `input_path` - Path to the time-history CSV
/// * `damping` - Fraction of critical damping
/// * `format` - Table format (text or csv)
/// * `output` - Output file path (stdout when omitted)
pub fn run(
    input_path: &str,
    damping: f64,
    format: &str,
    output: Option<&str>,
) -> Result<ExitCode> {
    let format: OutputFormat = format.parse().map_err(anyhow::Error::msg)?;
    let wave = load_time_history(Path::new(input_path))?;

    eprintln!(
        "{} {} samples at dt = {} s",
        "computing spectrum:".cyan().bold(),
        wave.len(),
        wave.dt()
    );

    let periods = grid::fitting_periods();
    let spectrum = ResponseOracle::new().compute(&wave, &periods, damping)?;

    write_table(output, &format_spectrum(&spectrum, format))?;
    Ok(ExitCode::SUCCESS)
}
