//! Result formatting: fixed-width text or CSV.

use std::fmt::Write as _;
use std::fs;
use std::str::FromStr;

use anyhow::{Context, Result};

use specwave_core::{Spectrum, Wave};

/// Output table format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Fixed-width columns.
    Text,
    /// Comma-separated values with a header row.
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Renders a synthesized time history as a `(time, acceleration)` table.
pub fn format_time_history(wave: &Wave, format: OutputFormat) -> String {
    let mut out = String::new();
    match format {
        OutputFormat::Text => {
            out.push_str("   TIME         ACC.\n");
            for (t, a) in wave.time_history() {
                let _ = writeln!(out, "{t:7.2}   {a:10.3}");
            }
        }
        OutputFormat::Csv => {
            out.push_str("Time,Acc.\n");
            for (t, a) in wave.time_history() {
                let _ = writeln!(out, "{t:.2},{a:.3}");
            }
        }
    }
    out
}

/// Renders a response spectrum as a `(period, Sa)` table.
pub fn format_spectrum(spectrum: &Spectrum, format: OutputFormat) -> String {
    let mut out = String::new();
    match format {
        OutputFormat::Text => {
            out.push_str(" PERIOD          SA.\n");
            for (t, sa) in spectrum.periods().iter().zip(spectrum.sa()) {
                let _ = writeln!(out, "{t:7.3}   {sa:10.4}");
            }
        }
        OutputFormat::Csv => {
            out.push_str("Period,Sa\n");
            for (t, sa) in spectrum.periods().iter().zip(spectrum.sa()) {
                let _ = writeln!(out, "{t:.3},{sa:.4}");
            }
        }
    }
    out
}

/// Writes a rendered table to a file, or to stdout when no path is given.
pub fn write_table(path: Option<&str>, body: &str) -> Result<()> {
    match path {
        Some(p) => fs::write(p, body).with_context(|| format!("failed to write {p}")),
        None => {
            print!("{body}");
            Ok(())
        }
    }
}
