//! CSV ingestion for design spectra and recorded time histories.
//!
//! Both inputs are two-column tables with a header row: `(period, Sa)` for
//! a design spectrum, `(time, acceleration)` for a wave. Rows are parsed
//! in file order; a malformed row is an error with its line number, never
//! silently skipped.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use specwave_core::Wave;

/// Parses a two-column CSV body, skipping the header row.
pub fn parse_two_columns(text: &str) -> Result<(Vec<f64>, Vec<f64>)> {
    let mut first = Vec::new();
    let mut second = Vec::new();

    for (idx, line) in text.lines().enumerate().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let row = idx + 1;
        let mut fields = line.split(',');
        let a = fields
            .next()
            .with_context(|| format!("row {row}: missing first column"))?;
        let b = fields
            .next()
            .with_context(|| format!("row {row}: missing second column"))?;
        let a: f64 = a
            .trim()
            .parse()
            .with_context(|| format!("row {row}: invalid number '{}'", a.trim()))?;
        let b: f64 = b
            .trim()
            .parse()
            .with_context(|| format!("row {row}: invalid number '{}'", b.trim()))?;
        first.push(a);
        second.push(b);
    }
    Ok((first, second))
}

/// Loads a design spectrum: `(period, Sa)` rows, period > 0, Sa >= 0.
///
/// The rows need not be sorted; interpolation orders them. At least two
/// rows are required to interpolate anything.
pub fn load_design_spectrum(path: &Path) -> Result<(Vec<f64>, Vec<f64>)> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read design spectrum: {}", path.display()))?;
    let (periods, sa) = parse_two_columns(&text)
        .with_context(|| format!("malformed design spectrum: {}", path.display()))?;

    if periods.len() < 2 {
        bail!(
            "design spectrum {} needs at least 2 rows, found {}",
            path.display(),
            periods.len()
        );
    }
    for (i, (&t, &v)) in periods.iter().zip(&sa).enumerate() {
        if !(t > 0.0) || !t.is_finite() {
            bail!("design spectrum row {}: period {} must be positive", i + 2, t);
        }
        if !(v >= 0.0) || !v.is_finite() {
            bail!(
                "design spectrum row {}: Sa {} must be non-negative",
                i + 2,
                v
            );
        }
    }
    Ok((periods, sa))
}

/// Loads a recorded time history: `(time, acceleration)` rows with a
/// uniform sampling interval inferred from the first two rows.
pub fn load_time_history(path: &Path) -> Result<Wave> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read time history: {}", path.display()))?;
    let (times, accel) = parse_two_columns(&text)
        .with_context(|| format!("malformed time history: {}", path.display()))?;

    if times.len() < 2 {
        bail!(
            "time history {} needs at least 2 rows, found {}",
            path.display(),
            times.len()
        );
    }
    let dt = times[1] - times[0];
    if !(dt > 0.0) {
        bail!("time history {}: non-increasing time column", path.display());
    }
    Wave::new(dt, accel).context("invalid time history")
}
