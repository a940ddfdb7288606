//! Generate command implementation
//!
//! Loads a design spectrum, runs the matching loop, and writes the
//! synthesized time history.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;

use specwave_core::{
    grid, interp, phase, Envelope, Inspector, MatchConfig, MatchOutcome, MatchStatus, Matcher,
    ResponseOracle, Spectrum, Synthesizer, Tuner, DAMPING_RATIO,
};

use crate::input::load_design_spectrum;
use crate::output::{format_time_history, write_table, OutputFormat};

/// Machine-readable run report for `--json`.
#[derive(Debug, Serialize)]
struct RunReport {
    status: MatchStatus,
    iterations: usize,
    num_samples: usize,
    dt: f64,
    duration: f64,
    seed: u32,
    peak_acceleration: f64,
    criteria: Vec<CriterionReport>,
}

#[derive(Debug, Serialize)]
struct CriterionReport {
    name: &'static str,
    passed: bool,
}

/// Run the generate command
///
/// # Arguments
/// * `spec_path` - Path to the design spectrum CSV
/// * `duration` - Time-history length in seconds
/// * `dt` - Sampling interval in seconds
/// * `envelope_name` - Envelope selector (id, level1, level2)
/// * `seed` - Seed for the phase draw
/// * `iterations` - Iteration budget for the matching loop
/// * `format` - Table format for the time history (text or csv)
/// * `output` - Output file path (stdout when omitted)
/// * `json` - Emit a machine-readable run report instead of status lines
///
/// # Returns
/// Exit code 0 on any completed run, including best-effort non-convergence.
#[allow(clippy::too_many_arguments)]
pub fn run(
    spec_path: &str,
    duration: f64,
    dt: f64,
    envelope_name: &str,
    seed: u32,
    iterations: usize,
    format: &str,
    output: Option<&str>,
    json: bool,
) -> Result<ExitCode> {
    let format: OutputFormat = format.parse().map_err(anyhow::Error::msg)?;
    let envelope = Envelope::from_name(envelope_name)?;
    if !(duration > 0.0) {
        bail!("duration must be positive, got {duration}");
    }
    if !(dt > 0.0) || duration < dt {
        bail!("dt must be positive and no longer than the duration, got {dt}");
    }

    let (raw_periods, raw_sa) = load_design_spectrum(Path::new(spec_path))?;

    // Resample the design spectrum onto both grids: the synthesis grid
    // feeds the tuner, the denser fitting grid feeds the inspector.
    let synth_periods = grid::synthesis_periods();
    let fitting_periods = grid::fitting_periods();
    let target_synth = interp::interpolate(&raw_periods, &raw_sa, &synth_periods)
        .context("design spectrum does not cover the synthesis period range")?;
    let target_fit = interp::interpolate(&raw_periods, &raw_sa, &fitting_periods)
        .context("design spectrum does not cover the fitting period range")?;

    let num_samples = (duration / dt) as usize;
    let phases = phase::phase_angles_for_seed(seed, synth_periods.len());
    let synthesizer =
        Synthesizer::from_periods(dt, num_samples, &synth_periods, &phases, envelope)?;
    let tuner = Tuner::new(synth_periods, target_synth)?;
    let inspector = Inspector::new(Spectrum::new(fitting_periods.clone(), target_fit)?);

    let matcher = Matcher::new(
        synthesizer,
        tuner,
        inspector,
        ResponseOracle::new(),
        fitting_periods,
        MatchConfig {
            damping: DAMPING_RATIO,
            iteration_limit: iterations,
        },
    )?;

    let initial = matcher.initial_amplitude();
    let outcome = if json {
        matcher.run(initial)?
    } else {
        matcher.run_with_progress(initial, |i| {
            eprintln!("{} {}/{}", "iteration".dimmed(), i, iterations);
        })?
    };

    if json {
        print_json_report(&matcher, &outcome, seed)?;
    } else {
        print_status(&outcome);
    }

    // In report-only mode the wave is written when a path is given.
    if !(json && output.is_none()) {
        let body = format_time_history(&outcome.wave, format);
        write_table(output, &body)?;
    }

    Ok(ExitCode::SUCCESS)
}

fn print_status(outcome: &MatchOutcome) {
    match outcome.status {
        MatchStatus::Converged => {
            eprintln!(
                "{} spectrum matched after {} iteration(s)",
                "converged:".green().bold(),
                outcome.iterations
            );
        }
        MatchStatus::LimitExceeded => {
            eprintln!(
                "{} iteration limit reached after {} iteration(s); result is best-effort",
                "warning:".yellow().bold(),
                outcome.iterations
            );
        }
    }
}

fn print_json_report(
    matcher: &Matcher<ResponseOracle>,
    outcome: &MatchOutcome,
    seed: u32,
) -> Result<()> {
    let criteria = matcher
        .report(&outcome.spectrum)
        .into_iter()
        .map(|o| CriterionReport {
            name: o.criterion.name(),
            passed: o.passed,
        })
        .collect();
    let report = RunReport {
        status: outcome.status,
        iterations: outcome.iterations,
        num_samples: outcome.wave.len(),
        dt: outcome.wave.dt(),
        duration: outcome.wave.duration(),
        seed,
        peak_acceleration: outcome.wave.peak(),
        criteria,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
