//! The closed-loop iteration driving the spectrum toward the target.
//!
//! One step: synthesize, compute the achieved spectrum, inspect. Pass
//! means done; a spent iteration budget means done with the last wave as a
//! best-effort result; otherwise the tuner corrects the amplitudes and the
//! loop repeats. The amplitude vector is the only state carried between
//! iterations, and it moves by value through the tuner, so no component
//! ever sees a stale copy.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::inspector::Inspector;
use crate::response::{SpectrumOracle, DAMPING_RATIO};
use crate::spectrum::Spectrum;
use crate::synthesizer::Synthesizer;
use crate::tuner::Tuner;
use crate::wave::Wave;

/// Default iteration budget.
pub const DEFAULT_ITERATION_LIMIT: usize = 3;

/// Loop parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Fraction of critical damping for the response spectra.
    pub damping: f64,
    /// Maximum number of synthesis iterations.
    pub iteration_limit: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            damping: DAMPING_RATIO,
            iteration_limit: DEFAULT_ITERATION_LIMIT,
        }
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    /// Every acceptance criterion passed.
    Converged,
    /// The iteration budget ran out; the result is the last synthesized
    /// wave. A warning condition, not an error.
    LimitExceeded,
}

/// Result of a matching run.
///
/// A run always produces a wave; callers decide from `status` whether it
/// is spectrum-compatible or merely best-effort.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    /// The final synthesized wave.
    pub wave: Wave,
    /// Achieved spectrum of the final wave on the fitting grid.
    pub spectrum: Spectrum,
    /// Number of synthesis iterations performed.
    pub iterations: usize,
    /// Whether the wave passed every criterion.
    pub status: MatchStatus,
}

/// Orchestrates synthesizer, oracle, inspector and tuner.
#[derive(Debug)]
pub struct Matcher<O: SpectrumOracle> {
    synthesizer: Synthesizer,
    tuner: Tuner,
    inspector: Inspector,
    oracle: O,
    fitting_periods: Vec<f64>,
    config: MatchConfig,
}

impl<O: SpectrumOracle> Matcher<O> {
    /// Wires the loop together.
    ///
    /// The tuner's grid must match the synthesizer's component count: the
    /// amplitude vector is index-aligned with both, and that alignment is
    /// the loop's central correctness invariant.
    ///
    /// # Errors
    /// Configuration errors for misaligned grids, an empty fitting grid,
    /// a zero iteration limit, or an out-of-range damping ratio.
    pub fn new(
        synthesizer: Synthesizer,
        tuner: Tuner,
        inspector: Inspector,
        oracle: O,
        fitting_periods: Vec<f64>,
        config: MatchConfig,
    ) -> EngineResult<Self> {
        if tuner.len() != synthesizer.num_components() {
            return Err(EngineError::AmplitudeLength {
                expected: synthesizer.num_components(),
                found: tuner.len(),
            });
        }
        if fitting_periods.is_empty() {
            return Err(EngineError::empty("fitting grid"));
        }
        if config.iteration_limit == 0 {
            return Err(EngineError::ZeroIterationLimit);
        }
        if !(config.damping > 0.0 && config.damping < 1.0) {
            return Err(EngineError::InvalidDamping {
                damping: config.damping,
            });
        }
        Ok(Self {
            synthesizer,
            tuner,
            inspector,
            oracle,
            fitting_periods,
            config,
        })
    }

    /// The tuner's initial amplitude guess.
    pub fn initial_amplitude(&self) -> Vec<f64> {
        self.tuner.initial_amplitude()
    }

    /// Runs the loop from the given starting amplitudes.
    pub fn run(&self, amplitude: Vec<f64>) -> EngineResult<MatchOutcome> {
        self.run_with_progress(amplitude, |_| {})
    }

    /// Runs the loop, reporting each iteration number before it
    /// synthesizes. The callback is observability only; it cannot affect
    /// the result.
    pub fn run_with_progress(
        &self,
        mut amplitude: Vec<f64>,
        mut progress: impl FnMut(usize),
    ) -> EngineResult<MatchOutcome> {
        let mut count = 0;
        loop {
            count += 1;
            progress(count);

            let wave = self.synthesizer.synthesize(&amplitude)?;
            let achieved =
                self.oracle
                    .compute(&wave, &self.fitting_periods, self.config.damping)?;

            if self.inspector.inspect(&achieved) {
                return Ok(MatchOutcome {
                    wave,
                    spectrum: achieved,
                    iterations: count,
                    status: MatchStatus::Converged,
                });
            }
            if count >= self.config.iteration_limit {
                return Ok(MatchOutcome {
                    wave,
                    spectrum: achieved,
                    iterations: count,
                    status: MatchStatus::LimitExceeded,
                });
            }

            // The correction must see the spectrum at the synthesis grid,
            // not the denser fitting grid the inspector judges on.
            let tuning_spectrum =
                self.oracle
                    .compute(&wave, self.tuner.periods(), self.config.damping)?;
            amplitude = self.tuner.tune(&amplitude, tuning_spectrum.sa())?;
        }
    }

    /// Criterion-by-criterion verdicts for an achieved spectrum.
    pub fn report(&self, achieved: &Spectrum) -> Vec<crate::inspector::CriterionOutcome> {
        self.inspector.report(achieved)
    }
}
