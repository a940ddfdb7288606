//! Per-frequency amplitude seeding and correction.
//!
//! The tuner owns the synthesis-grid view of the target spectrum. It
//! produces the initial amplitude guess before any synthesis, and between
//! iterations applies a proportional correction that scales each component
//! by `target/achieved` at its own period. The correction assumes each
//! spectral ordinate responds near-linearly to its own component and
//! ignores cross-coupling, so convergence is typical but not guaranteed.

use std::f64::consts::PI;

use crate::error::{EngineError, EngineResult};

/// Seed gain applied to the target pseudo-velocity when building the
/// initial amplitude guess. For a lightly damped oscillator at resonance
/// the peak response is roughly twice the pseudo-velocity of the driving
/// component; treated as a tunable constant, not a physical law.
pub const SEED_GAIN: f64 = 2.0;

/// Ordinates at or below this magnitude are considered vanished; the ratio
/// correction is undefined there.
const ORDINATE_FLOOR: f64 = 1e-12;

/// Adjusts the amplitude vector toward the target spectrum.
#[derive(Debug, Clone)]
pub struct Tuner {
    periods: Vec<f64>,
    target_sa: Vec<f64>,
    target_psv: Vec<f64>,
}

impl Tuner {
    /// Creates a tuner from the synthesis period grid and the target Sa
    /// interpolated onto that same grid.
    ///
    /// # Errors
    /// Configuration errors for mismatched lengths, an empty grid, or
    /// non-positive periods.
    pub fn new(periods: Vec<f64>, target_sa: Vec<f64>) -> EngineResult<Self> {
        if periods.len() != target_sa.len() {
            return Err(EngineError::length_mismatch(periods.len(), target_sa.len()));
        }
        if periods.is_empty() {
            return Err(EngineError::empty("synthesis grid"));
        }
        if let Some(&bad) = periods.iter().find(|&&t| !(t > 0.0) || !t.is_finite()) {
            return Err(EngineError::InvalidPeriod { period: bad });
        }
        let target_psv = periods
            .iter()
            .zip(&target_sa)
            .map(|(&t, &sa)| (2.0 * PI / t) * sa)
            .collect();
        Ok(Self {
            periods,
            target_sa,
            target_psv,
        })
    }

    /// The synthesis period grid the amplitude indices are aligned with.
    pub fn periods(&self) -> &[f64] {
        &self.periods
    }

    /// Number of amplitude entries this tuner manages.
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Always false; an empty tuner cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Initial amplitude guess: `SEED_GAIN` times the target
    /// pseudo-velocity at each period.
    pub fn initial_amplitude(&self) -> Vec<f64> {
        self.target_psv.iter().map(|&psv| SEED_GAIN * psv).collect()
    }

    /// Proportional correction: `new[i] = current[i] · target[i] / achieved[i]`.
    ///
    /// `achieved_sa` must be computed at the synthesis grid so it is
    /// index-aligned with `current`; feeding a spectrum from a different
    /// grid silently corrupts the correction, which is why lengths are
    /// checked here.
    ///
    /// # Errors
    /// [`EngineError::DegenerateOrdinate`] if any achieved ordinate is
    /// zero, negative, or not finite. The run aborts rather than letting a
    /// division fault poison every later iteration.
    pub fn tune(&self, current: &[f64], achieved_sa: &[f64]) -> EngineResult<Vec<f64>> {
        if current.len() != self.periods.len() {
            return Err(EngineError::AmplitudeLength {
                expected: self.periods.len(),
                found: current.len(),
            });
        }
        if achieved_sa.len() != self.periods.len() {
            return Err(EngineError::length_mismatch(
                self.periods.len(),
                achieved_sa.len(),
            ));
        }

        let mut next = Vec::with_capacity(current.len());
        for i in 0..current.len() {
            let achieved = achieved_sa[i];
            if !achieved.is_finite() || achieved <= ORDINATE_FLOOR {
                return Err(EngineError::DegenerateOrdinate {
                    period: self.periods[i],
                });
            }
            next.push(current[i] * self.target_sa[i] / achieved);
        }
        Ok(next)
    }
}
