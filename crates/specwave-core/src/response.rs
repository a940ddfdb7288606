//! Response-spectrum computation.
//!
//! The matching loop only needs `ComputeSpectrum(wave, periods, damping)`;
//! that seam is the [`SpectrumOracle`] trait so tests can drive the loop
//! with canned spectra. The production oracle time-steps one damped
//! single-degree-of-freedom oscillator per period with the Newmark
//! average-acceleration method (unconditionally stable) and reports
//! `Sa = ω² · max|d|`.

use crate::error::{EngineError, EngineResult};
use crate::spectrum::Spectrum;
use crate::wave::Wave;

use std::f64::consts::PI;

/// Fraction of critical damping assumed throughout the engine.
pub const DAMPING_RATIO: f64 = 0.05;

/// Computes a pseudo-acceleration spectrum for a wave.
///
/// Implementations must return ordinates aligned 1:1 by index with the
/// requested `periods`.
pub trait SpectrumOracle {
    /// Computes Sa at each requested period.
    fn compute(&self, wave: &Wave, periods: &[f64], damping: f64) -> EngineResult<Spectrum>;
}

/// Newmark-based response-spectrum oracle.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseOracle;

impl ResponseOracle {
    /// Creates the oracle.
    pub fn new() -> Self {
        Self
    }

    /// Pseudo-spectral acceleration at a single period.
    pub fn sa_at_period(&self, wave: &Wave, period: f64, damping: f64) -> EngineResult<f64> {
        validate_damping(damping)?;
        if !(period > 0.0) || !period.is_finite() {
            return Err(EngineError::InvalidPeriod { period });
        }
        let omega = 2.0 * PI / period;
        let d_max = peak_relative_displacement(wave.samples(), wave.dt(), omega, damping);
        Ok(omega * omega * d_max)
    }
}

impl SpectrumOracle for ResponseOracle {
    fn compute(&self, wave: &Wave, periods: &[f64], damping: f64) -> EngineResult<Spectrum> {
        validate_damping(damping)?;
        if periods.is_empty() {
            return Err(EngineError::empty("period grid"));
        }
        let mut sa = Vec::with_capacity(periods.len());
        for &period in periods {
            sa.push(self.sa_at_period(wave, period, damping)?);
        }
        Spectrum::new(periods.to_vec(), sa)
    }
}

fn validate_damping(damping: f64) -> EngineResult<()> {
    if !(damping > 0.0 && damping < 1.0) {
        return Err(EngineError::InvalidDamping { damping });
    }
    Ok(())
}

/// Peak relative displacement of a damped SDOF oscillator under ground
/// acceleration, Newmark average acceleration (gamma = 1/2, beta = 1/4).
fn peak_relative_displacement(accel: &[f64], dt: f64, omega: f64, damping: f64) -> f64 {
    let k = omega * omega;
    let c = 2.0 * damping * omega;
    let k_hat = k + 2.0 * c / dt + 4.0 / (dt * dt);

    // Equation of motion: d'' + c d' + k d = -ug''
    let mut d = 0.0_f64;
    let mut v = 0.0_f64;
    let mut a = -accel[0];
    let mut d_max = 0.0_f64;

    for j in 0..accel.len() - 1 {
        let dp = -(accel[j + 1] - accel[j]);
        let dp_hat = dp + (4.0 / dt + 2.0 * c) * v + 2.0 * a;
        let dd = dp_hat / k_hat;
        let dv = 2.0 * dd / dt - 2.0 * v;
        d += dd;
        v += dv;
        a = -accel[j + 1] - c * v - k * d;
        d_max = d_max.max(d.abs());
    }
    d_max
}
