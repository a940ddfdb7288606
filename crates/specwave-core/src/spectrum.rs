//! Response-spectrum data model.
//!
//! A [`Spectrum`] holds parallel period/Sa arrays, strictly aligned by
//! index. The same type serves the interpolated target spectrum and the
//! achieved spectrum the oracle computes each iteration.

use std::f64::consts::PI;

use crate::error::{EngineError, EngineResult};

/// Period band over which Spectral Intensity integrates, lower bound
/// exclusive, in seconds.
pub const SI_BAND: (f64, f64) = (1.0, 5.0);

/// Normalizing divisor in the Spectral Intensity index.
pub const SI_DIVISOR: f64 = 2.4;

/// Pseudo-acceleration ordinates over an ordered period grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    periods: Vec<f64>,
    sa: Vec<f64>,
}

impl Spectrum {
    /// Creates a spectrum from parallel period/Sa arrays.
    ///
    /// # Errors
    /// [`EngineError::LengthMismatch`] if the arrays differ in length,
    /// [`EngineError::Empty`] if they are empty,
    /// [`EngineError::InvalidPeriod`] if any period is non-positive.
    pub fn new(periods: Vec<f64>, sa: Vec<f64>) -> EngineResult<Self> {
        if periods.len() != sa.len() {
            return Err(EngineError::length_mismatch(periods.len(), sa.len()));
        }
        if periods.is_empty() {
            return Err(EngineError::empty("spectrum"));
        }
        if let Some(&bad) = periods.iter().find(|&&t| !(t > 0.0) || !t.is_finite()) {
            return Err(EngineError::InvalidPeriod { period: bad });
        }
        Ok(Self { periods, sa })
    }

    /// Oscillator periods in seconds.
    pub fn periods(&self) -> &[f64] {
        &self.periods
    }

    /// Pseudo-spectral accelerations, index-aligned with [`Self::periods`].
    pub fn sa(&self) -> &[f64] {
        &self.sa
    }

    /// Number of ordinates.
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Always false; an empty spectrum cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Pseudo-spectral velocity per ordinate, `(2π/T) · Sa`.
    pub fn pseudo_velocity(&self) -> Vec<f64> {
        self.periods
            .iter()
            .zip(&self.sa)
            .map(|(&t, &sa)| (2.0 * PI / t) * sa)
            .collect()
    }

    /// Spectral Intensity: the trapezoidal integral of pseudo-velocity over
    /// periods in `(1, 5]` seconds, divided by 2.4.
    ///
    /// Ordinates outside the band do not contribute; fewer than two
    /// in-band ordinates integrate to zero.
    pub fn spectral_intensity(&self) -> f64 {
        let psv = self.pseudo_velocity();
        let in_band: Vec<(f64, f64)> = self
            .periods
            .iter()
            .zip(&psv)
            .filter(|(&t, _)| t > SI_BAND.0 && t <= SI_BAND.1)
            .map(|(&t, &v)| (t, v))
            .collect();

        let mut integral = 0.0;
        for pair in in_band.windows(2) {
            let (t0, v0) = pair[0];
            let (t1, v1) = pair[1];
            integral += 0.5 * (v0 + v1) * (t1 - t0);
        }
        integral / SI_DIVISOR
    }
}
