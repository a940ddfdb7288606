//! Sum-of-sinusoids wave synthesis.
//!
//! The synthesizer owns everything that stays fixed across iterations:
//! sample count, sampling interval, the `(ω, φ)` component list, and the
//! envelope. Only the amplitude vector varies, so a run's wave is a pure
//! function of it. Component terms are summed in index order, keeping the
//! output bit-for-bit reproducible.

use std::f64::consts::PI;

use crate::envelope::Envelope;
use crate::error::{EngineError, EngineResult};
use crate::wave::Wave;

/// One sinusoidal component of the synthesized motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyComponent {
    /// Angular frequency in rad/s.
    pub omega: f64,
    /// Phase angle in radians, drawn once at startup.
    pub phase: f64,
}

/// Builds acceleration time histories from an amplitude vector.
#[derive(Debug, Clone)]
pub struct Synthesizer {
    dt: f64,
    num_samples: usize,
    components: Vec<FrequencyComponent>,
    envelope: Envelope,
}

impl Synthesizer {
    /// Creates a synthesizer from explicit frequency components.
    ///
    /// # Errors
    /// Configuration errors for a non-positive `dt`, zero samples, an empty
    /// component list, or a non-positive angular frequency.
    pub fn new(
        dt: f64,
        num_samples: usize,
        components: Vec<FrequencyComponent>,
        envelope: Envelope,
    ) -> EngineResult<Self> {
        if !(dt > 0.0) || !dt.is_finite() {
            return Err(EngineError::InvalidTimeStep { dt });
        }
        if num_samples == 0 {
            return Err(EngineError::empty("wave"));
        }
        if components.is_empty() {
            return Err(EngineError::empty("frequency components"));
        }
        if let Some(bad) = components.iter().find(|c| !(c.omega > 0.0)) {
            return Err(EngineError::InvalidPeriod {
                period: 2.0 * PI / bad.omega,
            });
        }
        Ok(Self {
            dt,
            num_samples,
            components,
            envelope,
        })
    }

    /// Creates a synthesizer from a period grid and matching phase angles.
    ///
    /// Each period contributes one component at `ω = 2π/T`; `phases` must
    /// be index-aligned with `periods`.
    pub fn from_periods(
        dt: f64,
        num_samples: usize,
        periods: &[f64],
        phases: &[f64],
        envelope: Envelope,
    ) -> EngineResult<Self> {
        if periods.len() != phases.len() {
            return Err(EngineError::length_mismatch(periods.len(), phases.len()));
        }
        if let Some(&bad) = periods.iter().find(|&&t| !(t > 0.0) || !t.is_finite()) {
            return Err(EngineError::InvalidPeriod { period: bad });
        }
        let components = periods
            .iter()
            .zip(phases)
            .map(|(&t, &phi)| FrequencyComponent {
                omega: 2.0 * PI / t,
                phase: phi,
            })
            .collect();
        Self::new(dt, num_samples, components, envelope)
    }

    /// Sampling interval in seconds.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Number of samples per synthesized wave.
    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    /// Number of frequency components, i.e. the expected amplitude length.
    pub fn num_components(&self) -> usize {
        self.components.len()
    }

    /// Synthesizes a wave for the given amplitude vector.
    ///
    /// `sample[j] = envelope(t) · Σᵢ amplitude[i] · sin(ωᵢ t + φᵢ)` with
    /// `t = j·dt`. This inner loop is O(samples × components) and dominates
    /// the cost of every iteration.
    ///
    /// # Errors
    /// [`EngineError::AmplitudeLength`] if `amplitude` is not index-aligned
    /// with the component list.
    pub fn synthesize(&self, amplitude: &[f64]) -> EngineResult<Wave> {
        if amplitude.len() != self.components.len() {
            return Err(EngineError::AmplitudeLength {
                expected: self.components.len(),
                found: amplitude.len(),
            });
        }

        let mut samples = Vec::with_capacity(self.num_samples);
        for j in 0..self.num_samples {
            let t = j as f64 * self.dt;
            let mut raw = 0.0;
            for (comp, &a) in self.components.iter().zip(amplitude) {
                raw += a * (comp.omega * t + comp.phase).sin();
            }
            samples.push(self.envelope.value(t) * raw);
        }
        Wave::new(self.dt, samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn components(periods: &[f64]) -> Vec<FrequencyComponent> {
        periods
            .iter()
            .map(|&t| FrequencyComponent {
                omega: 2.0 * PI / t,
                phase: 0.0,
            })
            .collect()
    }

    #[test]
    fn test_zero_amplitudes_give_zero_wave() {
        for envelope in [Envelope::Identity, Envelope::Level1, Envelope::Level2] {
            let synth =
                Synthesizer::new(0.01, 200, components(&[0.1, 0.5, 1.0]), envelope).unwrap();
            let wave = synth.synthesize(&[0.0, 0.0, 0.0]).unwrap();
            assert!(wave.samples().iter().all(|&s| s == 0.0));
        }
    }

    #[test]
    fn test_single_component_sine() {
        // One unit-amplitude component with T = 1 s: sample at t = 0.25 is
        // sin(π/2) = 1.
        let synth = Synthesizer::new(0.25, 5, components(&[1.0]), Envelope::Identity).unwrap();
        let wave = synth.synthesize(&[1.0]).unwrap();
        assert!((wave.samples()[0] - 0.0).abs() < 1e-12);
        assert!((wave.samples()[1] - 1.0).abs() < 1e-12);
        assert!((wave.samples()[2] - 0.0).abs() < 1e-9);
        assert!((wave.samples()[3] + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_envelope_scales_samples() {
        let synth = Synthesizer::new(0.25, 8, components(&[1.0]), Envelope::Level1).unwrap();
        let flat = Synthesizer::new(0.25, 8, components(&[1.0]), Envelope::Identity).unwrap();
        let shaped = synth.synthesize(&[2.0]).unwrap();
        let plain = flat.synthesize(&[2.0]).unwrap();
        for (j, (&s, &p)) in shaped.samples().iter().zip(plain.samples()).enumerate() {
            let t = j as f64 * 0.25;
            assert!((s - Envelope::Level1.value(t) * p).abs() < 1e-12);
        }
    }

    #[test]
    fn test_deterministic_output() {
        let synth = Synthesizer::from_periods(
            0.01,
            500,
            &[0.1, 0.2, 0.5, 1.0],
            &[0.3, 1.1, 2.9, 4.2],
            Envelope::Level1,
        )
        .unwrap();
        let amp = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(synth.synthesize(&amp).unwrap(), synth.synthesize(&amp).unwrap());
    }

    #[test]
    fn test_sample_count_and_dt() {
        let synth = Synthesizer::new(0.02, 300, components(&[0.5]), Envelope::Identity).unwrap();
        let wave = synth.synthesize(&[1.0]).unwrap();
        assert_eq!(wave.len(), 300);
        assert_eq!(wave.dt(), 0.02);
    }

    #[test]
    fn test_rejects_misaligned_amplitude() {
        let synth = Synthesizer::new(0.01, 10, components(&[0.5, 1.0]), Envelope::Identity).unwrap();
        assert!(matches!(
            synth.synthesize(&[1.0]),
            Err(EngineError::AmplitudeLength {
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_rejects_bad_configuration() {
        assert!(Synthesizer::new(0.0, 10, components(&[1.0]), Envelope::Identity).is_err());
        assert!(Synthesizer::new(0.01, 0, components(&[1.0]), Envelope::Identity).is_err());
        assert!(Synthesizer::new(0.01, 10, vec![], Envelope::Identity).is_err());
        assert!(
            Synthesizer::from_periods(0.01, 10, &[1.0, 2.0], &[0.0], Envelope::Identity).is_err()
        );
        assert!(Synthesizer::from_periods(0.01, 10, &[-1.0], &[0.0], Envelope::Identity).is_err());
    }
}
