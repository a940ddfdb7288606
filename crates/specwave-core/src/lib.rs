//! SpecWave matching engine
//!
//! This crate synthesizes artificial ground-acceleration time histories
//! whose 5%-damped pseudo-acceleration response spectra match a target
//! design spectrum within prescribed tolerances.
//!
//! # Overview
//!
//! A wave is built as an envelope-shaped sum of sinusoids, one component
//! per synthesis-grid period with a fixed random phase. A closed loop
//! drives the component amplitudes toward the target:
//!
//! - [`Synthesizer`] - builds the time history from the amplitude vector
//! - [`ResponseOracle`] - computes the achieved response spectrum
//! - [`Inspector`] - judges the fit against four acceptance criteria
//! - [`Tuner`] - corrects each amplitude by its target/achieved ratio
//! - [`Matcher`] - runs synthesize/inspect/tune under an iteration budget
//!
//! Non-convergence within the budget is a warning, not an error: the run
//! still yields the last synthesized wave plus a
//! [`MatchStatus::LimitExceeded`] status.
//!
//! # Determinism
//!
//! Given the same seed and configuration the output is byte-identical
//! across runs. Phases come from a PCG32 stream whose seed is derived via
//! BLAKE3 hashing, and the synthesis summation runs in fixed index order.
//!
//! # Example
//!
//! ```ignore
//! use specwave_core::{grid, interp, phase, Envelope, Inspector, MatchConfig,
//!     Matcher, ResponseOracle, Spectrum, Synthesizer, Tuner};
//!
//! let synth_periods = grid::synthesis_periods();
//! let fitting_periods = grid::fitting_periods();
//! let target_fit = interp::interpolate(&raw_t, &raw_sa, &fitting_periods)?;
//! let target_synth = interp::interpolate(&raw_t, &raw_sa, &synth_periods)?;
//!
//! let phases = phase::phase_angles_for_seed(42, synth_periods.len());
//! let synthesizer =
//!     Synthesizer::from_periods(0.01, 6000, &synth_periods, &phases, Envelope::Level1)?;
//! let tuner = Tuner::new(synth_periods, target_synth)?;
//! let inspector = Inspector::new(Spectrum::new(fitting_periods.clone(), target_fit)?);
//!
//! let matcher = Matcher::new(synthesizer, tuner, inspector, ResponseOracle::new(),
//!     fitting_periods, MatchConfig::default())?;
//! let outcome = matcher.run(matcher.initial_amplitude())?;
//! ```

pub mod envelope;
pub mod error;
pub mod fitting;
pub mod grid;
pub mod inspector;
pub mod interp;
pub mod matcher;
pub mod phase;
pub mod response;
pub mod rng;
pub mod spectrum;
pub mod synthesizer;
pub mod tuner;
pub mod wave;

// Re-export main types at crate root
pub use envelope::Envelope;
pub use error::{EngineError, EngineResult};
pub use fitting::FittingCriterion;
pub use inspector::{CriterionOutcome, Inspector};
pub use matcher::{MatchConfig, MatchOutcome, MatchStatus, Matcher, DEFAULT_ITERATION_LIMIT};
pub use response::{ResponseOracle, SpectrumOracle, DAMPING_RATIO};
pub use spectrum::Spectrum;
pub use synthesizer::{FrequencyComponent, Synthesizer};
pub use tuner::Tuner;
pub use wave::Wave;

#[cfg(test)]
mod integration_tests {
    use super::*;

    fn flat_target_matcher(
        duration: f64,
        dt: f64,
        seed: u32,
        limit: usize,
    ) -> Matcher<ResponseOracle> {
        let synth_periods = grid::synthesis_periods();
        let fitting_periods = grid::fitting_periods();
        let target_fit = vec![1.0; fitting_periods.len()];
        let target_synth = vec![1.0; synth_periods.len()];

        let n = (duration / dt) as usize;
        let phases = phase::phase_angles_for_seed(seed, synth_periods.len());
        let synthesizer =
            Synthesizer::from_periods(dt, n, &synth_periods, &phases, Envelope::Level1).unwrap();
        let tuner = Tuner::new(synth_periods, target_synth).unwrap();
        let inspector =
            Inspector::new(Spectrum::new(fitting_periods.clone(), target_fit).unwrap());

        Matcher::new(
            synthesizer,
            tuner,
            inspector,
            ResponseOracle::new(),
            fitting_periods,
            MatchConfig {
                damping: DAMPING_RATIO,
                iteration_limit: limit,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_single_iteration_flat_target_reports_limit_exceeded() {
        // A single random-phase draw essentially never satisfies all four
        // criteria at once, so a budget of one must end as best-effort.
        let matcher = flat_target_matcher(60.0, 0.01, 42, 1);
        let outcome = matcher.run(matcher.initial_amplitude()).unwrap();

        assert_eq!(outcome.status, MatchStatus::LimitExceeded);
        assert_eq!(outcome.iterations, 1);
        assert_eq!(outcome.wave.len(), 6000);
        assert_eq!(outcome.spectrum.len(), grid::FITTING_POINTS);
    }

    #[test]
    fn test_loop_terminates_within_budget() {
        let limit = 3;
        let matcher = flat_target_matcher(20.0, 0.02, 7, limit);
        let mut calls = 0;
        let outcome = matcher
            .run_with_progress(matcher.initial_amplitude(), |_| calls += 1)
            .unwrap();

        assert!(outcome.iterations <= limit);
        assert_eq!(calls, outcome.iterations);
        assert!(!outcome.wave.is_empty());
        match outcome.status {
            MatchStatus::Converged => assert!(matcher.report(&outcome.spectrum)
                .iter()
                .all(|o| o.passed)),
            MatchStatus::LimitExceeded => assert_eq!(outcome.iterations, limit),
        }
    }

    #[test]
    fn test_runs_are_reproducible_per_seed() {
        let a = flat_target_matcher(10.0, 0.02, 42, 1);
        let b = flat_target_matcher(10.0, 0.02, 42, 1);
        let wave_a = a.run(a.initial_amplitude()).unwrap().wave;
        let wave_b = b.run(b.initial_amplitude()).unwrap().wave;
        assert_eq!(wave_a, wave_b);

        let c = flat_target_matcher(10.0, 0.02, 43, 1);
        let wave_c = c.run(c.initial_amplitude()).unwrap().wave;
        assert_ne!(wave_a, wave_c);
    }

    #[test]
    fn test_initial_amplitude_is_positive_for_positive_target() {
        let matcher = flat_target_matcher(10.0, 0.02, 1, 1);
        assert!(matcher.initial_amplitude().iter().all(|&a| a > 0.0));
    }
}
