//! Random phase angles for the component sinusoids.
//!
//! Phases are drawn once at startup, uniform over `[0, 2π)`, and stay fixed
//! for the lifetime of a run; the synthesizer itself has no randomness.

use std::f64::consts::PI;

use rand::Rng;
use rand_pcg::Pcg32;

use crate::rng::{create_rng, derive_component_seed};

/// Draws `count` phase angles uniform over `[0, 2π)`.
pub fn random_phase_angles(count: usize, rng: &mut Pcg32) -> Vec<f64> {
    (0..count).map(|_| rng.gen::<f64>() * 2.0 * PI).collect()
}

/// Draws a reproducible phase set for a run seed.
///
/// The phase stream is derived from the base seed with the `"phase"`
/// component key, so other seeded concerns never perturb it.
pub fn phase_angles_for_seed(seed: u32, count: usize) -> Vec<f64> {
    let mut rng = create_rng(derive_component_seed(seed, "phase"));
    random_phase_angles(count, &mut rng)
}
