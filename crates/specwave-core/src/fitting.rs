//! Acceptance criteria for spectral fit.
//!
//! The criterion set is a closed enum rather than an open list of
//! closures: each kind carries its documented period sub-range, and the
//! range filter is applied here at the predicate boundary, never upstream.
//! Target and achieved spectra must share the fitting grid; a length
//! mismatch fails the criterion outright instead of judging misaligned
//! pairs.

use serde::Serialize;

use crate::grid::{MAX_PERIOD, MIN_PERIOD};
use crate::spectrum::{Spectrum, SI_BAND};

/// Minimum allowed achieved/target ratio across the fitting range.
pub const MIN_SPEC_RATIO_LIMIT: f64 = 0.85;

/// Maximum allowed root-mean-square deviation of the ratio from 1.
pub const VARIATION_LIMIT: f64 = 0.05;

/// Maximum allowed deviation of the mean ratio from 1.
pub const MEAN_ERROR_LIMIT: f64 = 0.02;

/// One acceptance test on a target/achieved spectrum pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FittingCriterion {
    /// `min(achieved/target) >= 0.85` over the full fitting range.
    MinSpecRatio,
    /// RMS deviation of the ratio from 1 at most 0.05.
    VariationCoefficient,
    /// Mean ratio within 0.02 of 1.
    MeanError,
    /// Target SI over achieved SI at least 1, periods in (1, 5] only.
    SpectralIntensityRatio,
}

impl FittingCriterion {
    /// The canonical criterion battery, in evaluation order.
    pub fn all() -> [FittingCriterion; 4] {
        [
            FittingCriterion::MinSpecRatio,
            FittingCriterion::VariationCoefficient,
            FittingCriterion::MeanError,
            FittingCriterion::SpectralIntensityRatio,
        ]
    }

    /// Stable name for reports.
    pub fn name(&self) -> &'static str {
        match self {
            FittingCriterion::MinSpecRatio => "min_spec_ratio",
            FittingCriterion::VariationCoefficient => "variation_coefficient",
            FittingCriterion::MeanError => "mean_error",
            FittingCriterion::SpectralIntensityRatio => "si_ratio",
        }
    }

    /// Period sub-range this criterion judges, in seconds. The SI band is
    /// open at its lower bound; the others are closed ranges.
    pub fn period_range(&self) -> (f64, f64) {
        match self {
            FittingCriterion::SpectralIntensityRatio => SI_BAND,
            _ => (MIN_PERIOD, MAX_PERIOD),
        }
    }

    /// Evaluates the criterion for an achieved spectrum against the target.
    pub fn evaluate(&self, target: &Spectrum, achieved: &Spectrum) -> bool {
        if target.len() != achieved.len() {
            return false;
        }
        match self {
            FittingCriterion::MinSpecRatio => {
                let e = ratios(target, achieved);
                !e.is_empty() && e.iter().fold(f64::INFINITY, |m, &r| m.min(r)) >= MIN_SPEC_RATIO_LIMIT
            }
            FittingCriterion::VariationCoefficient => {
                let e = ratios(target, achieved);
                if e.is_empty() {
                    return false;
                }
                let mean_sq =
                    e.iter().map(|&r| (r - 1.0) * (r - 1.0)).sum::<f64>() / e.len() as f64;
                mean_sq.sqrt() <= VARIATION_LIMIT
            }
            FittingCriterion::MeanError => {
                let e = ratios(target, achieved);
                if e.is_empty() {
                    return false;
                }
                let mean = e.iter().sum::<f64>() / e.len() as f64;
                (1.0 - mean).abs() <= MEAN_ERROR_LIMIT
            }
            FittingCriterion::SpectralIntensityRatio => {
                let achieved_si = achieved.spectral_intensity();
                if achieved_si <= 0.0 {
                    return false;
                }
                target.spectral_intensity() / achieved_si >= 1.0
            }
        }
    }
}

/// Achieved/target ratios over the fitting range. Zero-target ordinates
/// carry no fit information and are skipped.
fn ratios(target: &Spectrum, achieved: &Spectrum) -> Vec<f64> {
    let mut out = Vec::new();
    for i in 0..target.len() {
        let period = target.periods()[i];
        let target_sa = target.sa()[i];
        if (MIN_PERIOD..=MAX_PERIOD).contains(&period) && target_sa > 0.0 {
            out.push(achieved.sa()[i] / target_sa);
        }
    }
    out
}
