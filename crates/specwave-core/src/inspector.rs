//! Multi-criteria convergence judgement.

use crate::fitting::FittingCriterion;
use crate::spectrum::Spectrum;

/// Outcome of one criterion for reporting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriterionOutcome {
    /// The criterion evaluated.
    pub criterion: FittingCriterion,
    /// Whether the achieved spectrum satisfied it.
    pub passed: bool,
}

/// Evaluates the acceptance battery against the target spectrum.
///
/// The inspector is a pure function of its inputs: inspecting the same
/// achieved spectrum twice yields the same verdict.
#[derive(Debug, Clone)]
pub struct Inspector {
    target: Spectrum,
    criteria: Vec<FittingCriterion>,
}

impl Inspector {
    /// Creates an inspector with the full canonical criterion battery.
    pub fn new(target: Spectrum) -> Self {
        Self::with_criteria(target, FittingCriterion::all().to_vec())
    }

    /// Creates an inspector with an explicit criterion subset.
    pub fn with_criteria(target: Spectrum, criteria: Vec<FittingCriterion>) -> Self {
        Self { target, criteria }
    }

    /// The target spectrum on the fitting grid.
    pub fn target(&self) -> &Spectrum {
        &self.target
    }

    /// True iff every active criterion passes. Short-circuits on the first
    /// failure; criterion order does not affect the verdict.
    pub fn inspect(&self, achieved: &Spectrum) -> bool {
        self.criteria
            .iter()
            .all(|c| c.evaluate(&self.target, achieved))
    }

    /// Evaluates every criterion without short-circuiting, for reporting.
    pub fn report(&self, achieved: &Spectrum) -> Vec<CriterionOutcome> {
        self.criteria
            .iter()
            .map(|&criterion| CriterionOutcome {
                criterion,
                passed: criterion.evaluate(&self.target, achieved),
            })
            .collect()
    }
}
