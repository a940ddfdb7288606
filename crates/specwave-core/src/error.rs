//! Error types for the matching engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while configuring or running the matching engine.
///
/// Configuration errors are reported before any synthesis begins.
/// [`EngineError::DegenerateOrdinate`] is the one runtime failure: a
/// vanishing achieved ordinate would corrupt the amplitude vector for every
/// remaining iteration, so the run aborts instead of substituting a value.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Unknown envelope name.
    #[error("unknown envelope '{name}'")]
    UnknownEnvelope {
        /// The name that failed to resolve.
        name: String,
    },

    /// Invalid sampling interval.
    #[error("invalid time step: {dt} seconds")]
    InvalidTimeStep {
        /// The invalid time step.
        dt: f64,
    },

    /// Invalid duration.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// Non-positive oscillator period.
    #[error("invalid period: {period} seconds")]
    InvalidPeriod {
        /// The invalid period.
        period: f64,
    },

    /// Damping ratio outside (0, 1).
    #[error("invalid damping ratio: {damping}")]
    InvalidDamping {
        /// The invalid damping ratio.
        damping: f64,
    },

    /// Parallel arrays of different lengths.
    #[error("length mismatch: {periods} periods vs {values} values")]
    LengthMismatch {
        /// Number of periods.
        periods: usize,
        /// Number of values.
        values: usize,
    },

    /// An empty spectrum, grid, or wave where data is required.
    #[error("empty {what}")]
    Empty {
        /// What was empty.
        what: &'static str,
    },

    /// Amplitude vector does not match the component count.
    #[error("amplitude length {found} does not match {expected} frequency components")]
    AmplitudeLength {
        /// Expected number of amplitudes.
        expected: usize,
        /// Number of amplitudes supplied.
        found: usize,
    },

    /// Iteration limit of zero would never synthesize anything.
    #[error("iteration limit must be at least 1")]
    ZeroIterationLimit,

    /// Interpolation query outside the known period range.
    #[error("period {query} outside interpolation range [{min}, {max}]")]
    InterpolationRange {
        /// The out-of-range query period.
        query: f64,
        /// Minimum known period.
        min: f64,
        /// Maximum known period.
        max: f64,
    },

    /// Achieved spectral ordinate is zero or not finite; the ratio
    /// correction is undefined at this period.
    #[error("achieved spectrum vanishes at period {period} seconds; tuning impossible")]
    DegenerateOrdinate {
        /// Period at which the ordinate degenerated.
        period: f64,
    },
}

impl EngineError {
    /// Creates an empty-input error.
    pub fn empty(what: &'static str) -> Self {
        Self::Empty { what }
    }

    /// Creates a length-mismatch error.
    pub fn length_mismatch(periods: usize, values: usize) -> Self {
        Self::LengthMismatch { periods, values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_envelope_message() {
        let err = EngineError::UnknownEnvelope {
            name: "bogus".to_string(),
        };
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn test_degenerate_ordinate_names_period() {
        let err = EngineError::DegenerateOrdinate { period: 0.25 };
        assert!(err.to_string().contains("0.25"));
        assert!(err.to_string().contains("tuning impossible"));
    }

    #[test]
    fn test_length_mismatch_helper() {
        let err = EngineError::length_mismatch(3, 4);
        assert!(err.to_string().contains('3'));
        assert!(err.to_string().contains('4'));
    }
}
