//! Period grids for synthesis and fitting judgement.
//!
//! Two grids coexist: the synthesis grid decides which frequencies compose
//! the wave, the denser fitting grid decides which periods the acceptance
//! tests inspect. Both cover the same bounded range and are ascending.

use crate::error::{EngineError, EngineResult};

/// Shortest period covered by the default grids, in seconds.
pub const MIN_PERIOD: f64 = 0.02;

/// Longest period covered by the default grids, in seconds.
pub const MAX_PERIOD: f64 = 5.0;

/// Number of points in the default synthesis grid.
pub const SYNTHESIS_POINTS: usize = 300;

/// Number of points in the default fitting grid.
pub const FITTING_POINTS: usize = 401;

/// Default period grid for synthesis (one frequency component per point).
pub fn synthesis_periods() -> Vec<f64> {
    log_spaced(MIN_PERIOD, MAX_PERIOD, SYNTHESIS_POINTS)
        .expect("default grid bounds are valid")
}

/// Default period grid for fitting judgement.
pub fn fitting_periods() -> Vec<f64> {
    log_spaced(MIN_PERIOD, MAX_PERIOD, FITTING_POINTS).expect("default grid bounds are valid")
}

/// Builds `count` log-spaced periods on `[min, max]`, ascending.
///
/// The endpoints are pinned exactly so downstream range filters see the
/// nominal bounds rather than rounded neighbours.
pub fn log_spaced(min: f64, max: f64, count: usize) -> EngineResult<Vec<f64>> {
    if min <= 0.0 {
        return Err(EngineError::InvalidPeriod { period: min });
    }
    if max <= min {
        return Err(EngineError::InvalidPeriod { period: max });
    }
    if count < 2 {
        return Err(EngineError::empty("period grid"));
    }

    let ratio = (max / min).powf(1.0 / (count - 1) as f64);
    let mut periods = Vec::with_capacity(count);
    let mut p = min;
    for _ in 0..count - 1 {
        periods.push(p);
        p *= ratio;
    }
    periods.push(max);
    Ok(periods)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grids_cover_range() {
        let synth = synthesis_periods();
        let fit = fitting_periods();
        assert_eq!(synth.len(), SYNTHESIS_POINTS);
        assert_eq!(fit.len(), FITTING_POINTS);
        assert_eq!(synth[0], MIN_PERIOD);
        assert_eq!(*synth.last().unwrap(), MAX_PERIOD);
        assert_eq!(fit[0], MIN_PERIOD);
        assert_eq!(*fit.last().unwrap(), MAX_PERIOD);
    }

    #[test]
    fn test_log_spaced_ascending_and_positive() {
        let grid = log_spaced(0.02, 5.0, 100).unwrap();
        for pair in grid.windows(2) {
            assert!(pair[0] > 0.0);
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_log_spacing_ratio_constant() {
        let grid = log_spaced(0.1, 10.0, 21).unwrap();
        let r0 = grid[1] / grid[0];
        for pair in grid.windows(2).take(19) {
            assert!((pair[1] / pair[0] - r0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rejects_bad_bounds() {
        assert!(log_spaced(0.0, 5.0, 10).is_err());
        assert!(log_spaced(1.0, 1.0, 10).is_err());
        assert!(log_spaced(0.02, 5.0, 1).is_err());
    }
}
