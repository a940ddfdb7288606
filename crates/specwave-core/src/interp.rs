//! Piecewise-linear interpolation of spectrum ordinates onto a period grid.
//!
//! Defined only within the known period range. A query outside
//! `[min, max]` is an explicit error rather than a silent zero: the design
//! spectrum must cover the whole grid it is resampled onto.

use crate::error::{EngineError, EngineResult};

/// Interpolates `known_v` (sampled at `known_t`) onto `queries`.
///
/// The known points need not arrive sorted; they are ordered by period
/// before interpolation. Exact duplicate periods keep their first value.
///
/// # Errors
/// [`EngineError::InterpolationRange`] if a query lies outside the known
/// range, [`EngineError::LengthMismatch`] / [`EngineError::Empty`] on
/// malformed input.
pub fn interpolate(known_t: &[f64], known_v: &[f64], queries: &[f64]) -> EngineResult<Vec<f64>> {
    if known_t.len() != known_v.len() {
        return Err(EngineError::length_mismatch(known_t.len(), known_v.len()));
    }
    if known_t.len() < 2 {
        return Err(EngineError::empty("interpolation table"));
    }

    let mut points: Vec<(f64, f64)> = known_t
        .iter()
        .copied()
        .zip(known_v.iter().copied())
        .collect();
    points.sort_by(|a, b| a.0.total_cmp(&b.0));
    points.dedup_by(|next, prev| next.0 == prev.0);

    let min = points[0].0;
    let max = points[points.len() - 1].0;

    let mut out = Vec::with_capacity(queries.len());
    for &q in queries {
        if q < min || q > max {
            return Err(EngineError::InterpolationRange { query: q, min, max });
        }
        let idx = points.partition_point(|&(t, _)| t < q);
        if idx < points.len() && points[idx].0 == q {
            out.push(points[idx].1);
            continue;
        }
        let (t0, v0) = points[idx - 1];
        let (t1, v1) = points[idx];
        let frac = (q - t0) / (t1 - t0);
        out.push(v0 + (v1 - v0) * frac);
    }
    Ok(out)
}
