//! Time-domain amplitude envelopes.
//!
//! An envelope shapes the stationary sum-of-sinusoids into the
//! rise/plateau/decay profile of a real ground motion. The two standard
//! shapes share a quadratic 5-second rise and differ in plateau length and
//! decay rate; both are continuous at their breakpoints (the decay starts
//! at `exp(0) = 1.0`, the plateau value).

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Amplitude envelope applied to the synthesized wave.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Envelope {
    /// Constant 1.0, no shaping.
    Identity,
    /// 5 s quadratic rise, plateau to 25 s, `exp(-0.066 (t-25))` decay.
    Level1,
    /// 5 s quadratic rise, plateau to 35 s, `exp(-0.027 (t-35))` decay.
    Level2,
    /// Rise/plateau/decay with caller-supplied breakpoints.
    Custom {
        /// End of the quadratic rise in seconds.
        rise_end: f64,
        /// End of the unit plateau in seconds.
        plateau_end: f64,
        /// Exponential decay rate after the plateau.
        decay_rate: f64,
    },
}

impl Envelope {
    /// Resolves an envelope by name.
    ///
    /// Accepted names: `id`/`identity`, `l1`/`level1`, `l2`/`level2`.
    /// Unknown names are a configuration error; there is no silent default.
    pub fn from_name(name: &str) -> EngineResult<Self> {
        match name {
            "id" | "identity" => Ok(Envelope::Identity),
            "l1" | "level1" => Ok(Envelope::Level1),
            "l2" | "level2" => Ok(Envelope::Level2),
            _ => Err(EngineError::UnknownEnvelope {
                name: name.to_string(),
            }),
        }
    }

    /// Evaluates the envelope at elapsed time `t` (seconds).
    ///
    /// Returns a non-negative multiplier; times before zero clamp to the
    /// start of the rise.
    pub fn value(&self, t: f64) -> f64 {
        match *self {
            Envelope::Identity => 1.0,
            Envelope::Level1 => shaped(t, 5.0, 25.0, 0.066),
            Envelope::Level2 => shaped(t, 5.0, 35.0, 0.027),
            Envelope::Custom {
                rise_end,
                plateau_end,
                decay_rate,
            } => shaped(t, rise_end, plateau_end, decay_rate),
        }
    }
}

/// Quadratic rise to `rise_end`, unit plateau to `plateau_end`, then
/// exponential decay at `decay_rate`.
fn shaped(t: f64, rise_end: f64, plateau_end: f64, decay_rate: f64) -> f64 {
    let t = t.max(0.0);
    if t < rise_end {
        (t / rise_end).powi(2)
    } else if t < plateau_end {
        1.0
    } else {
        (-decay_rate * (t - plateau_end)).exp()
    }
}
